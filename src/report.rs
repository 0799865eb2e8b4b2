// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Row-count and size reports over the footers of one input path.
//!
//! Both reports share the same pipeline: validate the input, resolve it into
//! footers, aggregate, render. They differ only in which total they read and
//! how it is rendered, which is captured by [`Report`].

use std::io::Write;
use std::path::{Path, PathBuf};

use snafu::{ensure, ResultExt};

use crate::aggregate::{aggregate, AggregateRecord};
use crate::error::{InvalidArgumentSnafu, Result, WriteReportSnafu};
use crate::footer::Footer;
use crate::format::format_size;
use crate::resolver::FooterResolver;

/// Options for the size report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeOptions {
    /// Render as a binary-scaled size instead of a raw byte count
    pub pretty: bool,
    /// Report uncompressed row group sizes instead of compressed ones
    pub uncompressed: bool,
}

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    RowCount,
    Size(SizeOptions),
}

impl Report {
    pub fn label(&self) -> &'static str {
        match self {
            Report::RowCount => "RowCount",
            Report::Size(_) => "Size",
        }
    }

    /// Render the value this report reads from `record`
    pub fn render_value(&self, record: &AggregateRecord) -> Result<String> {
        match self {
            Report::RowCount => Ok(record.total_row_count.to_string()),
            Report::Size(options) => {
                let bytes = if options.uncompressed {
                    record.total_uncompressed_bytes
                } else {
                    record.total_compressed_bytes
                };
                format_size(bytes, options.pretty)
            }
        }
    }

    /// Render the report lines for `footers`.
    ///
    /// With `detailed` set, one line per footer precedes the total.
    pub fn render(&self, footers: &[Footer], detailed: bool) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(if detailed { footers.len() + 1 } else { 1 });
        if detailed {
            for footer in footers {
                let value = self.render_value(&footer.aggregate()?)?;
                lines.push(format!(
                    "{}: {}: {}",
                    footer.path().display(),
                    self.label(),
                    value
                ));
            }
        }
        let value = self.render_value(&aggregate(footers)?)?;
        lines.push(format!("{}: {}", self.label(), value));
        Ok(lines)
    }
}

/// Check that exactly one input path was supplied and return it
pub fn validate_input(inputs: &[PathBuf]) -> Result<&Path> {
    ensure!(
        inputs.len() == 1,
        InvalidArgumentSnafu {
            msg: format!("expected exactly one <input> path, got {}", inputs.len()),
        }
    );
    Ok(&inputs[0])
}

/// Run `report` against `inputs` and write the result to `out`.
///
/// Nothing is written unless every step succeeds.
pub fn run_report<R, W>(
    resolver: &R,
    inputs: &[PathBuf],
    report: Report,
    detailed: bool,
    out: &mut W,
) -> Result<()>
where
    R: FooterResolver + ?Sized,
    W: Write,
{
    let input = validate_input(inputs)?;
    let footers = resolver.resolve(input)?;
    let lines = report.render(&footers, detailed)?;

    for line in lines {
        writeln!(out, "{line}").context(WriteReportSnafu)?;
    }
    out.flush().context(WriteReportSnafu)?;
    Ok(())
}
