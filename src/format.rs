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

//! Rendering byte counts as raw integers or binary-scaled sizes

use std::fmt;

use snafu::ensure;

use crate::error::{InvalidArgumentSnafu, Result};

/// Unit used when rendering a size in pretty mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
}

impl SizeUnit {
    /// Units in ascending order
    pub const LADDER: [SizeUnit; 6] = [
        SizeUnit::Bytes,
        SizeUnit::Kilobytes,
        SizeUnit::Megabytes,
        SizeUnit::Gigabytes,
        SizeUnit::Terabytes,
        SizeUnit::Petabytes,
    ];

    /// Number of bytes in one of this unit
    pub fn divisor(&self) -> f64 {
        let exponent = match self {
            SizeUnit::Bytes => 0,
            SizeUnit::Kilobytes => 1,
            SizeUnit::Megabytes => 2,
            SizeUnit::Gigabytes => 3,
            SizeUnit::Terabytes => 4,
            SizeUnit::Petabytes => 5,
        };
        1024f64.powi(exponent)
    }

    /// Pick the largest unit whose size does not exceed `bytes`.
    ///
    /// Petabytes is the catch-all for anything too large for a smaller tier.
    pub fn for_bytes(bytes: u64) -> Self {
        let bytes = bytes as f64;
        Self::LADDER
            .windows(2)
            .find(|pair| bytes < pair[1].divisor())
            .map(|pair| pair[0])
            .unwrap_or(SizeUnit::Petabytes)
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            SizeUnit::Bytes => "bytes",
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
            SizeUnit::Terabytes => "TB",
            SizeUnit::Petabytes => "PB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Render `bytes` as `"<n> bytes"`, or scaled to a binary unit with three
/// decimal places when `pretty` is set (e.g. `"3.500 KB"`).
///
/// The unit is chosen before rounding, so a value just below a tier boundary
/// can print as `1024.000` of the smaller unit.
///
/// Returns an error for negative input.
pub fn format_size(bytes: i64, pretty: bool) -> Result<String> {
    ensure!(
        bytes >= 0,
        InvalidArgumentSnafu {
            msg: format!("size must be non-negative, got {bytes}"),
        }
    );
    if !pretty {
        return Ok(format!("{bytes} bytes"));
    }

    let unit = SizeUnit::for_bytes(bytes as u64);
    let scaled = bytes as f64 / unit.divisor();
    Ok(format!("{scaled:.3} {unit}"))
}
