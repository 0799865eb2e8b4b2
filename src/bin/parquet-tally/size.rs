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

//! Print the total row group size across every footer of an input path.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use parquet_tally::report::{Report, SizeOptions};

use crate::common::print_report;

#[derive(Debug, Parser)]
#[command(about = "Print the total compressed size of a Parquet file or dataset")]
pub struct Args {
    /// The Parquet file or dataset directory to measure
    #[arg(value_name = "INPUT")]
    input: Vec<PathBuf>,

    /// Print a human readable size (KB, MB, GB, ...)
    #[arg(short, long)]
    pretty: bool,

    /// Report the uncompressed size instead of the compressed size
    #[arg(short, long)]
    uncompressed: bool,

    /// Also print the size of every file
    #[arg(short, long)]
    detailed: bool,
}

pub fn run(args: Args) -> Result<()> {
    let report = Report::Size(SizeOptions {
        pretty: args.pretty,
        uncompressed: args.uncompressed,
    });
    print_report(&args.input, report, args.detailed)
}
