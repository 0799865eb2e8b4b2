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

//! Report row counts and sizes of Parquet files and datasets.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod common;
mod rowcount;
mod size;

#[derive(Parser)]
#[command(name = "parquet-tally")]
#[command(author, version, about = "Parquet row count and size reporting tool", long_about = None)]
struct Cli {
    #[command(flatten)]
    logging: common::LoggingArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the total number of rows in a Parquet file or dataset
    Rowcount(rowcount::Args),
    /// Print the total compressed size of a Parquet file or dataset
    Size(size::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    common::setup_logging(&cli.logging)?;

    match cli.command {
        Commands::Rowcount(args) => rowcount::run(args),
        Commands::Size(args) => size::run(args),
    }
}
