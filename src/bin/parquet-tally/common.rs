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

//! Common utilities shared across subcommands.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use parquet_tally::report::{run_report, Report};
use parquet_tally::resolver::LocalFooterResolver;

#[derive(Debug, clap::Args)]
pub struct LoggingArgs {
    /// Log verbosity.
    ///
    /// Defaults to "warn". Use `-v` for "info", `-vv` for "debug", `-vvv` for "trace".
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Install a stderr logging subscriber filtered by `-v` count or `RUST_LOG`.
pub fn setup_logging(args: &LoggingArgs) -> Result<()> {
    use tracing_subscriber::{util::SubscriberInitExt, EnvFilter, FmtSubscriber};

    tracing_log::LogTracer::init().context("tracing log init")?;

    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => directives,
        _ => match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string(),
    };
    let filter = EnvFilter::try_new(filter).context("set up log env filter")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();
    subscriber.try_init().context("init logging subscriber")?;

    Ok(())
}

/// Resolve `inputs` from the local filesystem and print `report` to stdout.
pub fn print_report(inputs: &[PathBuf], report: Report, detailed: bool) -> Result<()> {
    let resolver = LocalFooterResolver::default();
    let stdout = io::stdout();
    run_report(&resolver, inputs, report, detailed, &mut stdout.lock())?;
    Ok(())
}
