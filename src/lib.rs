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

//! Row counts and sizes of Parquet files, computed from their footers only.
//!
//! An input path is resolved into one [`Footer`](footer::Footer) per physical
//! file by a [`FooterResolver`](resolver::FooterResolver), the row groups of
//! every footer are summed by [`aggregate`](aggregate::aggregate), and the
//! totals are rendered by a [`Report`](report::Report).
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use parquet_tally::report::{run_report, Report, SizeOptions};
//! use parquet_tally::resolver::LocalFooterResolver;
//!
//! let resolver = LocalFooterResolver::default();
//! let inputs = vec![PathBuf::from("data/partitioned")];
//! let report = Report::Size(SizeOptions {
//!     pretty: true,
//!     ..Default::default()
//! });
//! run_report(&resolver, &inputs, report, false, &mut std::io::stdout()).unwrap();
//! ```

pub mod aggregate;
pub mod error;
pub mod footer;
pub mod format;
pub mod report;
pub mod resolver;


pub use aggregate::{aggregate, AggregateRecord};
pub use error::{Error, ErrorKind, Result};
pub use footer::{Block, Footer};
pub use format::{format_size, SizeUnit};
pub use report::{run_report, Report, SizeOptions};
pub use resolver::{FooterResolver, LocalFooterResolver, ResolveOptions};
