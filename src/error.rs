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

use std::io;
use std::path::{Path, PathBuf};

use parquet::errors::ParquetError;
use snafu::Snafu;

/// Broad classification of an [`Error`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    PathNotFound,
    AccessDenied,
    Io,
    CorruptMetadata,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid argument: {msg}"))]
    InvalidArgument { msg: String },

    #[snafu(display("Path not found: {}: {source}", path.display()))]
    PathNotFound { path: PathBuf, source: io::Error },

    #[snafu(display("Access denied: {}: {source}", path.display()))]
    AccessDenied { path: PathBuf, source: io::Error },

    #[snafu(display("IO error reading {}: {source}", path.display()))]
    Io { path: PathBuf, source: io::Error },

    #[snafu(display("Corrupt metadata in {}: {source}", path.display()))]
    CorruptMetadata {
        path: PathBuf,
        source: ParquetError,
    },

    #[snafu(display("Corrupt metadata in {}: {msg}", path.display()))]
    InvalidBlock { path: PathBuf, msg: String },

    #[snafu(display(
        "Corrupt metadata in {}: row group totals overflow a 64-bit integer",
        path.display()
    ))]
    TotalOverflow { path: PathBuf },

    #[snafu(display("Failed to write report: {source}"))]
    WriteReport { source: io::Error },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::PathNotFound { .. } => ErrorKind::PathNotFound,
            Error::AccessDenied { .. } => ErrorKind::AccessDenied,
            Error::Io { .. } | Error::WriteReport { .. } => ErrorKind::Io,
            Error::CorruptMetadata { .. }
            | Error::InvalidBlock { .. }
            | Error::TotalOverflow { .. } => ErrorKind::CorruptMetadata,
        }
    }

    /// Classify an io error raised while opening or listing `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::PathNotFound { path, source },
            io::ErrorKind::PermissionDenied => Error::AccessDenied { path, source },
            _ => Error::Io { path, source },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
