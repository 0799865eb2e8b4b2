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

//! Resolving an input path into the ordered [`Footer`]s of the files it
//! expands to.
//!
//! A path naming a regular file yields exactly one footer. A directory, such
//! as a partitioned dataset, is walked and every visible file in it is read.
//! Entries starting with `.` or `_` are treated as hidden, which skips
//! marker files like `_SUCCESS` and summary files like `_metadata`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use parquet::file::metadata::ParquetMetaDataReader;
use snafu::ResultExt;
use tracing::{debug, info, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{CorruptMetadataSnafu, Error, Result};
use crate::footer::Footer;

/// Source of footers for an input path
pub trait FooterResolver {
    /// Return one footer per physical file `path` expands to, in a stable order.
    ///
    /// Fails without returning partial results if any file cannot be opened
    /// or decoded.
    fn resolve(&self, path: &Path) -> Result<Vec<Footer>>;
}

/// Options controlling how [`LocalFooterResolver`] expands directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    skip_hidden: bool,
    recursive: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            recursive: true,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to skip entries whose name starts with `.` or `_`
    pub fn with_skip_hidden(mut self, skip_hidden: bool) -> Self {
        self.skip_hidden = skip_hidden;
        self
    }

    /// Whether to descend into subdirectories
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn skip_hidden(&self) -> bool {
        self.skip_hidden
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }
}

/// Reads footers from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct LocalFooterResolver {
    options: ResolveOptions,
}

impl LocalFooterResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let max_depth = if self.options.recursive { usize::MAX } else { 1 };
        let skip_hidden = self.options.skip_hidden;

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                let hidden = skip_hidden && is_hidden(entry);
                if hidden {
                    trace!("skipping hidden entry {}", entry.path().display());
                }
                !hidden
            });

        let mut files = vec![];
        for entry in walker {
            let entry = entry.map_err(|e| walkdir_error(root, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl FooterResolver for LocalFooterResolver {
    fn resolve(&self, path: &Path) -> Result<Vec<Footer>> {
        let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;

        let files = if metadata.is_dir() {
            self.list_files(path)?
        } else {
            vec![path.to_path_buf()]
        };

        let footers = files
            .iter()
            .map(|file| read_footer(file))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "resolved {} footer(s) from {}",
            footers.len(),
            path.display()
        );
        Ok(footers)
    }
}

/// Read and decode the footer of the single Parquet file at `path`
pub fn read_footer(path: &Path) -> Result<Footer> {
    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;
    let metadata = ParquetMetaDataReader::new()
        .parse_and_finish(&file)
        .context(CorruptMetadataSnafu { path })?;
    let footer = Footer::try_from_metadata(path, &metadata)?;
    debug!(
        "read footer of {} with {} block(s)",
        path.display(),
        footer.blocks().len()
    );
    Ok(footer)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name.starts_with('_'))
        .unwrap_or(false)
}

fn walkdir_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    Error::from_io(&path, source)
}
