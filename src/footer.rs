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

//! [`Footer`] and [`Block`]: the per-file metadata the rest of the crate
//! aggregates over.

use std::path::{Path, PathBuf};

use parquet::file::metadata::{ParquetMetaData, RowGroupMetaData};
use snafu::ensure;

use crate::aggregate::{fold_footer, AggregateRecord};
use crate::error::{InvalidBlockSnafu, Result};

/// A single row group ("block") of a Parquet file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    /// Number of rows in the row group
    pub row_count: i64,
    /// Total compressed size of the row group's column chunks, in bytes
    pub compressed_size: i64,
    /// Total uncompressed size of the row group, in bytes
    pub uncompressed_size: i64,
}

impl Block {
    /// Create a block whose uncompressed size equals its compressed size
    pub fn new(row_count: i64, compressed_size: i64) -> Self {
        Self {
            row_count,
            compressed_size,
            uncompressed_size: compressed_size,
        }
    }

    pub fn with_uncompressed_size(mut self, uncompressed_size: i64) -> Self {
        self.uncompressed_size = uncompressed_size;
        self
    }

    fn try_from_row_group(path: &Path, row_group: &RowGroupMetaData) -> Result<Self> {
        let block = Self {
            row_count: row_group.num_rows(),
            compressed_size: row_group.compressed_size(),
            uncompressed_size: row_group.total_byte_size(),
        };
        ensure!(
            block.row_count >= 0 && block.compressed_size >= 0 && block.uncompressed_size >= 0,
            InvalidBlockSnafu {
                path,
                msg: format!(
                    "row group {} has negative fields: rows={}, compressed={}, uncompressed={}",
                    row_group.ordinal().unwrap_or_default(),
                    block.row_count,
                    block.compressed_size,
                    block.uncompressed_size
                ),
            }
        );
        Ok(block)
    }
}

/// The footer of one physical Parquet file, reduced to its block list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    path: PathBuf,
    blocks: Vec<Block>,
}

impl Footer {
    pub fn new(path: impl Into<PathBuf>, blocks: Vec<Block>) -> Self {
        Self {
            path: path.into(),
            blocks,
        }
    }

    /// Build a footer from decoded Parquet metadata read from `path`.
    ///
    /// Returns an error if any row group reports a negative row count or size.
    pub fn try_from_metadata(path: impl Into<PathBuf>, metadata: &ParquetMetaData) -> Result<Self> {
        let path = path.into();
        let blocks = metadata
            .row_groups()
            .iter()
            .map(|rg| Block::try_from_row_group(&path, rg))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { path, blocks })
    }

    /// The file this footer was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Totals over this footer's blocks only
    pub fn aggregate(&self) -> Result<AggregateRecord> {
        fold_footer(AggregateRecord::default(), self)
    }
}
