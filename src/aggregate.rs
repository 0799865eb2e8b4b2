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

//! Summing block metadata across footers into an [`AggregateRecord`]

use snafu::OptionExt;

use crate::error::{Result, TotalOverflowSnafu};
use crate::footer::{Block, Footer};

/// Totals over every block of every footer of one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateRecord {
    /// Sum of all block row counts
    pub total_row_count: i64,
    /// Sum of all block compressed sizes, in bytes
    pub total_compressed_bytes: i64,
    /// Sum of all block uncompressed sizes, in bytes
    pub total_uncompressed_bytes: i64,
}

impl AggregateRecord {
    /// Fold a single block into the totals, or `None` if any total overflows
    pub fn add_block(self, block: &Block) -> Option<Self> {
        Some(Self {
            total_row_count: self.total_row_count.checked_add(block.row_count)?,
            total_compressed_bytes: self
                .total_compressed_bytes
                .checked_add(block.compressed_size)?,
            total_uncompressed_bytes: self
                .total_uncompressed_bytes
                .checked_add(block.uncompressed_size)?,
        })
    }

    /// Combine two partial accumulators, or `None` if any total overflows.
    ///
    /// Summing footers independently and merging the partials gives the same
    /// record as a single sequential fold.
    pub fn merge(self, other: Self) -> Option<Self> {
        Some(Self {
            total_row_count: self.total_row_count.checked_add(other.total_row_count)?,
            total_compressed_bytes: self
                .total_compressed_bytes
                .checked_add(other.total_compressed_bytes)?,
            total_uncompressed_bytes: self
                .total_uncompressed_bytes
                .checked_add(other.total_uncompressed_bytes)?,
        })
    }
}

/// Fold the blocks of `footer` into `acc`
pub(crate) fn fold_footer(acc: AggregateRecord, footer: &Footer) -> Result<AggregateRecord> {
    footer.blocks().iter().try_fold(acc, |acc, block| {
        acc.add_block(block).context(TotalOverflowSnafu {
            path: footer.path(),
        })
    })
}

/// Sum every block of every footer.
///
/// An empty footer list, or footers without blocks, produce all-zero totals.
/// Totals that do not fit in an `i64` fail with an error naming the footer
/// whose block overflowed.
pub fn aggregate<'a>(footers: impl IntoIterator<Item = &'a Footer>) -> Result<AggregateRecord> {
    footers
        .into_iter()
        .try_fold(AggregateRecord::default(), fold_footer)
}
