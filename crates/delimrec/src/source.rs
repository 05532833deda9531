// Dweve DelimRec - Delimited Record Reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pull interface shared by every record source.
//!
//! A [`RecordSource`] produces "next record or end of data" and supports a
//! scoped open/close lifecycle. On top of `read_next` it provides:
//!
//! - [`read_all`](RecordSource::read_all): collect every remaining record
//! - [`records`](RecordSource::records): lazy iterator adapter
//! - [`cursor`](RecordSource::cursor): advance/current cursor, forward-only
//! - [`scoped`](RecordSource::scoped): open, run, close on every exit path
//!
//! ```rust
//! use delimrec::{MemorySource, Record, RecordSource};
//!
//! let rows: Vec<Record> = vec![
//!     [("id", "1")].into_iter().collect(),
//!     [("id", "2")].into_iter().collect(),
//! ];
//!
//! let ids = MemorySource::new(rows)
//!     .scoped(|source| {
//!         source
//!             .records()
//!             .map(|r| r.map(|rec| rec.get_str("id").unwrap_or_default().to_string()))
//!             .collect::<Result<Vec<_>, _>>()
//!     })
//!     .unwrap();
//! assert_eq!(ids, vec!["1", "2"]);
//! ```

use crate::error::{ReaderError, ReaderResult};
use crate::record::Record;
use std::collections::VecDeque;
use tracing::debug;

/// A source of records.
///
/// `read_next` returns `Ok(None)` once the data is exhausted, and keeps
/// returning it on every later call.
pub trait RecordSource {
    /// Acquire the underlying resource. Fails with
    /// [`ReaderError::AlreadyOpened`] when called twice.
    fn open(&mut self) -> ReaderResult<()>;

    /// Read the next record, opening the source first if needed.
    fn read_next(&mut self) -> ReaderResult<Option<Record>>;

    /// Release the underlying resource. Safe to call any number of times.
    fn close(&mut self);

    /// Read every remaining record.
    fn read_all(&mut self) -> ReaderResult<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_next()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Lazy, single-pass iterator over the remaining records.
    fn records(&mut self) -> Records<'_, Self>
    where
        Self: Sized,
    {
        Records { source: self }
    }

    /// Forward-only cursor over the remaining records.
    fn cursor(&mut self) -> RecordCursor<'_, Self>
    where
        Self: Sized,
    {
        RecordCursor {
            source: self,
            current: None,
        }
    }

    /// Open the source, run `f`, then close it whether `f` succeeded or not.
    fn scoped<T, F>(mut self, f: F) -> ReaderResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> ReaderResult<T>,
    {
        let result = self.open().and_then(|()| f(&mut self));
        self.close();
        result
    }
}

/// Iterator adapter returned by [`RecordSource::records`].
///
/// Yields `Err` for a bad line and carries on with the following line on the
/// next call. Ends with `None` at end of data, repeatedly. Sources that hit a
/// terminal failure yield that error once and then end.
pub struct Records<'a, S: RecordSource> {
    source: &'a mut S,
}

impl<S: RecordSource> Iterator for Records<'_, S> {
    type Item = ReaderResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.read_next().transpose()
    }
}

/// Cursor returned by [`RecordSource::cursor`].
///
/// ```rust
/// use delimrec::{MemorySource, Record, RecordSource, ReaderError};
///
/// let mut source = MemorySource::new(vec![Record::new()]);
/// let mut cursor = source.cursor();
///
/// assert!(cursor.current().is_none());
/// assert!(cursor.advance().unwrap());
/// assert!(cursor.current().is_some());
/// assert!(!cursor.advance().unwrap());
/// assert!(matches!(cursor.reset(), Err(ReaderError::ResetUnsupported)));
/// ```
pub struct RecordCursor<'a, S: RecordSource> {
    source: &'a mut S,
    current: Option<Record>,
}

impl<S: RecordSource> RecordCursor<'_, S> {
    /// Move to the next record. Returns `false` at end of data.
    pub fn advance(&mut self) -> ReaderResult<bool> {
        self.current = self.source.read_next()?;
        Ok(self.current.is_some())
    }

    /// The record under the cursor; `None` before the first advance and at end.
    pub fn current(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    /// Take ownership of the record under the cursor.
    pub fn take_current(&mut self) -> Option<Record> {
        self.current.take()
    }

    /// Always fails: record sources cannot be rewound.
    pub fn reset(&mut self) -> ReaderResult<()> {
        Err(ReaderError::ResetUnsupported)
    }
}

/// In-memory record source.
///
/// Follows the same session rules as file-backed readers, which makes it a
/// drop-in stand-in for tests and for feeding prepared records through code
/// written against [`RecordSource`].
#[derive(Debug, Default)]
pub struct MemorySource {
    pending: VecDeque<Record>,
    opened: bool,
}

impl MemorySource {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            pending: records.into_iter().collect(),
            opened: false,
        }
    }

    /// Records not yet read.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl RecordSource for MemorySource {
    fn open(&mut self) -> ReaderResult<()> {
        if self.opened {
            return Err(ReaderError::AlreadyOpened);
        }
        self.opened = true;
        debug!(records = self.pending.len(), "memory source opened");
        Ok(())
    }

    fn read_next(&mut self) -> ReaderResult<Option<Record>> {
        if !self.opened {
            self.open()?;
        }
        Ok(self.pending.pop_front())
    }

    fn close(&mut self) {
        self.pending.clear();
        // A session closed before it was opened is over, not reusable.
        self.opened = true;
    }
}
