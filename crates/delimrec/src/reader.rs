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

//! Delimited file reader.
//!
//! [`DelimitedReader`] is a session over one input. Its lifecycle:
//!
//! ```text
//! Created ──first read / open()──▶ Opened, header pending
//!         ──skip lines, header line──▶ Opened, reading
//!         ──end of input──▶ Opened, exhausted (terminal)
//! ```
//!
//! Only the resources held by the reader (the file, the gzip decoder, the
//! read buffer) and the current line are in memory at any time.
//!
//! # Basic Usage
//!
//! ```rust
//! use delimrec::{DelimitedReader, Input, ReaderConfig, RecordSource};
//! use std::io::Cursor;
//!
//! let data = "id,name\n1,Alice\n2,\"Smith, Bob\"\n";
//! let mut reader = DelimitedReader::new(ReaderConfig::default(), Input::stream(Cursor::new(data)));
//!
//! let records = reader.read_all().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].get_str("name"), Some("Smith, Bob"));
//! assert_eq!(reader.header().unwrap().fields(), ["id", "name"]);
//! ```
//!
//! # Scoped Usage
//!
//! ```rust,no_run
//! use delimrec::{DelimitedReader, ReaderConfig, RecordSource};
//!
//! # fn example() -> Result<(), delimrec::ReaderError> {
//! let config = ReaderConfig { compressed: true, ..Default::default() };
//! let total = DelimitedReader::from_path("orders.csv.gz", config).scoped(|reader| {
//!     let mut total = 0usize;
//!     for record in reader.records() {
//!         record?;
//!         total += 1;
//!     }
//!     Ok(total)
//! })?;
//! println!("{} records", total);
//! # Ok(())
//! # }
//! ```

use crate::assembler::{Header, RecordAssembler};
use crate::config::{Input, ReaderConfig};
use crate::error::{ReaderError, ReaderResult};
use crate::lines::LineReader;
use crate::record::Record;
use crate::source::RecordSource;
use crate::tokenizer::Tokenizer;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Reader session over a delimited text input.
///
/// Implements [`RecordSource`] and `Iterator<Item = ReaderResult<Record>>`.
/// A failed line (bad quoting, wrong field count, invalid UTF-8) is reported
/// once; the next read continues with the line after it. A failure of the
/// stream itself, or an unreadable header line, ends the session: the error is
/// returned once and every later read returns `Ok(None)`.
pub struct DelimitedReader {
    config: ReaderConfig,
    tokenizer: Tokenizer,
    input: Option<Input>,
    lines: Option<LineReader<Box<dyn Read>>>,
    assembler: Option<RecordAssembler>,
    /// Preamble lines still to discard before the header.
    to_skip: usize,
    opened: bool,
    exhausted: bool,
}

impl DelimitedReader {
    /// Create a reader. Nothing is opened until the first read or [`open`](RecordSource::open).
    pub fn new(config: ReaderConfig, input: Input) -> Self {
        Self {
            tokenizer: config.tokenizer(),
            to_skip: config.lines_to_skip,
            config,
            input: Some(input),
            lines: None,
            assembler: None,
            opened: false,
            exhausted: false,
        }
    }

    /// Create a reader over a file.
    pub fn from_path(path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self::new(config, Input::path(path))
    }

    /// Create a reader over an already-open stream.
    pub fn from_reader(reader: impl Read + 'static, config: ReaderConfig) -> Self {
        Self::new(config, Input::stream(reader))
    }

    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The captured header; `None` until the first read has consumed it.
    pub fn header(&self) -> Option<&Header> {
        self.assembler.as_ref().map(RecordAssembler::header)
    }

    /// Number of the last physical line read (0 before any read).
    pub fn line_number(&self) -> usize {
        self.lines.as_ref().map_or(0, LineReader::line_number)
    }

    #[inline]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn acquire(&mut self) -> ReaderResult<Box<dyn Read>> {
        match self.input.take() {
            Some(Input::Path(path)) => match File::open(&path) {
                Ok(file) => {
                    debug!(path = %path.display(), compressed = self.config.compressed, "opening delimited file");
                    if self.config.compressed {
                        Ok(Box::new(GzDecoder::new(file)))
                    } else {
                        Ok(Box::new(file))
                    }
                }
                Err(e) => {
                    self.input = Some(Input::Path(path));
                    Err(e.into())
                }
            },
            Some(Input::Stream(stream)) if self.config.compressed => {
                self.input = Some(Input::Stream(stream));
                Err(ReaderError::invalid_config(
                    "compressed input requires a file path, not an open stream",
                ))
            }
            Some(Input::Stream(stream)) => {
                debug!("opening delimited stream");
                Ok(stream)
            }
            None => Err(ReaderError::AlreadyOpened),
        }
    }
}

impl RecordSource for DelimitedReader {
    fn open(&mut self) -> ReaderResult<()> {
        if self.opened {
            return Err(ReaderError::AlreadyOpened);
        }
        if self.config.buffer_size == 0 {
            return Err(ReaderError::invalid_config("buffer_size must be at least 1"));
        }
        let stream = self.acquire()?;
        self.lines = Some(LineReader::with_capacity(stream, self.config.buffer_size));
        self.opened = true;
        Ok(())
    }

    fn read_next(&mut self) -> ReaderResult<Option<Record>> {
        if !self.opened {
            self.open()?;
        }
        if self.exhausted {
            return Ok(None);
        }
        // Closed sessions behave as exhausted.
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        if self.assembler.is_none() {
            let mut skipped = 0usize;
            while self.to_skip > 0 {
                match lines.skip_lines(1) {
                    Ok(0) => break,
                    Ok(_) => {
                        self.to_skip -= 1;
                        skipped += 1;
                    }
                    Err(e) => {
                        self.exhausted = lines.is_failed();
                        return Err(e);
                    }
                }
            }
            if skipped > 0 {
                debug!(skipped, "skipped leading lines");
            }
            match lines.next_line() {
                Ok(Some((line_no, line))) => {
                    let header = Header::from_line(&line, self.config.delimiter);
                    debug!(line = line_no, arity = header.arity(), "header captured");
                    self.assembler = Some(RecordAssembler::new(
                        header,
                        self.config.delimiter,
                        self.config.skip_empty_values,
                    ));
                }
                Ok(None) => {
                    debug!("input ended before the header line");
                    self.exhausted = true;
                    return Ok(None);
                }
                Err(e) => {
                    // Without a header no later line can be assembled.
                    debug!(error = %e, "header line unreadable");
                    self.exhausted = true;
                    return Err(e);
                }
            }
        }

        let (line_no, line) = match lines.next_line() {
            Ok(Some(next)) => next,
            Ok(None) => {
                debug!(lines = lines.line_number(), "end of data");
                self.exhausted = true;
                return Ok(None);
            }
            Err(e) => {
                if lines.is_failed() {
                    debug!(error = %e, "stream failed, ending session");
                    self.exhausted = true;
                }
                return Err(e);
            }
        };

        let row = self
            .tokenizer
            .split(&line)
            .map_err(|e| ReaderError::format(line_no, e.column, e.message))?;

        match self.assembler.as_ref() {
            Some(assembler) => {
                let record = assembler.assemble(row, line_no)?;
                trace!(line = line_no, fields = record.len(), "record assembled");
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn close(&mut self) {
        if self.lines.take().is_some() {
            debug!(exhausted = self.exhausted, "delimited reader closed");
        }
        self.input = None;
        // A session closed before it was opened is over, not reusable.
        if !self.opened {
            self.opened = true;
            self.exhausted = true;
        }
    }
}

impl Iterator for DelimitedReader {
    type Item = ReaderResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}
