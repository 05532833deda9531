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

//! Delimited Record Reader
//!
//! Reads delimited text (CSV, TSV, pipe-separated, optionally gzip-compressed)
//! into records keyed by the names in the header line. Records are pulled one
//! at a time; nothing beyond the current line is buffered unless the caller
//! asks for [`read_all`](RecordSource::read_all).
//!
//! # Features
//!
//! - **Quoting**: Quoted fields with embedded delimiters and doubled-quote escapes
//! - **Strict Rows**: Every row must have exactly as many fields as the header
//! - **Gzip Input**: Transparent decompression of `.gz` files
//! - **Preamble Skipping**: Discard leading lines before the header
//! - **Pull-based**: `read_next`, iterator adapter, forward-only cursor
//! - **Scoped Resources**: Open/close around a closure, on every exit path
//!
//! # Reading a File
//!
//! ```rust,no_run
//! use delimrec::{DelimitedReader, ReaderConfig, RecordSource};
//!
//! # fn example() -> Result<(), delimrec::ReaderError> {
//! let config = ReaderConfig {
//!     delimiter: '|',
//!     skip_empty_values: true,
//!     ..Default::default()
//! };
//!
//! let mut reader = DelimitedReader::from_path("export.psv", config);
//! while let Some(record) = reader.read_next()? {
//!     for (name, value) in record.iter() {
//!         println!("{} = {}", name, value);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Tokenizing a Single Line
//!
//! ```rust
//! use delimrec::Tokenizer;
//!
//! let fields = Tokenizer::default().split(r#"v1,"v31, ""v32"", v33""#).unwrap();
//! assert_eq!(fields, vec!["v1", r#"v31, "v32", v33"#]);
//! ```
//!
//! # Skipping Malformed Lines
//!
//! Errors abort only the current read. Keep reading to skip past them:
//!
//! ```rust
//! use delimrec::{DelimitedReader, ReaderConfig, RecordSource};
//! use std::io::Cursor;
//!
//! let data = "a,b\n1,2\n3\n\"4\"x,5\n6,7\n";
//! let mut reader = DelimitedReader::from_reader(Cursor::new(data), ReaderConfig::default());
//!
//! let (good, bad): (Vec<_>, Vec<_>) = reader.records().partition(|r| r.is_ok());
//! assert_eq!(good.len(), 2);
//! assert_eq!(bad.len(), 2);
//! ```

mod assembler;
mod config;
mod error;
mod lines;
mod reader;
mod record;
mod source;
mod tokenizer;
mod value;

pub use assembler::{Header, RecordAssembler};
pub use config::{Input, ReaderConfig};
pub use error::{ReaderError, ReaderResult};
pub use lines::LineReader;
pub use reader::DelimitedReader;
pub use record::Record;
pub use source::{MemorySource, RecordCursor, RecordSource, Records};
pub use tokenizer::{TokenState, TokenizeError, Tokenizer};
pub use value::Value;
