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

//! Reader configuration and input selection.

use crate::tokenizer::Tokenizer;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

/// Configuration options for [`DelimitedReader`](crate::DelimitedReader).
///
/// # Examples
///
/// ## Default Configuration
///
/// ```rust
/// use delimrec::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.delimiter, ',');
/// assert_eq!(config.quote, Some('"'));
/// assert!(!config.compressed);
/// assert_eq!(config.lines_to_skip, 0);
/// assert!(!config.skip_empty_values);
/// ```
///
/// ## Pipe-separated, Gzip, with a Preamble Line
///
/// ```rust
/// use delimrec::ReaderConfig;
///
/// let config = ReaderConfig {
///     delimiter: '|',
///     compressed: true,
///     lines_to_skip: 1,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: char,

    /// Quote character (default: `"`). `None` disables quoting, so quote
    /// characters are kept verbatim in values.
    pub quote: Option<char>,

    /// Whether the input file is gzip-compressed (default: `false`).
    ///
    /// Only valid with [`Input::Path`]; an already-open stream is read as is.
    pub compressed: bool,

    /// Lines discarded before the header line (default: 0).
    pub lines_to_skip: usize,

    /// Omit empty values from records instead of storing `""` (default: `false`).
    pub skip_empty_values: bool,

    /// Read buffer capacity in bytes (default: 64KB). Must be at least 1.
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: Some('"'),
            compressed: false,
            lines_to_skip: 0,
            skip_empty_values: false,
            buffer_size: 64 * 1024,
        }
    }
}

impl ReaderConfig {
    /// Tokenizer for this configuration's delimiter and quote.
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.delimiter, self.quote)
    }
}

/// Where records are read from.
pub enum Input {
    /// A file path, opened on first read.
    Path(PathBuf),
    /// An already-open byte stream.
    Stream(Box<dyn Read>),
}

impl Input {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn stream(reader: impl Read + 'static) -> Self {
        Self::Stream(Box::new(reader))
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&std::path::Path> for Input {
    fn from(path: &std::path::Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}
