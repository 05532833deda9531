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

//! Error types for delimited record reading.
//!
//! Every failure aborts only the read call that produced it. The reader
//! never resynchronizes on its own; a caller that wants to skip a malformed
//! line simply calls `read_next` again.
//!
//! # Error Categories
//!
//! - **Format Errors**: Malformed quoting within a line
//! - **Arity Errors**: Row field count differs from the header
//! - **Session Errors**: Reopening a session, resetting a forward-only cursor
//! - **Resource Errors**: I/O failures from the underlying file or gzip stream
//!
//! # Match on Error Type
//!
//! ```rust
//! use delimrec::{DelimitedReader, Input, ReaderConfig, ReaderError, RecordSource};
//! use std::io::Cursor;
//!
//! let input = Input::stream(Cursor::new("a,b\n1,2,3\n4,5\n"));
//! let mut reader = DelimitedReader::new(ReaderConfig::default(), input);
//!
//! match reader.read_next() {
//!     Err(ReaderError::ArityMismatch { line, expected, actual, .. }) => {
//!         assert_eq!((line, expected, actual), (2, 2, 3));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! // The bad line has been consumed; reading continues with the next one.
//! assert!(reader.read_next().unwrap().is_some());
//! ```

use thiserror::Error;

/// Errors that can occur while reading delimited records.
///
/// Line-scoped variants carry the 1-based physical line number of the input
/// (skipped lines and the header line count). Use [`line()`](Self::line) to
/// extract it uniformly.
///
/// # Examples
///
/// ```rust
/// use delimrec::ReaderError;
///
/// let err = ReaderError::format(7, 3, "quoted value contains an unescaped quote character");
/// assert_eq!(err.line(), Some(7));
/// assert!(err.to_string().contains("line 7"));
/// ```
#[derive(Error, Debug)]
pub enum ReaderError {
    /// IO error, including unreadable files, corrupt gzip data and invalid UTF-8.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed quoting.
    #[error("Format error at line {line}, column {column}: {message}")]
    Format {
        line: usize,
        column: usize,
        message: String,
    },

    /// Row field count does not match the header.
    #[error("Arity mismatch at line {line}: header has {expected} fields, row has {actual}: [{row}]")]
    ArityMismatch {
        line: usize,
        expected: usize,
        actual: usize,
        /// Row tokens joined with the delimiter.
        row: String,
    },

    /// The session was already opened.
    #[error("Reader already opened")]
    AlreadyOpened,

    /// Forward-only sources cannot be rewound.
    #[error("Reset is not supported: the underlying stream is forward-only")]
    ResetUnsupported,

    /// Configuration cannot be satisfied by the given input.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReaderError {
    /// Create a format error.
    #[inline]
    pub fn format(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    #[inline]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } | Self::ArityMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether this error concerns the session lifecycle rather than the data.
    #[inline]
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::AlreadyOpened | Self::ResetUnsupported)
    }
}

/// Result type for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_reader_error_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ReaderError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_reader_error_format() {
        let err = ReaderError::format(12, 4, "quoted value contains an unescaped quote character");
        let display = err.to_string();
        assert!(display.contains("Format error"));
        assert!(display.contains("line 12"));
        assert!(display.contains("column 4"));
        assert!(display.contains("unescaped quote"));
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn test_reader_error_arity() {
        let err = ReaderError::ArityMismatch {
            line: 3,
            expected: 3,
            actual: 2,
            row: "1,2".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("header has 3 fields"));
        assert!(display.contains("row has 2"));
        assert!(display.contains("[1,2]"));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_session_errors() {
        assert!(ReaderError::AlreadyOpened.is_session_error());
        assert!(ReaderError::ResetUnsupported.is_session_error());
        assert!(!ReaderError::invalid_config("x").is_session_error());
        assert!(ReaderError::AlreadyOpened.to_string().contains("already opened"));
        assert!(ReaderError::ResetUnsupported.to_string().contains("forward-only"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ReaderError::invalid_config("compression requires a path input");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: compression requires a path input"
        );
    }
}
