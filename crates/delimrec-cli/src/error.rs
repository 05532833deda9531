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

//! Structured error types for the DelimRec CLI.
//!
//! Every command returns `Result<T, CliError>`; `main` prints the error on
//! stderr and exits with status 1.

use delimrec::ReaderError;
use std::io;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use delimrec::{DelimitedReader, ReaderConfig, RecordSource};
/// use delimrec_cli::error::CliError;
///
/// fn first_record(path: &str) -> Result<(), CliError> {
///     let mut reader = DelimitedReader::from_path(path, ReaderConfig::default());
///     reader.read_next().map_err(|e| CliError::reader(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input failed: I/O, malformed quoting, wrong field count or
    /// an invalid reader configuration.
    #[error("'{path}': {source}")]
    Reader {
        /// Input file path, or `<stdin>`
        path: String,
        /// The underlying reader error
        #[source]
        source: ReaderError,
    },

    /// The input ended before a header line was found.
    #[error("'{path}' has no header line")]
    MissingHeader {
        /// Input file path, or `<stdin>`
        path: String,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Writing results failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Create a reader error with input path context.
    pub fn reader(path: impl Into<String>, source: ReaderError) -> Self {
        Self::Reader {
            path: path.into(),
            source,
        }
    }

    /// Create a missing-header error.
    pub fn missing_header(path: impl Into<String>) -> Self {
        Self::MissingHeader { path: path.into() }
    }

    /// Line number of the offending input line, when the failure is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Reader { source, .. } => source.line(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_error_display_includes_path_and_line() {
        let err = CliError::reader("data.csv", ReaderError::format(7, 3, "bad quote"));
        let msg = err.to_string();
        assert!(msg.contains("data.csv"));
        assert!(msg.contains("line 7"));
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_missing_header_display() {
        let err = CliError::missing_header("<stdin>");
        assert_eq!(err.to_string(), "'<stdin>' has no header line");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_io_error_converts() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, CliError::Output(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = json_err.into();
        assert!(matches!(err, CliError::JsonFormat { .. }));
    }
}
