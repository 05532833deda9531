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

//! DelimRec CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **records**: Print records as JSON lines or re-encoded delimited text
//! - **header**: Show the header fields and their positions
//! - **count**: Count records, optionally tolerating malformed lines
//!
//! Every command accepts the reader options `--delimiter`, `--quote`,
//! `--no-quote`, `--gzip`, `--skip-lines` and `--skip-empty`. A file argument
//! of `-` reads standard input.
//!
//! # Examples
//!
//! ```no_run
//! use delimrec_cli::cli::{OutputFormat, ReaderArgs};
//! use delimrec_cli::commands::{count, records};
//!
//! # fn main() -> Result<(), delimrec_cli::error::CliError> {
//! let args = ReaderArgs {
//!     delimiter: ';',
//!     skip_empty: true,
//!     ..Default::default()
//! };
//! records("export.csv", &args, OutputFormat::Json, None, false)?;
//! count("export.csv", &args, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return [`error::CliError`]. Without `--keep-going` the first
//! malformed line aborts the command; the message names the file and line.

pub mod cli;
pub mod commands;
pub mod error;
