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

//! Header command - show the captured header fields

use super::{is_line_error, open_reader};
use crate::cli::{display_name, ReaderArgs};
use crate::error::CliError;
use colored::Colorize;
use delimrec::RecordSource;

/// Print the header fields of a delimited file with their zero-based positions.
///
/// Only the header line and the first data line are read. A malformed first
/// data line does not prevent the header from being shown.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or ends before a header line.
///
/// # Examples
///
/// ```no_run
/// use delimrec_cli::cli::ReaderArgs;
/// use delimrec_cli::commands::header;
///
/// # fn main() -> Result<(), delimrec_cli::error::CliError> {
/// header("people.csv", &ReaderArgs::default())?;
/// # Ok(())
/// # }
/// ```
pub fn header(file: &str, args: &ReaderArgs) -> Result<(), CliError> {
    let mut reader = open_reader(file, args);

    match reader.read_next() {
        Ok(_) => {}
        Err(e) if is_line_error(&e, &reader) => {}
        Err(e) => return Err(CliError::reader(display_name(file), e)),
    }

    let header = reader
        .header()
        .ok_or_else(|| CliError::missing_header(display_name(file)))?;

    println!(
        "{} {} ({} fields)",
        "Header:".cyan(),
        display_name(file),
        header.arity()
    );
    for (position, name) in header.fields().iter().enumerate() {
        println!("  {:>3}  {}", position.to_string().dimmed(), name.green());
    }

    reader.close();
    Ok(())
}
