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

//! CLI command implementations

mod count;
mod header;
mod records;

pub use count::count;
pub use header::header;
pub use records::{record_to_json, records};

use crate::cli::{display_name, input_for, ReaderArgs};
use crate::error::CliError;
use colored::Colorize;
use delimrec::{DelimitedReader, ReaderError, Record, RecordSource};
use tracing::debug;

/// Create a reader for a file argument (`-` reads stdin).
pub fn open_reader(file: &str, args: &ReaderArgs) -> DelimitedReader {
    let config = args.to_config();
    debug!(
        file = display_name(file),
        delimiter = ?config.delimiter,
        quote = ?config.quote,
        compressed = config.compressed,
        "Opening input"
    );
    DelimitedReader::new(config, input_for(file))
}

/// Outcome of pulling the next record when malformed lines may be skipped.
pub(crate) enum Pulled {
    Record(Record),
    Skipped,
    End,
}

/// Pull the next record from `reader`.
///
/// With `keep_going`, errors tied to a single line are reported on stderr and
/// returned as [`Pulled::Skipped`]; everything else aborts.
pub(crate) fn pull(
    reader: &mut DelimitedReader,
    file: &str,
    keep_going: bool,
) -> Result<Pulled, CliError> {
    match reader.read_next() {
        Ok(Some(record)) => Ok(Pulled::Record(record)),
        Ok(None) => Ok(Pulled::End),
        Err(e) if keep_going && is_line_error(&e, reader) => {
            eprintln!("{} {}: {}", "skipped".yellow(), display_name(file), e);
            Ok(Pulled::Skipped)
        }
        Err(e) => Err(CliError::reader(display_name(file), e)),
    }
}

/// Whether `err` concerns a single input line, so reading can continue past it.
///
/// Besides format and arity errors this covers a line that is not valid UTF-8:
/// an I/O error after which the session is still open and not exhausted.
pub(crate) fn is_line_error(err: &ReaderError, reader: &DelimitedReader) -> bool {
    err.line().is_some()
        || (matches!(err, ReaderError::Io(_)) && reader.is_opened() && !reader.is_exhausted())
}
