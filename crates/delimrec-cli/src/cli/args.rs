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

//! Reader options shared by every subcommand.

use clap::Args;
use delimrec::{Input, ReaderConfig};

/// File argument value that selects standard input.
pub const STDIN_MARKER: &str = "-";

/// Options mapped onto [`ReaderConfig`].
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReaderArgs {
    /// Field delimiter (a single character, or `\t` / `tab`)
    #[arg(short, long, default_value = ",", value_parser = parse_char)]
    pub delimiter: char,

    /// Quote character
    #[arg(short, long, default_value = "\"", value_parser = parse_char)]
    pub quote: char,

    /// Disable quote handling; quote characters are kept verbatim
    #[arg(long, conflicts_with = "quote")]
    pub no_quote: bool,

    /// Input is gzip-compressed (file input only)
    #[arg(short = 'z', long)]
    pub gzip: bool,

    /// Number of lines to discard before the header line
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub skip_lines: usize,

    /// Omit fields whose value is empty
    #[arg(long)]
    pub skip_empty: bool,
}

impl Default for ReaderArgs {
    fn default() -> Self {
        let config = ReaderConfig::default();
        Self {
            delimiter: config.delimiter,
            quote: config.quote.unwrap_or('"'),
            no_quote: config.quote.is_none(),
            gzip: config.compressed,
            skip_lines: config.lines_to_skip,
            skip_empty: config.skip_empty_values,
        }
    }
}

impl ReaderArgs {
    /// Build the reader configuration.
    pub fn to_config(&self) -> ReaderConfig {
        ReaderConfig {
            delimiter: self.delimiter,
            quote: if self.no_quote { None } else { Some(self.quote) },
            compressed: self.gzip,
            lines_to_skip: self.skip_lines,
            skip_empty_values: self.skip_empty,
            ..Default::default()
        }
    }
}

/// Resolve a file argument; [`STDIN_MARKER`] reads standard input.
pub fn input_for(file: &str) -> Input {
    if file == STDIN_MARKER {
        Input::stream(std::io::stdin())
    } else {
        Input::path(file)
    }
}

/// Display name of a file argument in messages.
pub fn display_name(file: &str) -> &str {
    if file == STDIN_MARKER {
        "<stdin>"
    } else {
        file
    }
}

fn parse_char(s: &str) -> Result<char, String> {
    match s {
        "\\t" | "tab" => return Ok('\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got '{}'", s)),
    }
}
