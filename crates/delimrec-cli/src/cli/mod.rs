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

//! CLI command definitions and argument parsing.
//!
//! - [`Commands`]: the `records`, `header` and `count` subcommands
//! - [`ReaderArgs`]: reader options shared by every subcommand

mod args;

use crate::commands;
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};

pub use args::{display_name, input_for, ReaderArgs, STDIN_MARKER};

/// Output encoding for the `records` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Header line followed by rows, re-encoded with the input's delimiter and quote
    Delimited,
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use delimrec_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the records of a delimited file
    ///
    /// Each data line becomes a record keyed by the header fields. Records are
    /// printed as JSON lines by default.
    Records {
        /// Input file path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        reader: ReaderArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Stop after N records
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,

        /// Report malformed lines on stderr and continue
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Print the header fields with their positions
    Header {
        /// Input file path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        reader: ReaderArgs,
    },

    /// Count the records of a delimited file
    Count {
        /// Input file path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        reader: ReaderArgs,

        /// Count malformed lines instead of stopping at the first one
        #[arg(short, long)]
        keep_going: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read, a line is malformed (unless
    /// `--keep-going` is set), or output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Records {
                file,
                reader,
                format,
                limit,
                keep_going,
            } => commands::records(&file, &reader, format, limit, keep_going),
            Commands::Header { file, reader } => commands::header(&file, &reader),
            Commands::Count {
                file,
                reader,
                keep_going,
            } => commands::count(&file, &reader, keep_going),
        }
    }
}
