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

//! DelimRec Command Line Interface

use clap::Parser;
use delimrec_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// DelimRec - read delimited text files as named records
///
/// # Examples
///
/// ```bash
/// # Print records as JSON lines
/// delimrec records people.csv
///
/// # Pipe-separated, gzip-compressed, skipping a two-line preamble
/// delimrec records export.psv.gz -d '|' --gzip --skip-lines 2
///
/// # Count records from stdin, reporting malformed lines
/// cat data.tsv | delimrec count - -d tab --keep-going
/// ```
#[derive(Parser)]
#[command(name = "delimrec")]
#[command(author, version, about = "DelimRec - read delimited text files as named records", long_about = None)]
struct Cli {
    /// Log reader activity to stderr (same as RUST_LOG=delimrec=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        "delimrec=debug"
    } else {
        "delimrec=warn"
    };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
