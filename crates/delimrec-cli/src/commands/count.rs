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

//! Count command - count records, optionally tolerating malformed lines

use super::{open_reader, pull, Pulled};
use crate::cli::{display_name, ReaderArgs};
use crate::error::CliError;
use tracing::info;

/// Count the records of a delimited file and print the total.
///
/// With `keep_going`, malformed lines are reported on stderr and counted
/// separately instead of aborting.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, or a line is malformed and
/// `keep_going` is off.
pub fn count(file: &str, args: &ReaderArgs, keep_going: bool) -> Result<(), CliError> {
    let mut reader = open_reader(file, args);
    let mut records = 0usize;
    let mut malformed = 0usize;

    loop {
        match pull(&mut reader, file, keep_going)? {
            Pulled::Record(_) => records += 1,
            Pulled::Skipped => malformed += 1,
            Pulled::End => break,
        }
    }

    info!(file = display_name(file), records, malformed, "Counted records");
    println!("{}", records);
    if malformed > 0 {
        eprintln!("{} malformed line(s)", malformed);
    }
    Ok(())
}
