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

//! Basic record reading example.
//!
//! Demonstrates quoted fields, malformed-line recovery and the scoped helper.
//!
//! Run with: cargo run --example basic_usage

use delimrec::{DelimitedReader, ReaderConfig, ReaderError, RecordSource};
use std::io::Cursor;

fn main() -> Result<(), ReaderError> {
    let input = "\
# exported 2025-01-01
id|name|role
1|Ada Lovelace|analyst
2|\"Grace | Hopper\"|admiral
3|Alan Turing
4|Edsger Dijkstra|
";

    println!("=== Delimited Record Reader Example ===\n");

    let config = ReaderConfig {
        delimiter: '|',
        lines_to_skip: 1,
        skip_empty_values: true,
        ..Default::default()
    };
    let mut reader = DelimitedReader::from_reader(Cursor::new(input), config);

    for result in reader.records() {
        match result {
            Ok(record) => {
                let name = record.get_str("name").unwrap_or("?");
                let role = record.get_str("role").unwrap_or("(none)");
                println!("record: {} -> {}", name, role);
            }
            Err(e) => println!("skipped: {}", e),
        }
    }

    if let Some(header) = reader.header() {
        println!("\nHeader fields: {:?}", header.fields());
    }

    let total = DelimitedReader::from_reader(Cursor::new("a,b\n1,2\n3,4\n"), ReaderConfig::default())
        .scoped(|reader| Ok(reader.read_all()?.len()))?;
    println!("Scoped read collected {} records", total);

    Ok(())
}
