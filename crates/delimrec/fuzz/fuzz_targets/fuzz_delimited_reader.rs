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

#![no_main]

use delimrec::{DelimitedReader, ReaderConfig, RecordSource, Tokenizer};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

/// Fuzz target for the tokenizer and the delimited reader.
///
/// # Running the Fuzzer
///
/// ```bash
/// cargo install cargo-fuzz
/// cd crates/delimrec
/// cargo fuzz run fuzz_delimited_reader -- -max_len=100000
/// ```
///
/// # Expected Behavior
///
/// - Never panics on any input, including invalid UTF-8
/// - Every line either yields a record or an error, then reading continues
/// - End of data is reported as `Ok(None)` and stays that way
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let tokenizer = Tokenizer::default();
    for line in text.lines() {
        if let Ok(fields) = tokenizer.split(line) {
            // Re-joining must tokenize back to the same fields.
            let rejoined = tokenizer.join(&fields);
            assert_eq!(tokenizer.split(&rejoined).ok(), Some(fields));
        }
    }

    let mut reader = DelimitedReader::from_reader(Cursor::new(data.to_vec()), ReaderConfig::default());
    let mut budget = data.len() + 2;
    loop {
        match reader.read_next() {
            Ok(None) => break,
            Ok(Some(_)) => {}
            Err(delimrec::ReaderError::Io(_)) => break,
            Err(_) => {}
        }
        budget -= 1;
        assert!(budget > 0, "reader did not reach end of data");
    }
    assert!(matches!(reader.read_next(), Ok(None) | Err(_)));
});
