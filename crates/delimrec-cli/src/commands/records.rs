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

//! Records command - print records as JSON lines or delimited text

use super::{open_reader, pull, Pulled};
use crate::cli::{display_name, OutputFormat, ReaderArgs};
use crate::error::CliError;
use delimrec::{DelimitedReader, Record, Tokenizer, Value};
use serde_json::{Map, Number};
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Print the records of a delimited file to stdout.
///
/// # Arguments
///
/// * `file` - Input path, or `-` for stdin
/// * `args` - Reader options
/// * `format` - JSON lines, or delimited text with a header line
/// * `limit` - Stop after this many records
/// * `keep_going` - Skip malformed lines instead of failing
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, a line is malformed and
/// `keep_going` is off, or stdout cannot be written.
///
/// # Examples
///
/// ```no_run
/// use delimrec_cli::cli::{OutputFormat, ReaderArgs};
/// use delimrec_cli::commands::records;
///
/// # fn main() -> Result<(), delimrec_cli::error::CliError> {
/// records("people.csv", &ReaderArgs::default(), OutputFormat::Json, Some(10), false)?;
/// # Ok(())
/// # }
/// ```
pub fn records(
    file: &str,
    args: &ReaderArgs,
    format: OutputFormat,
    limit: Option<usize>,
    keep_going: bool,
) -> Result<(), CliError> {
    let mut reader = open_reader(file, args);
    let tokenizer = reader.config().tokenizer();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut header_written = false;
    let mut printed = 0usize;
    let mut skipped = 0usize;

    while limit.map_or(true, |n| printed < n) {
        match pull(&mut reader, file, keep_going)? {
            Pulled::Record(record) => {
                if format == OutputFormat::Delimited && !header_written {
                    write_header(&mut out, &reader, &tokenizer)?;
                    header_written = true;
                }
                write_record(&mut out, &record, format, &reader, &tokenizer)?;
                printed += 1;
            }
            Pulled::Skipped => skipped += 1,
            Pulled::End => break,
        }
    }

    if format == OutputFormat::Delimited && !header_written {
        // No rows: a header-only file still prints its header.
        write_header(&mut out, &reader, &tokenizer)?;
    }
    out.flush()?;

    info!(
        file = display_name(file),
        printed, skipped, "Finished printing records"
    );
    if skipped > 0 {
        eprintln!("{} malformed line(s) skipped", skipped);
    }
    Ok(())
}

fn write_header(
    out: &mut impl Write,
    reader: &DelimitedReader,
    tokenizer: &Tokenizer,
) -> Result<(), CliError> {
    // The header is split without quote handling, so it is written back raw.
    if let Some(header) = reader.header() {
        let delimiter = tokenizer.delimiter().to_string();
        writeln!(out, "{}", header.fields().join(delimiter.as_str()))?;
    }
    Ok(())
}

fn write_record(
    out: &mut impl Write,
    record: &Record,
    format: OutputFormat,
    reader: &DelimitedReader,
    tokenizer: &Tokenizer,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(&record_to_json(record))?;
            writeln!(out, "{}", line)?;
        }
        OutputFormat::Delimited => {
            // Fields omitted by skip-empty come back as empty values.
            let values: Vec<String> = match reader.header() {
                Some(header) => header
                    .fields()
                    .iter()
                    .map(|name| record.get(name).map(Value::to_string).unwrap_or_default())
                    .collect(),
                None => record.values().map(Value::to_string).collect(),
            };
            writeln!(out, "{}", tokenizer.join(&values))?;
        }
    }
    Ok(())
}

/// Convert a record to a JSON object.
///
/// Non-finite floats have no JSON form and become `null`.
///
/// ```rust
/// use delimrec::Record;
/// use delimrec_cli::commands::record_to_json;
///
/// let record: Record = [("id", "1"), ("name", "Ada")].into_iter().collect();
/// let json = record_to_json(&record);
/// assert_eq!(json["name"], "Ada");
/// ```
pub fn record_to_json(record: &Record) -> serde_json::Value {
    let mut map = Map::with_capacity(record.len());
    for (name, value) in record.iter() {
        let json = match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
        };
        map.insert(name.to_string(), json);
    }
    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_to_json_strings() {
        let record: Record = [("id", "1"), ("name", "Ada")].into_iter().collect();
        assert_eq!(record_to_json(&record), json!({"id": "1", "name": "Ada"}));
    }

    #[test]
    fn test_record_to_json_typed_values() {
        let mut record = Record::new();
        record.set("missing", Value::Null);
        record.set("flag", true);
        record.set("count", 42i64);
        record.set("ratio", 0.5f64);
        assert_eq!(
            record_to_json(&record),
            json!({"missing": null, "flag": true, "count": 42, "ratio": 0.5})
        );
    }

    #[test]
    fn test_record_to_json_non_finite_float_is_null() {
        let mut record = Record::new();
        record.set("x", f64::NAN);
        assert_eq!(record_to_json(&record), json!({"x": null}));
    }

    #[test]
    fn test_record_to_json_empty_record() {
        assert_eq!(record_to_json(&Record::new()), json!({}));
    }

    #[test]
    fn test_write_header_keeps_quotes_verbatim() {
        use delimrec::{ReaderConfig, RecordSource};
        use std::io::Cursor;

        let input = "id,\"name\",note\n1,x,y\n";
        let mut reader = DelimitedReader::from_reader(Cursor::new(input), ReaderConfig::default());
        reader.read_next().unwrap();
        let tokenizer = reader.config().tokenizer();

        let mut out = Vec::new();
        write_header(&mut out, &reader, &tokenizer).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id,\"name\",note\n");
    }

    #[test]
    fn test_write_record_delimited_fills_skipped_fields() {
        use delimrec::{ReaderConfig, RecordSource};
        use std::io::Cursor;

        let config = ReaderConfig {
            skip_empty_values: true,
            ..Default::default()
        };
        let mut reader = DelimitedReader::from_reader(Cursor::new("a,b,c\n1,,\"x,y\"\n"), config);
        let record = reader.read_next().unwrap().unwrap();
        let tokenizer = reader.config().tokenizer();

        let mut out = Vec::new();
        write_record(&mut out, &record, OutputFormat::Delimited, &reader, &tokenizer).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,,\"x,y\"\n");
    }
}
