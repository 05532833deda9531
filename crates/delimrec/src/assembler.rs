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

//! Header capture and header/row pairing.

use crate::error::{ReaderError, ReaderResult};
use crate::record::Record;
use crate::value::Value;

/// Ordered field names captured from the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    fields: Vec<String>,
}

impl Header {
    /// Create a header from field names.
    pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a header line on `delimiter`.
    ///
    /// The split is raw: quote characters in the header line are kept as part
    /// of the field names.
    ///
    /// ```rust
    /// use delimrec::Header;
    ///
    /// let header = Header::from_line("id|\"name\"", '|');
    /// assert_eq!(header.fields(), ["id", "\"name\""]);
    /// ```
    pub fn from_line(line: &str, delimiter: char) -> Self {
        Self::new(line.split(delimiter))
    }

    /// Number of fields every row must carry.
    #[inline]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Pairs a header with tokenized rows.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    header: Header,
    delimiter: char,
    skip_empty_values: bool,
}

impl RecordAssembler {
    /// `delimiter` is only used to render offending rows in arity errors.
    pub fn new(header: Header, delimiter: char, skip_empty_values: bool) -> Self {
        Self {
            header,
            delimiter,
            skip_empty_values,
        }
    }

    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Build a record from `row`, read at physical line `line`.
    ///
    /// Fails with [`ReaderError::ArityMismatch`] unless the row has exactly
    /// one value per header field. With `skip_empty_values`, empty values are
    /// left out of the record entirely.
    pub fn assemble(&self, row: Vec<String>, line: usize) -> ReaderResult<Record> {
        if row.len() != self.header.arity() {
            return Err(ReaderError::ArityMismatch {
                line,
                expected: self.header.arity(),
                actual: row.len(),
                row: row.join(self.delimiter.to_string().as_str()),
            });
        }

        let mut record = Record::with_capacity(row.len());
        for (name, value) in self.header.fields.iter().zip(row) {
            if self.skip_empty_values && value.is_empty() {
                continue;
            }
            record.set(name.as_str(), Value::String(value));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_from_line() {
        let header = Header::from_line("A,B,C", ',');
        assert_eq!(header.arity(), 3);
        assert_eq!(header.fields(), ["A", "B", "C"]);
    }

    #[test]
    fn test_header_from_empty_line() {
        let header = Header::from_line("", ',');
        assert_eq!(header.arity(), 1);
        assert_eq!(header.fields(), [""]);
    }

    #[test]
    fn test_assemble_in_header_order() {
        let asm = RecordAssembler::new(Header::from_line("b,a,c", ','), ',', false);
        let record = asm.assemble(row(&["2", "1", "3"]), 2).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(record.get_str("a"), Some("1"));
    }

    #[test]
    fn test_arity_mismatch() {
        let asm = RecordAssembler::new(Header::from_line("A,B,C", ','), ',', false);
        let err = asm.assemble(row(&["1", "2"]), 5).unwrap_err();
        match err {
            ReaderError::ArityMismatch {
                line,
                expected,
                actual,
                row,
            } => {
                assert_eq!(line, 5);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
                assert_eq!(row, "1,2");
            }
            other => panic!("expected ArityMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_arity_mismatch_too_many() {
        let asm = RecordAssembler::new(Header::from_line("A|B", '|'), '|', false);
        let err = asm.assemble(row(&["1", "2", "3"]), 2).unwrap_err();
        assert!(err.to_string().contains("[1|2|3]"));
    }

    #[test]
    fn test_skip_empty_values() {
        let header = Header::from_line("column1|column2", '|');

        let skipping = RecordAssembler::new(header.clone(), '|', true);
        let record = skipping.assemble(row(&["value1", ""]), 2).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get_str("column1"), Some("value1"));
        assert!(!record.contains_key("column2"));

        let keeping = RecordAssembler::new(header, '|', false);
        let record = keeping.assemble(row(&["value1", ""]), 2).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get_str("column2"), Some(""));
    }

    #[test]
    fn test_skip_empty_values_all_empty() {
        let asm = RecordAssembler::new(Header::from_line("a,b", ','), ',', true);
        let record = asm.assemble(row(&["", ""]), 2).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_duplicate_header_names_last_wins() {
        let asm = RecordAssembler::new(Header::from_line("a,a", ','), ',', false);
        let record = asm.assemble(row(&["1", "2"]), 2).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get_str("a"), Some("2"));
    }
}
