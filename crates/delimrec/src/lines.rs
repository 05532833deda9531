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

//! Line reader for the delimited reader.
//!
//! Provides buffered line-by-line reading with line number tracking and
//! line skipping. Exposed for callers that want raw lines with the same
//! terminator handling as the record reader.

use crate::error::ReaderResult;
use std::io::{self, BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// Reads input line-by-line, stripping LF and CRLF terminators, and tracks
/// the current 1-based line number for error reporting. Every physical line
/// counts, including one that fails to decode as UTF-8.
///
/// A failure of the underlying stream (I/O error, corrupt gzip data) is
/// returned once; afterwards the reader reports end of input.
///
/// # Examples
///
/// ```rust
/// use delimrec::LineReader;
/// use std::io::Cursor;
///
/// let input = "skip me\nline2\nline3";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// assert_eq!(reader.skip_lines(1).unwrap(), 1);
/// assert_eq!(reader.next_line().unwrap(), Some((2, "line2".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((3, "line3".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
    failed: bool,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self::from_buf_reader(BufReader::new(reader))
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::from_buf_reader(BufReader::with_capacity(capacity, reader))
    }

    fn from_buf_reader(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
            failed: false,
        }
    }

    /// Get the number of the last line read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Whether the underlying stream has failed. A failed reader only
    /// reports end of input.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Read the next line.
    ///
    /// A line that is not valid UTF-8 surfaces as an `InvalidData` I/O error
    /// naming the line; the line still counts and reading continues after it.
    pub fn next_line(&mut self) -> ReaderResult<Option<(usize, String)>> {
        if !self.read_raw()? {
            return Ok(None);
        }

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        match std::str::from_utf8(&self.buffer) {
            Ok(line) => Ok(Some((self.line_number, line.to_string()))),
            Err(e) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {} is not valid UTF-8: {}", self.line_number, e),
            )
            .into()),
        }
    }

    /// Discard up to `count` lines; returns how many were actually skipped.
    ///
    /// Skipped lines are not decoded, so they may hold any bytes.
    pub fn skip_lines(&mut self, count: usize) -> ReaderResult<usize> {
        let mut skipped = 0;
        while skipped < count && self.read_raw()? {
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Read one physical line into the buffer. `false` at end of input.
    fn read_raw(&mut self) -> ReaderResult<bool> {
        if self.failed {
            return Ok(false);
        }
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => Ok(false),
            Ok(_) => {
                self.line_number += 1;
                Ok(true)
            }
            Err(e) => {
                self.failed = true;
                Err(e.into())
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = ReaderResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReaderError;
    use std::io::Cursor;

    #[test]
    fn test_read_lines() {
        let input = "line1\nline2\nline3";
        let mut reader = LineReader::new(Cursor::new(input));

        assert_eq!(reader.next_line().unwrap(), Some((1, "line1".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "line2".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "line3".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    // ==================== Empty input tests ====================

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_empty_lines() {
        let mut reader = LineReader::new(Cursor::new("\n\n"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    // ==================== Line ending tests ====================

    #[test]
    fn test_mixed_line_endings() {
        let input = "line1\nline2\r\nline3\nline4";
        let mut reader = LineReader::new(Cursor::new(input));
        assert_eq!(reader.next_line().unwrap(), Some((1, "line1".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "line2".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "line3".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((4, "line4".to_string())));
    }

    #[test]
    fn test_lone_carriage_return_kept() {
        let mut reader = LineReader::new(Cursor::new("a\rb\n"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "a\rb".to_string())));
    }

    #[test]
    fn test_trailing_newline() {
        let mut reader = LineReader::new(Cursor::new("line1\n"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "line1".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    // ==================== Skipping tests ====================

    #[test]
    fn test_skip_lines_counts_line_numbers() {
        let mut reader = LineReader::new(Cursor::new("a\nb\nc\n"));
        assert_eq!(reader.skip_lines(2).unwrap(), 2);
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.next_line().unwrap(), Some((3, "c".to_string())));
    }

    #[test]
    fn test_skip_past_end() {
        let mut reader = LineReader::new(Cursor::new("a\nb"));
        assert_eq!(reader.skip_lines(5).unwrap(), 2);
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_skip_zero() {
        let mut reader = LineReader::new(Cursor::new("a"));
        assert_eq!(reader.skip_lines(0).unwrap(), 0);
        assert_eq!(reader.next_line().unwrap(), Some((1, "a".to_string())));
    }

    // ==================== Misc ====================

    #[test]
    fn test_iterator() {
        let reader = LineReader::new(Cursor::new("line1\nline2\nline3"));
        let lines: Vec<_> = reader.filter_map(|r| r.ok()).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], (3, "line3".to_string()));
    }

    #[test]
    fn test_with_small_capacity() {
        let mut reader = LineReader::with_capacity(Cursor::new("line1\nline2"), 1);
        assert_eq!(reader.next_line().unwrap(), Some((1, "line1".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "line2".to_string())));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[b'a', 0xff, 0xfe, b'\n'];
        let mut reader = LineReader::new(Cursor::new(bytes));
        match reader.next_line() {
            Err(ReaderError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_line_still_counts() {
        let bytes: &[u8] = b"a\n\xff,1\nb\n";
        let mut reader = LineReader::new(Cursor::new(bytes));
        assert_eq!(reader.next_line().unwrap(), Some((1, "a".to_string())));
        let err = reader.next_line().unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.next_line().unwrap(), Some((3, "b".to_string())));
    }

    #[test]
    fn test_skip_lines_accepts_invalid_utf8() {
        let bytes: &[u8] = b"\xff\xfe junk\nok\n";
        let mut reader = LineReader::new(Cursor::new(bytes));
        assert_eq!(reader.skip_lines(1).unwrap(), 1);
        assert_eq!(reader.next_line().unwrap(), Some((2, "ok".to_string())));
    }

    struct FailingStream;

    impl Read for FailingStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_stream_failure_is_reported_once() {
        let mut reader = LineReader::new(FailingStream);
        assert!(matches!(reader.next_line(), Err(ReaderError::Io(_))));
        assert!(reader.is_failed());
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.skip_lines(3).unwrap(), 0);
    }

    #[test]
    fn test_unicode_content() {
        let mut reader = LineReader::new(Cursor::new("你好\n🎉"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "你好".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "🎉".to_string())));
    }
}
