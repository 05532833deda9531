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

//! Line tokenizer.
//!
//! Splits one line of text (without its line terminator) into unquoted,
//! unescaped field values. The tokenizer is a deterministic automaton over
//! [`TokenState`]; [`Tokenizer::step`] consumes a single character and
//! returns the next state.
//!
//! # Quoting Rules
//!
//! - A field that starts with the quote character is quoted. Inside it the
//!   delimiter is literal and a doubled quote stands for one quote.
//! - A quote that closes a field must be followed by the delimiter or the
//!   end of the line.
//! - A quote that appears after the first character of an unquoted field is
//!   kept verbatim.
//! - With quoting disabled (`quote: None`) every field is unquoted.
//!
//! ```rust
//! use delimrec::Tokenizer;
//!
//! let tokenizer = Tokenizer::new(',', Some('"'));
//! let fields = tokenizer.split(r#"a,"b,c","say ""hi""",,"#).unwrap();
//! assert_eq!(fields, vec!["a", "b,c", r#"say "hi""#, "", ""]);
//! ```

use thiserror::Error;

/// Tokenizer failure within one line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (column {column})")]
pub struct TokenizeError {
    /// Zero-based character index where the failure was detected.
    pub column: usize,
    pub message: String,
}

const UNESCAPED_QUOTE: &str = "quoted value contains an unescaped quote character";
const UNTERMINATED_QUOTE: &str = "quoted value is not terminated before end of line";

/// Tokenizer automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    /// Start of a field.
    ValueStart,
    /// Inside an unquoted field.
    SimpleValue,
    /// Inside a quoted field.
    QuotedValue,
    /// Just read a quote inside a quoted field: either an escape or the close.
    QuoteInQuotedValue,
}

/// Delimiter- and quote-aware line splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    delimiter: char,
    quote: Option<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(',', Some('"'))
    }
}

impl Tokenizer {
    /// Create a tokenizer. `quote: None` disables quoting.
    pub fn new(delimiter: char, quote: Option<char>) -> Self {
        Self { delimiter, quote }
    }

    #[inline]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    #[inline]
    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    #[inline]
    fn is_quote(&self, ch: char) -> bool {
        self.quote == Some(ch)
    }

    /// Consume one character.
    ///
    /// `buf` holds the value of the field being read; completed fields are
    /// pushed onto `out`. Returns the next state, or the error message when
    /// the character is illegal in the current state.
    pub fn step(
        &self,
        state: TokenState,
        ch: char,
        buf: &mut String,
        out: &mut Vec<String>,
    ) -> Result<TokenState, &'static str> {
        match state {
            TokenState::ValueStart => {
                buf.clear();
                if self.is_quote(ch) {
                    Ok(TokenState::QuotedValue)
                } else if ch == self.delimiter {
                    out.push(String::new());
                    Ok(TokenState::ValueStart)
                } else {
                    buf.push(ch);
                    Ok(TokenState::SimpleValue)
                }
            }
            TokenState::SimpleValue => {
                if ch == self.delimiter {
                    out.push(std::mem::take(buf));
                    Ok(TokenState::ValueStart)
                } else {
                    buf.push(ch);
                    Ok(TokenState::SimpleValue)
                }
            }
            TokenState::QuotedValue => {
                if self.is_quote(ch) {
                    Ok(TokenState::QuoteInQuotedValue)
                } else {
                    buf.push(ch);
                    Ok(TokenState::QuotedValue)
                }
            }
            TokenState::QuoteInQuotedValue => {
                if self.is_quote(ch) {
                    buf.push(ch);
                    Ok(TokenState::QuotedValue)
                } else if ch == self.delimiter {
                    out.push(std::mem::take(buf));
                    Ok(TokenState::ValueStart)
                } else {
                    Err(UNESCAPED_QUOTE)
                }
            }
        }
    }

    /// Split a line into field values.
    ///
    /// A trailing synthetic delimiter flushes the last field, so an empty
    /// line yields one empty field.
    pub fn split(&self, line: &str) -> Result<Vec<String>, TokenizeError> {
        let mut state = TokenState::ValueStart;
        let mut buf = String::new();
        let mut out = Vec::new();
        let mut column = 0;

        for ch in line.chars() {
            state = self
                .step(state, ch, &mut buf, &mut out)
                .map_err(|message| TokenizeError {
                    column,
                    message: message.to_string(),
                })?;
            column += 1;
        }

        let end = TokenizeError {
            column,
            message: UNTERMINATED_QUOTE.to_string(),
        };
        match self.step(state, self.delimiter, &mut buf, &mut out) {
            Ok(TokenState::ValueStart) => Ok(out),
            Ok(_) => Err(end),
            Err(message) => Err(TokenizeError {
                column,
                message: message.to_string(),
            }),
        }
    }

    /// Quote `value` so that [`split`](Self::split) reads it back unchanged.
    ///
    /// Values holding neither the delimiter nor the quote are returned as is.
    /// With quoting disabled the value is always returned as is.
    ///
    /// ```rust
    /// use delimrec::Tokenizer;
    ///
    /// let t = Tokenizer::default();
    /// assert_eq!(t.quote_value("plain"), "plain");
    /// assert_eq!(t.quote_value("a,b"), r#""a,b""#);
    /// assert_eq!(t.quote_value(r#"say "hi""#), r#""say ""hi""""#);
    /// ```
    pub fn quote_value(&self, value: &str) -> String {
        let Some(quote) = self.quote else {
            return value.to_string();
        };
        if !value.contains(self.delimiter) && !value.contains(quote) {
            return value.to_string();
        }

        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push(quote);
        for ch in value.chars() {
            if ch == quote {
                quoted.push(quote);
            }
            quoted.push(ch);
        }
        quoted.push(quote);
        quoted
    }

    /// Join values into one line, quoting where needed.
    pub fn join<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut line = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                line.push(self.delimiter);
            }
            line.push_str(&self.quote_value(value.as_ref()));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<String> {
        Tokenizer::default().split(line).unwrap()
    }

    // ==================== Per-state transitions ====================

    #[test]
    fn test_step_value_start() {
        let t = Tokenizer::default();
        let mut buf = "stale".to_string();
        let mut out = Vec::new();

        assert_eq!(
            t.step(TokenState::ValueStart, '"', &mut buf, &mut out),
            Ok(TokenState::QuotedValue)
        );
        assert!(buf.is_empty());

        assert_eq!(
            t.step(TokenState::ValueStart, ',', &mut buf, &mut out),
            Ok(TokenState::ValueStart)
        );
        assert_eq!(out, vec![String::new()]);

        assert_eq!(
            t.step(TokenState::ValueStart, 'x', &mut buf, &mut out),
            Ok(TokenState::SimpleValue)
        );
        assert_eq!(buf, "x");
    }

    #[test]
    fn test_step_simple_value() {
        let t = Tokenizer::default();
        let mut buf = "ab".to_string();
        let mut out = Vec::new();

        assert_eq!(
            t.step(TokenState::SimpleValue, '"', &mut buf, &mut out),
            Ok(TokenState::SimpleValue)
        );
        assert_eq!(
            t.step(TokenState::SimpleValue, ',', &mut buf, &mut out),
            Ok(TokenState::ValueStart)
        );
        assert_eq!(out, vec!["ab\"".to_string()]);
    }

    #[test]
    fn test_step_quoted_value() {
        let t = Tokenizer::default();
        let mut buf = String::new();
        let mut out = Vec::new();

        assert_eq!(
            t.step(TokenState::QuotedValue, ',', &mut buf, &mut out),
            Ok(TokenState::QuotedValue)
        );
        assert_eq!(
            t.step(TokenState::QuotedValue, '"', &mut buf, &mut out),
            Ok(TokenState::QuoteInQuotedValue)
        );
        assert_eq!(buf, ",");
        assert!(out.is_empty());
    }

    #[test]
    fn test_step_quote_in_quoted_value() {
        let t = Tokenizer::default();
        let mut buf = "v".to_string();
        let mut out = Vec::new();

        assert_eq!(
            t.step(TokenState::QuoteInQuotedValue, '"', &mut buf, &mut out),
            Ok(TokenState::QuotedValue)
        );
        assert_eq!(buf, "v\"");

        assert_eq!(
            t.step(TokenState::QuoteInQuotedValue, ',', &mut buf, &mut out),
            Ok(TokenState::ValueStart)
        );
        assert_eq!(out, vec!["v\"".to_string()]);

        assert_eq!(
            t.step(TokenState::QuoteInQuotedValue, 'x', &mut buf, &mut out),
            Err(UNESCAPED_QUOTE)
        );
    }

    // ==================== Line splitting ====================

    #[test]
    fn test_simple_line() {
        assert_eq!(split("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_leading_and_consecutive_delimiters() {
        assert_eq!(split(",a,,b,"), vec!["", "a", "", "b", ""]);
        assert_eq!(split(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_quoted_delimiter() {
        assert_eq!(split(r#""a,b",c"#), vec!["a,b", "c"]);
    }

    #[test]
    fn test_doubled_quote_escape() {
        let line = r#"v1,"v31, ""v32"", v33",v4"#;
        assert_eq!(split(line), vec!["v1", r#"v31, "v32", v33"#, "v4"]);
    }

    #[test]
    fn test_empty_quoted_value() {
        assert_eq!(split(r#""",x"#), vec!["", "x"]);
        assert_eq!(split(r#""""#), vec![""]);
    }

    #[test]
    fn test_quoted_value_only_quote() {
        assert_eq!(split(r#""""""#), vec!["\""]);
    }

    #[test]
    fn test_quote_inside_simple_value_is_literal() {
        assert_eq!(split(r#"ab"c,d"#), vec![r#"ab"c"#, "d"]);
    }

    #[test]
    fn test_unescaped_quote_is_error() {
        let err = Tokenizer::default().split(r#"a,"b"c,d"#).unwrap_err();
        assert_eq!(err.message, UNESCAPED_QUOTE);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_unterminated_quote_is_error() {
        let err = Tokenizer::default().split(r#"a,"bc"#).unwrap_err();
        assert_eq!(err.message, UNTERMINATED_QUOTE);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_quoting_disabled() {
        let t = Tokenizer::new(',', None);
        assert_eq!(
            t.split(r#""a,b""#).unwrap(),
            vec![r#""a"#.to_string(), r#"b""#.to_string()]
        );
    }

    #[test]
    fn test_custom_delimiter_and_quote() {
        let t = Tokenizer::new('|', Some('\''));
        assert_eq!(
            t.split("'a|b'|'it''s'|\"x\"").unwrap(),
            vec!["a|b", "it's", "\"x\""]
        );
    }

    #[test]
    fn test_tab_delimiter() {
        let t = Tokenizer::new('\t', Some('"'));
        assert_eq!(t.split("a\tb c\t").unwrap(), vec!["a", "b c", ""]);
    }

    #[test]
    fn test_unicode_values() {
        assert_eq!(split("你好,\"世,界\",🎉"), vec!["你好", "世,界", "🎉"]);
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(split(" a , b "), vec![" a ", " b "]);
    }

    // ==================== Quoting helper ====================

    #[test]
    fn test_quote_value_disabled() {
        let t = Tokenizer::new(',', None);
        assert_eq!(t.quote_value("a,b"), "a,b");
    }

    #[test]
    fn test_join_round_trip() {
        let t = Tokenizer::default();
        let values = vec!["plain", "with,comma", r#"with "quote""#, ""];
        let line = t.join(&values);
        assert_eq!(t.split(&line).unwrap(), values);
    }
}
