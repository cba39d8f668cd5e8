// Dweve benchlog - Benchmark Log Extraction
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

//! Line reader for log extraction.
//!
//! Buffered line-by-line reading with 1-based line numbers for error
//! reporting. LF and CRLF endings are both stripped.

use crate::error::{ExtractError, ExtractResult};
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("Start\r\nEnd: 1ms\n"));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "Start".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "End: 1ms".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Read the next line.
    pub fn next_line(&mut self) -> ExtractResult<Option<(usize, String)>> {
        self.buffer.clear();

        let read = self
            .reader
            .read_line(&mut self.buffer)
            .map_err(|source| ExtractError::Read {
                line: self.line_number + 1,
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(Some((self.line_number, self.buffer.clone())))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = ExtractResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines() {
        let mut reader = LineReader::new(Cursor::new("line1\nline2\nline3"));

        assert_eq!(reader.next_line().unwrap(), Some((1, "line1".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "line2".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "line3".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_lines_are_numbered() {
        let lines: Vec<_> = LineReader::new(Cursor::new("\n\nx\n"))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            lines,
            vec![(1, String::new()), (2, String::new()), (3, "x".to_string())]
        );
    }

    #[test]
    fn test_crlf_stripped_but_lone_cr_kept() {
        let mut reader = LineReader::new(Cursor::new("a\r\nb\r"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "a".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "b\r".to_string())));
    }

    #[test]
    fn test_micro_sign_survives() {
        let mut reader = LineReader::new(Cursor::new("End: x ..12µs\nEnd: y ..3Âµs\n"));
        assert_eq!(reader.next_line().unwrap().unwrap().1, "End: x ..12µs");
        assert_eq!(reader.next_line().unwrap().unwrap().1, "End: y ..3Âµs");
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let mut reader = LineReader::new(Cursor::new(b"ok\n\xff\xfe\n".to_vec()));
        assert_eq!(reader.next_line().unwrap(), Some((1, "ok".to_string())));
        let err = reader.next_line().unwrap_err();
        assert!(matches!(err, ExtractError::Read { line: 2, .. }));
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("line 2"));
    }
}
