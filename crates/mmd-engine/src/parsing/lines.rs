use std::io::BufRead;

use crate::error::ParseError;

/// A single input line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    /// Line text without its trailing newline (`\n` or `\r\n`).
    pub text: String,
}

/// Forward-only reader over the lines of an input stream.
///
/// There is no pushback. A parsing function that reads a line it does not
/// consume hands it back to its caller as a terminal line, and the caller
/// passes it to [`LineReader::resume`] instead of reading fresh.
pub struct LineReader<R> {
    lines: std::io::Lines<R>,
    read: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            read: 0,
        }
    }

    /// Reads the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<Line>, ParseError> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(e)) => Err(ParseError::Io(e)),
            Some(Ok(text)) => {
                self.read += 1;
                Ok(Some(Line {
                    number: self.read,
                    text,
                }))
            }
        }
    }

    /// Returns `pending` if a line is already in hand, otherwise reads the next one.
    pub fn resume(&mut self, pending: Option<Line>) -> Result<Option<Line>, ParseError> {
        match pending {
            Some(line) => Ok(Some(line)),
            None => self.next_line(),
        }
    }

    /// Number of lines pulled from the stream so far.
    pub fn lines_read(&self) -> usize {
        self.read
    }
}

impl<'a> LineReader<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}
