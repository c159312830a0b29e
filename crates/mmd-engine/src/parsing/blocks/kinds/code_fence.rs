use std::io::BufRead;

use crate::error::ParseError;
use crate::models::{BlockLines, CodeBlock};
use crate::parsing::lines::{Line, LineReader};

/// Fenced code block type.
///
/// All fence syntax knowledge lives here: a block opens with the marker,
/// one space and a non-blank info tag, and closes on a line that is exactly
/// the bare marker. Content lines in between are raw and never interpreted.
pub struct CodeFence;

impl CodeFence {
    /// Returns the trimmed info tag when `line` opens a fence with `marker`.
    pub fn open_tag<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
        let tag = line.strip_prefix(marker)?.strip_prefix(' ')?.trim();
        if tag.is_empty() { None } else { Some(tag) }
    }

    pub fn closes(line: &str, marker: &str) -> bool {
        line == marker
    }

    /// Reads content lines up to and including the closing fence.
    ///
    /// `opening` is the already consumed opening line.
    pub fn consume<R: BufRead>(
        opening: &Line,
        info_tag: String,
        reader: &mut LineReader<R>,
        marker: &str,
    ) -> Result<CodeBlock, ParseError> {
        let mut content = Vec::new();
        loop {
            match reader.next_line()? {
                Some(line) if Self::closes(&line.text, marker) => break,
                Some(line) => content.push(line.text),
                None => {
                    return Err(ParseError::UnterminatedFence {
                        line: opening.number,
                        fence: marker.to_string(),
                        info_tag,
                    });
                }
            }
        }

        match BlockLines::from_vec(content) {
            Some(lines) => Ok(CodeBlock::new(info_tag, lines)),
            None => Err(ParseError::EmptyCodeBlock {
                line: opening.number,
                info_tag,
            }),
        }
    }
}
