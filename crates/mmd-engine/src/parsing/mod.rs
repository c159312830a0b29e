//! # Parsing
//!
//! One forward pass over a line stream, producing an immutable [`Document`].
//!
//! ```text
//! lines → header (metadata) → root section → sections / paragraphs / blocks
//! ```
//!
//! The stream has no pushback. Every recursive step returns the line that
//! ended it, if any, alongside the node it built, and the caller continues
//! from that line instead of reading a fresh one.

pub mod blocks;
pub mod header;
pub mod lines;
pub mod paragraph;
pub mod section;
pub mod syntax;

use std::io::BufRead;

use log::debug;

use crate::error::ParseError;
use crate::models::Document;

pub use blocks::{is_blank, parse_heading};
pub use header::parse_header;
pub use lines::{Line, LineReader};
pub use paragraph::assemble_paragraph;
pub use section::parse_section;
pub use syntax::Syntax;

/// Parses a complete document: header block followed by exactly one root section.
pub fn parse_document<R: BufRead>(reader: R, syntax: &Syntax) -> Result<Document, ParseError> {
    let mut lines = LineReader::new(reader);
    let metadata = parse_header(&mut lines, None, syntax)?;

    let heading_line = loop {
        match lines.next_line()? {
            Some(line) if is_blank(&line.text) => continue,
            Some(line) => break line,
            None => return Err(ParseError::MissingBody),
        }
    };
    if !matches!(parse_heading(&heading_line.text), Some(h) if h.level == 1) {
        return Err(ParseError::MissingRootHeading {
            line: heading_line.number,
            found: heading_line.text,
        });
    }

    let (root, terminal) = parse_section(heading_line, &mut lines, syntax)?;
    if let Some(extra) = terminal {
        return Err(ParseError::MultipleRootSections {
            line: extra.number,
            heading: extra.text,
        });
    }

    debug!("document parsed from {} line(s)", lines.lines_read());
    Ok(Document::new(metadata, root))
}

pub fn parse_document_str(text: &str, syntax: &Syntax) -> Result<Document, ParseError> {
    parse_document(text.as_bytes(), syntax)
}
