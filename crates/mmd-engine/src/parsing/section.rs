use std::io::BufRead;

use log::debug;

use super::{
    blocks::{LineClass, classify, parse_heading},
    lines::{Line, LineReader},
    paragraph::assemble_paragraph,
    syntax::Syntax,
};
use crate::error::ParseError;
use crate::models::{Section, SemanticParagraph};

/// Accumulates a section during its single pass, then freezes it.
struct SectionBuilder {
    level: u8,
    heading: String,
    paragraphs: Vec<SemanticParagraph>,
    subsections: Vec<Section>,
}

impl SectionBuilder {
    fn push_paragraph(&mut self, paragraph: SemanticParagraph) {
        debug_assert!(
            self.subsections.is_empty(),
            "paragraph after a subsection of `{}`",
            self.heading
        );
        self.paragraphs.push(paragraph);
    }

    fn finish(self) -> Section {
        Section::new(self.level, self.heading, self.paragraphs, self.subsections)
    }
}

/// Parses the section opened by `heading_line` and everything it scopes.
///
/// The section ends at the first heading whose level is less than or equal
/// to its own, or at end of input. That heading is returned as the terminal
/// line: what it starts is the caller's decision. Headings of greater level
/// open subsections recursively; a subsection's terminal line becomes this
/// section's next line instead of a fresh read.
pub fn parse_section<R: BufRead>(
    heading_line: Line,
    reader: &mut LineReader<R>,
    syntax: &Syntax,
) -> Result<(Section, Option<Line>), ParseError> {
    let heading = parse_heading(&heading_line.text).ok_or_else(|| ParseError::MalformedHeading {
        line: heading_line.number,
        text: heading_line.text.clone(),
    })?;
    debug!(
        "line {}: section level {} `{}`",
        heading_line.number, heading.level, heading.text
    );

    let mut builder = SectionBuilder {
        level: heading.level,
        heading: heading.text,
        paragraphs: Vec::new(),
        subsections: Vec::new(),
    };
    let mut pending: Option<Line> = None;

    let terminal = loop {
        let Some(line) = reader.resume(pending.take())? else {
            break None;
        };

        match classify(&line.text) {
            LineClass::Blank => {}
            LineClass::Heading(h) if h.level > builder.level => {
                let (child, child_terminal) = parse_section(line, reader, syntax)?;
                builder.subsections.push(child);
                pending = child_terminal;
            }
            LineClass::Heading(_) => break Some(line),
            LineClass::Text => {
                let (paragraph, rest) = assemble_paragraph(line, reader, syntax)?;
                builder.push_paragraph(paragraph);
                pending = rest;
            }
        }
    };

    Ok((builder.finish(), terminal))
}
