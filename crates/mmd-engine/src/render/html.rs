use std::io::Write;

use crate::error::RenderError;
use crate::models::{Block, Document, Section, SemanticParagraph};

use super::escape::escape_line;

const PARAGRAPH_CONTAINER: (&str, &str) = ("<div>", "</div>");
const PLAIN_PARAGRAPH: (&str, &str) = ("<p>", "</p>");
const PREFORMATTED: (&str, &str) = ("<pre>", "</pre>");

/// Renders the body of `doc` as an ordered list of HTML lines.
///
/// Only body content is emitted; heading text and metadata are not part of
/// the output.
pub fn render_html(doc: &Document) -> Result<Vec<String>, RenderError> {
    let mut out = Vec::new();
    render_section(doc.root(), &mut out)?;
    Ok(out)
}

/// Writes the rendered lines of `doc` to `writer`, one per line.
pub fn write_html<W: Write>(doc: &Document, writer: &mut W) -> Result<(), RenderError> {
    for line in render_html(doc)? {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

fn render_section(section: &Section, out: &mut Vec<String>) -> Result<(), RenderError> {
    for paragraph in section.paragraphs() {
        render_paragraph(paragraph, out)?;
    }
    for subsection in section.subsections() {
        render_section(subsection, out)?;
    }
    Ok(())
}

fn render_paragraph(paragraph: &SemanticParagraph, out: &mut Vec<String>) -> Result<(), RenderError> {
    let (open, close) = PARAGRAPH_CONTAINER;
    out.push(open.to_string());
    for block in paragraph.blocks() {
        render_block(block, out)?;
    }
    out.push(close.to_string());
    Ok(())
}

/// Renders one block. The code block info tag is not emitted.
pub fn render_block(block: &Block, out: &mut Vec<String>) -> Result<(), RenderError> {
    let lines = block.lines();
    if lines.is_empty() {
        return Err(RenderError::EmptyBlock {
            block_type: block.block_type(),
        });
    }

    let (open, close) = match block {
        Block::Code(_) => PREFORMATTED,
        Block::Paragraph(_) => PLAIN_PARAGRAPH,
    };
    out.push(open.to_string());
    out.extend(lines.iter().map(|line| escape_line(line).into_owned()));
    out.push(close.to_string());
    Ok(())
}
