use std::io::BufRead;

use log::trace;

use super::{
    blocks::{LineClass, classify, kinds::Paragraph, try_open_leaf},
    lines::{Line, LineReader},
    syntax::Syntax,
};
use crate::error::ParseError;
use crate::models::{Block, SemanticParagraph};

/// Assembles one semantic paragraph starting at `first`, a non-blank, non-heading line.
///
/// Consumes the maximal run of non-blank, non-heading lines. Each line is
/// offered to the block registry; lines nobody claims extend a paragraph
/// block. Returns the paragraph and the blank or heading line that ended the
/// run, if any.
pub fn assemble_paragraph<R: BufRead>(
    first: Line,
    reader: &mut LineReader<R>,
    syntax: &Syntax,
) -> Result<(SemanticParagraph, Option<Line>), ParseError> {
    let start = first.number;
    let mut blocks: Vec<Block> = Vec::new();
    let mut current = Some(first);

    let terminal = loop {
        let Some(line) = current.take() else {
            break None;
        };
        if !matches!(classify(&line.text), LineClass::Text) {
            break Some(line);
        }

        match try_open_leaf(&line.text, syntax) {
            Some(open) => {
                trace!("line {}: opening {:?}", line.number, open);
                let block = open.consume(&line, reader, syntax)?;
                blocks.push(block);
            }
            None => Paragraph::extend(&mut blocks, line.text),
        }
        current = reader.next_line()?;
    };

    let paragraph =
        SemanticParagraph::new(blocks).ok_or(ParseError::EmptyParagraph { line: start })?;
    trace!(
        "line {start}: semantic paragraph with {} block(s)",
        paragraph.blocks().len()
    );
    Ok((paragraph, terminal))
}
