use crate::models::{Block, ParagraphBlock};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback leaf block
/// when no registered recognizer matches a line.
pub struct Paragraph;

impl Paragraph {
    /// Appends `line` to the trailing paragraph block, or starts a new one
    /// when the last block is of another kind.
    pub fn extend(blocks: &mut Vec<Block>, line: String) {
        match blocks.last_mut() {
            Some(Block::Paragraph(paragraph)) => paragraph.push_line(line),
            _ => blocks.push(Block::Paragraph(ParagraphBlock::new(line))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockLines, CodeBlock};

    #[test]
    fn contiguous_lines_share_one_block() {
        let mut blocks = Vec::new();
        Paragraph::extend(&mut blocks, "one".into());
        Paragraph::extend(&mut blocks, "two".into());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines(), ["one", "two"]);
    }

    #[test]
    fn starts_new_block_after_code() {
        let mut blocks = vec![Block::Code(CodeBlock::new("sh", BlockLines::new("ls")))];
        Paragraph::extend(&mut blocks, "after".into());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].block_type(), "paragraph");
    }
}
