use std::io::BufRead;

use super::kinds::CodeFence;
use crate::error::ParseError;
use crate::models::{Block, CodeBlock};
use crate::parsing::{
    lines::{Line, LineReader},
    syntax::Syntax,
};

/// A block recognizer that matched a line and now owns the lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { info_tag: String },
    // Later: Quote, List...
}

impl BlockOpen {
    /// Consumes the rest of the block from `reader` and yields it.
    pub fn consume<R: BufRead>(
        self,
        opening: &Line,
        reader: &mut LineReader<R>,
        syntax: &Syntax,
    ) -> Result<Block, ParseError> {
        match self {
            BlockOpen::FencedCode { info_tag } => {
                CodeFence::consume(opening, info_tag, reader, &syntax.code_fence).map(Block::Code)
            }
        }
    }
}

/// Registered block recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    CodeFence,
}

/// Recognizers in priority order. Lines no recognizer claims fall back to paragraph text.
pub const REGISTRY: &[Recognizer] = &[Recognizer::CodeFence];

impl Recognizer {
    /// Type tag of the block this recognizer produces.
    pub fn block_type(self) -> &'static str {
        match self {
            Recognizer::CodeFence => CodeBlock::BLOCK_TYPE,
        }
    }

    /// Matches `line` without reading anything further.
    pub fn try_open(self, line: &str, syntax: &Syntax) -> Option<BlockOpen> {
        match self {
            Recognizer::CodeFence => {
                CodeFence::open_tag(line, &syntax.code_fence).map(|tag| BlockOpen::FencedCode {
                    info_tag: tag.to_string(),
                })
            }
        }
    }
}

/// First registered recognizer that claims `line`, if any.
pub fn try_open_leaf(line: &str, syntax: &Syntax) -> Option<BlockOpen> {
    REGISTRY.iter().find_map(|r| r.try_open(line, syntax))
}
