use super::block::Block;

/// A blank-line delimited run of content, decomposed into typed blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticParagraph {
    blocks: Vec<Block>,
}

impl SemanticParagraph {
    /// Returns `None` when `blocks` is empty.
    pub fn new(blocks: Vec<Block>) -> Option<Self> {
        if blocks.is_empty() {
            None
        } else {
            Some(Self { blocks })
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// A heading together with the content and subsections it scopes.
///
/// Paragraphs always precede subsections in source order, and every
/// subsection has a strictly greater level than its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    level: u8,
    heading: String,
    paragraphs: Vec<SemanticParagraph>,
    subsections: Vec<Section>,
}

impl Section {
    pub(crate) fn new(
        level: u8,
        heading: String,
        paragraphs: Vec<SemanticParagraph>,
        subsections: Vec<Section>,
    ) -> Self {
        debug_assert!(subsections.iter().all(|s| s.level > level));
        Self {
            level,
            heading,
            paragraphs,
            subsections,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn paragraphs(&self) -> &[SemanticParagraph] {
        &self.paragraphs
    }

    pub fn subsections(&self) -> &[Section] {
        &self.subsections
    }
}
