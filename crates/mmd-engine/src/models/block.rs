/// An ordered run of text lines that always holds at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLines(Vec<String>);

impl BlockLines {
    /// Starts a run with its first line.
    pub fn new(first: impl Into<String>) -> Self {
        Self(vec![first.into()])
    }

    /// Wraps `lines`, or returns `None` when there are none.
    pub fn from_vec(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self(lines))
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Verbatim content of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    info_tag: String,
    lines: BlockLines,
}

impl CodeBlock {
    pub const BLOCK_TYPE: &'static str = "code";

    pub fn new(info_tag: impl Into<String>, lines: BlockLines) -> Self {
        Self {
            info_tag: info_tag.into(),
            lines,
        }
    }

    /// Text following the opening fence marker, e.g. a language name.
    pub fn info_tag(&self) -> &str {
        &self.info_tag
    }

    pub fn lines(&self) -> &[String] {
        self.lines.as_slice()
    }
}

/// Plain text lines that no registered recognizer claimed.
///
/// Paragraph blocks are the fallback block kind and have no delimiters.
/// Contiguous unmatched lines collapse into one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphBlock {
    lines: BlockLines,
}

impl ParagraphBlock {
    pub const BLOCK_TYPE: &'static str = "paragraph";

    pub fn new(first: impl Into<String>) -> Self {
        Self {
            lines: BlockLines::new(first),
        }
    }

    pub(crate) fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        self.lines.as_slice()
    }
}

/// The smallest typed content unit inside a semantic paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Code(CodeBlock),
    Paragraph(ParagraphBlock),
}

impl Block {
    /// Self-identifying type tag, e.g. `"code"`.
    pub fn block_type(&self) -> &'static str {
        match self {
            Block::Code(_) => CodeBlock::BLOCK_TYPE,
            Block::Paragraph(_) => ParagraphBlock::BLOCK_TYPE,
        }
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Block::Code(code) => code.lines(),
            Block::Paragraph(paragraph) => paragraph.lines(),
        }
    }
}
