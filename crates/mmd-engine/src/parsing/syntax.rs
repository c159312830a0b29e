/// The literal tokens that delimit header and code blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    /// Line that opens the header block.
    pub header_open: String,
    /// Line that closes the header block.
    pub header_close: String,
    /// Marker that opens (followed by a space and an info tag) and closes a code block.
    pub code_fence: String,
}

impl Syntax {
    pub const HEADER_OPEN: &'static str = "+++ header";
    pub const HEADER_CLOSE: &'static str = "+++";
    pub const CODE_FENCE: &'static str = "+++";
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            header_open: Self::HEADER_OPEN.to_string(),
            header_close: Self::HEADER_CLOSE.to_string(),
            code_fence: Self::CODE_FENCE.to_string(),
        }
    }
}
