use super::{metadata::Metadata, section::Section};
use crate::error::RenderError;
use crate::render;

/// A parsed mmd document: its header metadata and the single root section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    metadata: Metadata,
    root: Section,
}

impl Document {
    pub(crate) fn new(metadata: Metadata, root: Section) -> Self {
        Self { metadata, root }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The sole level-1 section.
    pub fn root(&self) -> &Section {
        &self.root
    }

    /// Renders the body to HTML lines.
    pub fn to_html(&self) -> Result<Vec<String>, RenderError> {
        render::render_html(self)
    }
}
