pub mod block;
pub mod document;
pub mod metadata;
pub mod section;

pub use block::{Block, BlockLines, CodeBlock, ParagraphBlock};
pub use document::Document;
pub use metadata::{MetaKey, Metadata};
pub use section::{Section, SemanticParagraph};
