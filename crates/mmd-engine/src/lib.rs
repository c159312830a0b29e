pub mod error;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::{ErrorKind, ParseError, RenderError};
pub use models::*;
pub use parsing::{Syntax, parse_document, parse_document_str};
pub use render::{escape_line, outline, render_html, write_html};
