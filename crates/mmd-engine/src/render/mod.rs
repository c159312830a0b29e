//! Output produced from a finished [`crate::Document`].
//!
//! - **`escape`**: entity escaping for literal text
//! - **`html`**: body content as HTML lines
//! - **`outline`**: human-readable summary of metadata and section tree

pub mod escape;
pub mod html;
pub mod outline;

pub use escape::escape_line;
pub use html::{render_block, render_html, write_html};
pub use outline::outline;
