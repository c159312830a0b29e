//! # Block Parsing
//!
//! Recognition of the typed blocks that make up a semantic paragraph.
//!
//! ## Modules
//!
//! - **`classify`**: local facts about a body line (blank, heading, text)
//! - **`kinds`**: block-specific syntax with owned delimiters (CodeFence, Paragraph)
//! - **`open`**: the ordered recognizer registry and `try_open_leaf` dispatch
//!
//! ## Key Invariants
//!
//! - A recognizer that does not match reads nothing from the stream
//! - Fenced code blocks are raw zones: no heading or block parsing inside
//! - Unclaimed lines fall back to paragraph text

pub mod classify;
pub mod kinds;
pub mod open;

pub use classify::{Heading, LineClass, classify, is_blank, parse_heading};
pub use open::{BlockOpen, REGISTRY, Recognizer, try_open_leaf};
