pub mod code_fence;
pub mod paragraph;

pub use code_fence::CodeFence;
pub use paragraph::Paragraph;
