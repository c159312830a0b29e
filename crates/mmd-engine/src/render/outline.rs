use crate::models::{Block, Document, Section};

/// Summarises `doc` for debugging: metadata fields, then the section tree
/// with each semantic paragraph's blocks.
///
/// ```text
/// === Metadata ===
/// title: A wonderful article
/// ...
/// === Sections ===
/// # Title
///   - paragraph(2)
///   ## Sub
///     - paragraph(1) + code:rust(3)
/// ```
pub fn outline(doc: &Document) -> Vec<String> {
    let mut out = vec!["=== Metadata ===".to_string()];
    out.extend(doc.metadata().iter().map(|(key, value)| format!("{key}: {value}")));
    out.push("=== Sections ===".to_string());
    outline_section(doc.root(), &mut out);
    out
}

fn outline_section(section: &Section, out: &mut Vec<String>) {
    let indent = "  ".repeat(usize::from(section.level().saturating_sub(1)));
    out.push(format!(
        "{indent}{} {}",
        "#".repeat(usize::from(section.level())),
        section.heading()
    ));
    for paragraph in section.paragraphs() {
        let blocks: Vec<_> = paragraph.blocks().iter().map(describe_block).collect();
        out.push(format!("{indent}  - {}", blocks.join(" + ")));
    }
    for subsection in section.subsections() {
        outline_section(subsection, out);
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Code(code) => format!(
            "{}:{}({})",
            block.block_type(),
            code.info_tag(),
            code.lines().len()
        ),
        Block::Paragraph(paragraph) => {
            format!("{}({})", block.block_type(), paragraph.lines().len())
        }
    }
}
