// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

const HEADER: &str = "+++ header
@file: bench.txt
@brief: Generated benchmark document
@title: Benchmark
@author: bench
@date: [created: 2025-05-11, updated: 2025-05-17]
@version: 0.1.0
+++

";

#[allow(dead_code)]
pub fn generate_flat_document(paragraphs: usize) -> String {
    let mut content = String::from(HEADER);
    content.push_str("# Title\n\n");
    for i in 0..paragraphs {
        content.push_str(&format!(
            "Paragraph {i} with <markup> & entities.\nA second line for paragraph {i}.\n\n"
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_nested_document(sections: usize) -> String {
    let mut content = String::from(HEADER);
    content.push_str("# Title\n\nIntro paragraph.\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("Some paragraph content with multiple sentences.\n\n");
        content.push_str(&format!("### Subsection {section}\n\n"));
        content.push_str("Code follows:\n+++ rust\nfn example() {\n    let value = 42;\n\n    println!(\"{}\", value);\n}\n+++\nand trails off.\n\n");
    }

    content
}
