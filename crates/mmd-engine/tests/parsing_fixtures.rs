use mmd_engine::{Document, MetaKey, Section, Syntax, outline, parse_document};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str, syntax: &Syntax) -> Document {
    let path = format!("{}/tests/fixtures/{name}.mmd", env!("CARGO_MANIFEST_DIR"));
    let file = std::fs::File::open(&path).unwrap();
    let doc = parse_document(std::io::BufReader::new(file), syntax).unwrap();
    check_invariants(doc.root());
    doc
}

/// Structural invariants every parsed section tree must satisfy.
fn check_invariants(section: &Section) {
    assert!((1..=3).contains(&section.level()), "level out of range");
    assert!(!section.heading().trim().is_empty(), "empty heading");
    for paragraph in section.paragraphs() {
        assert!(!paragraph.blocks().is_empty(), "paragraph without blocks");
        for block in paragraph.blocks() {
            assert!(!block.lines().is_empty(), "block without lines");
        }
    }
    for child in section.subsections() {
        assert!(
            child.level() > section.level(),
            "child `{}` not deeper than `{}`",
            child.heading(),
            section.heading()
        );
        check_invariants(child);
    }
}

#[test]
fn fixture_article_tree() {
    let doc = load_fixture("article", &Syntax::default());

    assert_eq!(doc.metadata().title(), "A wonderful article");
    assert_eq!(doc.metadata().get(MetaKey::DateUpdated), "2025-05-17");

    insta::assert_snapshot!(outline(&doc).join("\n"), @r"
    === Metadata ===
    file: blank-article.txt
    brief: A blank article serving as a boilerplate.
    title: A wonderful article
    author: madpang
    date-created: 2025-05-11
    date-updated: 2025-05-17
    version: 0.1.0
    === Sections ===
    # The ONE AND ONLY Level-1 Heading
      - paragraph(2)
      ## Level 2 heading
        - paragraph(1) + code:c++ with comments(3) + paragraph(1)
        ### Level 3 heading
          - paragraph(1)
      ## Another level 2 heading
        - code:text(3)
    ");
}

#[test]
fn fixture_article_html() {
    let doc = load_fixture("article", &Syntax::default());
    let html = doc.to_html().unwrap();

    insta::assert_snapshot!(html.join("\n"), @r#"
    <div>
    <p>
    Some optional content here...
    NOTE, this forms an *anonymous* section.
    </p>
    </div>
    <div>
    <p>
    Compare a &lt; b &amp;&amp; b &gt; c:
    </p>
    <pre>
    if (a &lt; b &amp;&amp; b &gt; c) {
        return "&lt;ok&gt;";
    }
    </pre>
    <p>
    which is true for small a.
    </p>
    </div>
    <div>
    <p>
    More content here...
    </p>
    </div>
    <div>
    <pre>
    # not a heading, just code

    +++ not a nested fence either
    </pre>
    </div>
    "#);
}

#[test]
fn fixture_backtick_fences() {
    let syntax = Syntax {
        header_open: "``` header".into(),
        header_close: "```".into(),
        code_fence: "```".into(),
    };
    let doc = load_fixture("backticks", &syntax);

    assert_eq!(doc.metadata().get(MetaKey::Author), "test-author");
    assert_eq!(
        doc.to_html().unwrap(),
        ["<div>", "<pre>", r#"print("hi")"#, "</pre>", "</div>"]
    );
}

#[test]
fn fixture_backticks_fail_under_default_syntax() {
    let path = format!("{}/tests/fixtures/backticks.mmd", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(path).unwrap();
    let err = mmd_engine::parse_document_str(&text, &Syntax::default()).unwrap_err();
    assert_eq!(err.kind(), mmd_engine::ErrorKind::Structural);
}
