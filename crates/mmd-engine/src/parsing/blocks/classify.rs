use std::sync::OnceLock;

use regex::Regex;

/// A heading line split into its level and trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (1-3).
    pub level: u8,
    pub text: String,
}

/// Local facts about a single body line, independent of surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace only.
    Blank,
    Heading(Heading),
    /// Anything else: candidate content for a semantic paragraph.
    Text,
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,3}) (\S.*)$").expect("Invalid heading regex"))
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parses `line` against the heading grammar: 1-3 `#`, one space, non-empty text.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = heading_regex().captures(line)?;
    let level = caps[1].len() as u8;
    let text = caps[2].trim_end().to_string();
    Some(Heading { level, text })
}

pub fn classify(line: &str) -> LineClass {
    if is_blank(line) {
        LineClass::Blank
    } else if let Some(heading) = parse_heading(line) {
        LineClass::Heading(heading)
    } else {
        LineClass::Text
    }
}
