use std::io::BufRead;
use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;

use super::{
    lines::{Line, LineReader},
    syntax::Syntax,
};
use crate::error::ParseError;
use crate::models::{MetaKey, Metadata, metadata::MetadataBuilder};

/// Tag of the composite date field.
const DATE_TAG: &str = "date";

fn meta_regex() -> &'static Regex {
    static META_REGEX: OnceLock<Regex> = OnceLock::new();
    META_REGEX.get_or_init(|| Regex::new(r"^@([a-z]+):(.*)$").expect("Invalid meta regex"))
}

fn date_regex() -> &'static Regex {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX.get_or_init(|| {
        Regex::new(r"^\[created: ([0-9]{4}-[0-9]{2}-[0-9]{2}), updated: ([0-9]{4}-[0-9]{2}-[0-9]{2})\]$")
            .expect("Invalid date regex")
    })
}

/// Parses the fenced header block at the start of a document.
///
/// `first` is an already read first line, if the caller has one.
/// The whole block is read before validation, so a malformed `@date` and a
/// missing one fail identically.
pub fn parse_header<R: BufRead>(
    reader: &mut LineReader<R>,
    first: Option<Line>,
    syntax: &Syntax,
) -> Result<Metadata, ParseError> {
    let opening = match reader.resume(first)? {
        Some(line) if line.text == syntax.header_open => line,
        other => {
            return Err(ParseError::MissingHeaderFence {
                expected: syntax.header_open.clone(),
                found: other.map(|l| l.text),
            });
        }
    };

    let mut fields = MetadataBuilder::default();
    loop {
        let Some(line) = reader.next_line()? else {
            return Err(ParseError::UnterminatedHeader {
                line: opening.number,
                close: syntax.header_close.clone(),
            });
        };
        if line.text == syntax.header_close {
            break;
        }
        apply_meta_line(&mut fields, &line);
    }

    let metadata = fields.build().ok_or(ParseError::IncompleteHeader)?;
    debug!("header parsed: `{}`", metadata.title());
    Ok(metadata)
}

fn apply_meta_line(fields: &mut MetadataBuilder, line: &Line) {
    let Some(caps) = meta_regex().captures(&line.text) else {
        trace!("line {}: not a meta line, ignored", line.number);
        return;
    };
    let tag = &caps[1];
    let value = caps[2].trim();

    if tag == DATE_TAG {
        match parse_date(value) {
            Some((created, updated)) => {
                fields.set(MetaKey::DateCreated, created);
                fields.set(MetaKey::DateUpdated, updated);
            }
            None => trace!("line {}: malformed date `{value}`, ignored", line.number),
        }
    } else if let Some(key) = MetaKey::from_tag(tag) {
        fields.set(key, value);
    } else {
        trace!("line {}: unknown meta tag `{tag}`, ignored", line.number);
    }
}

/// Splits `[created: YYYY-MM-DD, updated: YYYY-MM-DD]` into its two dates.
fn parse_date(value: &str) -> Option<(&str, &str)> {
    let caps = date_regex().captures(value)?;
    let created = caps.get(1)?.as_str();
    let updated = caps.get(2)?.as_str();
    Some((created, updated))
}
