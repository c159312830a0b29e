use thiserror::Error;

/// Broad classification of a failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong or missing fence/heading token, unterminated header or fence.
    Structural,
    /// The header closed properly but a required field is missing or empty.
    Validation,
    /// A block or paragraph would contain zero lines.
    EmptyContent,
    /// The underlying reader failed.
    Io,
}

/// Errors raised while turning an input stream into a [`crate::Document`].
///
/// Every variant is fatal: a failed parse yields no document at all.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected header start fence `{expected}`, found {}", describe_found(.found))]
    MissingHeaderFence {
        expected: String,
        found: Option<String>,
    },

    #[error("unterminated header: block opened on line {line} is not closed by `{close}`")]
    UnterminatedHeader { line: usize, close: String },

    #[error("header block is incomplete: required fields are missing or empty")]
    IncompleteHeader,

    #[error("line {line}: malformed heading `{text}`, expected 1-3 `#`, a space and heading text")]
    MalformedHeading { line: usize, text: String },

    #[error("document body is missing: expected a level-1 heading after the header block")]
    MissingBody,

    #[error("line {line}: expected a level-1 heading to open the document body, found `{found}`")]
    MissingRootHeading { line: usize, found: String },

    #[error("line {line}: `{heading}` starts a second root section, a document has exactly one")]
    MultipleRootSections { line: usize, heading: String },

    #[error("line {line}: unterminated fence `{fence} {info_tag}`, expected a closing `{fence}`")]
    UnterminatedFence {
        line: usize,
        fence: String,
        info_tag: String,
    },

    #[error("line {line}: empty code block `{info_tag}`, a fenced block needs at least one line")]
    EmptyCodeBlock { line: usize, info_tag: String },

    #[error("line {line}: semantic paragraph produced no blocks")]
    EmptyParagraph { line: usize },
}

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(line) => format!("`{line}`"),
        None => "end of input".to_string(),
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Io(_) => ErrorKind::Io,
            ParseError::IncompleteHeader => ErrorKind::Validation,
            ParseError::EmptyCodeBlock { .. } | ParseError::EmptyParagraph { .. } => {
                ErrorKind::EmptyContent
            }
            ParseError::MissingHeaderFence { .. }
            | ParseError::UnterminatedHeader { .. }
            | ParseError::MalformedHeading { .. }
            | ParseError::MissingBody
            | ParseError::MissingRootHeading { .. }
            | ParseError::MultipleRootSections { .. }
            | ParseError::UnterminatedFence { .. } => ErrorKind::Structural,
        }
    }
}

/// Errors raised while rendering a finished document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{block_type} block contains no lines to convert to HTML")]
    EmptyBlock { block_type: &'static str },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(ParseError::IncompleteHeader.kind(), ErrorKind::Validation);
        assert_eq!(
            ParseError::EmptyCodeBlock {
                line: 3,
                info_tag: "rust".into()
            }
            .kind(),
            ErrorKind::EmptyContent
        );
        assert_eq!(
            ParseError::UnterminatedFence {
                line: 3,
                fence: "+++".into(),
                info_tag: "rust".into()
            }
            .kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn missing_header_fence_reports_end_of_input() {
        let err = ParseError::MissingHeaderFence {
            expected: "+++ header".into(),
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "expected header start fence `+++ header`, found end of input"
        );
    }

    #[test]
    fn missing_header_fence_quotes_found_line() {
        let err = ParseError::MissingHeaderFence {
            expected: "+++ header".into(),
            found: Some("# Title".into()),
        };
        assert_eq!(
            err.to_string(),
            "expected header start fence `+++ header`, found `# Title`"
        );
    }
}
