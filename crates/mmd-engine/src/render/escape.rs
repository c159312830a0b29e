use std::borrow::Cow;

/// Escapes `&`, `<` and `>` in one line of literal text.
///
/// Each character is replaced exactly once, so the entities introduced are
/// never escaped again (`<` becomes `&lt;`, not `&amp;lt;`).
pub fn escape_line(line: &str) -> Cow<'_, str> {
    html_escape::encode_text(line)
}
