//! TeX escaping for text embedded in directive arguments.

/// Escape a string for use inside a `\pdfcomment{...}` argument.
///
/// Newlines become `\textLF`, spaces become `~`, and `{ } _ & %` gain a
/// leading backslash. The mapping is applied in a single pass, so the output
/// of one replacement is never fed back into another.
///
/// ```
/// use pgfplots::escape::escape_note;
///
/// assert_eq!(escape_note("50% of a_b"), r"50\%~of~a\_b");
/// ```
#[must_use]
pub fn escape_note(note: &str) -> String {
    let mut escaped = String::with_capacity(note.len() + note.len() / 4);
    for c in note.chars() {
        match c {
            '\n' => escaped.push_str(r"\textLF"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '_' => escaped.push_str(r"\_"),
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            ' ' => escaped.push('~'),
            other => escaped.push(other),
        }
    }
    escaped
}
