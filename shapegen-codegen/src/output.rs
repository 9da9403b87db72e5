//! Post-render cleanup of generated text.

/// Strip trailing whitespace from every line and collapse runs of blank
/// lines into one.
///
/// Leading and trailing blank lines are removed; non-empty output always
/// ends with exactly one newline. Indentation is left untouched.
pub fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}
