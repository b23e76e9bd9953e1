//! Shared utility functions for output formatting

use std::io::{self, Write};

use crate::mode::{octal_mode, symbolic_mode};

/// Tree connector drawn in front of an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Return (shown, tooltip) mode strings: symbolic shown with an octal
/// tooltip, or the other way round with `alternate`.
pub fn mode_strings(mode: u32, alternate: bool) -> (String, String) {
    let symbolic = symbolic_mode(mode);
    let octal = octal_mode(mode);
    if alternate {
        (octal, symbolic)
    } else {
        (symbolic, octal)
    }
}

/// Write `text` with HTML special characters escaped.
///
/// `<`, `>`, `&`, `"` and `'` become entities; newline, carriage return and
/// tab are dropped.
pub fn write_escaped<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let mut start = 0;
    for (i, c) in text.char_indices() {
        let replacement = match c {
            '<' => "&lt;",
            '>' => "&gt;",
            '&' => "&amp;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            '\n' | '\r' | '\t' => "",
            _ => continue,
        };
        out.write_all(text[start..i].as_bytes())?;
        out.write_all(replacement.as_bytes())?;
        start = i + c.len_utf8();
    }
    out.write_all(text[start..].as_bytes())
}

/// Escape `text` for HTML into a new string.
pub fn escape_html(text: &str) -> String {
    let mut out = Vec::with_capacity(text.len());
    // Writing to a Vec cannot fail
    let _ = write_escaped(&mut out, text);
    String::from_utf8_lossy(&out).into_owned()
}
