//! Body-text normalization before generic block re-parsing.
//!
//! Both functions are pure text transforms; the recursive parse over the
//! result happens in the emitter via the host.

use super::indent::{indent_cols, strip_cols, strip_spaces};

/// True when `text` reads as nested definition-list source, i.e. it starts
/// with a marker after leading whitespace.
pub(crate) fn looks_like_nested_dl(text: &str) -> bool {
    text.trim_start().starts_with(':')
}

/// Rewrite a nested-list body so marker lines sit at the canonical
/// four-column indent, regardless of the column drift the outer stripping
/// left behind. Blank lines are preserved as empty. The first line is the
/// seed (already term-shaped) and stays untouched.
pub(crate) fn renormalize_nested(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() <= 1 {
        return text.to_string();
    }

    // Shift everything left by the indent of the first term-shaped line, so
    // nested terms land at column zero.
    let mut term_shift = 0;
    for l in &lines[1..] {
        if l.trim().is_empty() {
            continue;
        }
        let spaces = l.bytes().take_while(|&b| b == b' ').count();
        if spaces <= 3 && l.as_bytes().get(spaces) == Some(&b':') {
            term_shift = spaces;
            break;
        }
    }

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    out.push(lines[0].to_string());

    for l in &lines[1..] {
        if l.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        let shifted = if term_shift > 0 {
            strip_spaces(l, term_shift)
        } else {
            l
        };

        // Pin drifted marker lines to exactly four columns.
        let ws_len = shifted.len() - shifted.trim_start().len();
        if shifted[ws_len..].starts_with(':') {
            let spaces = shifted.bytes().take_while(|&b| b == b' ').count();
            if spaces >= 4 {
                out.push(format!("    :{}", &shifted[ws_len + 1..]));
                continue;
            }
        }

        out.push(shifted.to_string());
    }

    out.join("\n")
}

/// Dedent a block by its minimum non-blank indentation. A no-op when the
/// minimum is already zero, which makes the transform idempotent.
pub(crate) fn dedent(text: &str, tab_width: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut min: Option<usize> = None;
    for l in &lines {
        if l.trim().is_empty() {
            continue;
        }
        let (cols, _) = indent_cols(l, tab_width);
        min = Some(min.map_or(cols, |m| m.min(cols)));
    }

    let Some(min) = min else {
        return text.to_string();
    };
    if min == 0 {
        return text.to_string();
    }

    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                strip_cols(l, min, tab_width)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
