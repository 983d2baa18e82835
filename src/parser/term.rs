//! Term block reader.

use crate::config::Config;

use super::indent::strip_spaces;
use super::markers::{is_blank, is_description_header, try_parse_term};

/// A consumed term: header line plus any continuation lines.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TermBlock {
    pub base_indent: usize,
    /// Continuation lines joined with `"\n"`; the join renders as a hard
    /// line break, not a paragraph break.
    pub text: String,
    /// First line index not consumed by the term.
    pub next_line: usize,
}

/// Read a term block starting at `start`.
///
/// Continuation lines must begin with a space or tab and are stripped by
/// `base_indent + 2` leading spaces, mirroring lazy paragraph continuation
/// under the two-column marker-and-space prefix. The term ends at a blank
/// line, another term line, a description header at this term's level, or a
/// non-indented line.
pub(crate) fn read_term_block(
    lines: &[&str],
    start: usize,
    end: usize,
    config: &Config,
) -> Option<TermBlock> {
    if start >= end {
        return None;
    }
    let head = try_parse_term(lines[start])?;
    let base_indent = head.base_indent;
    let min_indent = base_indent + config.description_indent;

    let mut collected = vec![head.text.to_string()];
    let mut line = start + 1;

    while line < end {
        let raw = lines[line];
        if is_blank(raw) {
            break;
        }
        if try_parse_term(raw).is_some() {
            break;
        }
        if is_description_header(raw, min_indent, config.description_indent) {
            break;
        }
        if !raw.starts_with(' ') && !raw.starts_with('\t') {
            break;
        }
        collected.push(strip_spaces(raw, base_indent + 2).trim_end().to_string());
        line += 1;
    }

    Some(TermBlock {
        base_indent,
        text: collected.join("\n"),
        next_line: line,
    })
}
