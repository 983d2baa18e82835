//! Description block reader.

use crate::config::Config;

use super::indent::{indent_cols, strip_cols};
use super::markers::{
    is_blank, is_description_header, is_empty_description_header, is_list_item_start,
    is_two_col_offset_list_item, strip_two_cols, try_parse_description_header, try_parse_term,
};

/// A consumed description: header line plus continuation lines.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DescriptionBlock {
    /// Joined body text; possibly empty for a bare marker with no content.
    pub text: String,
    /// First line index not consumed by the description.
    pub next_line: usize,
}

/// Read a description block starting at `start`, under a term with
/// `base_indent` raw columns.
///
/// The header is either `: text` / `:: text` at
/// `[min_indent, min_indent + 3]` columns, or a bare marker. Continuation
/// lines are absorbed until a term line, a sibling description header, or an
/// indentation drop below `min_indent`; a description that opens a nested
/// list keeps absorbing marker lines indented deeper than `min_indent` as
/// content. Blank lines are kept tentatively, one at a time, while the body
/// continues past them.
pub(crate) fn read_description_block(
    lines: &[&str],
    start: usize,
    end: usize,
    base_indent: usize,
    config: &Config,
) -> Option<DescriptionBlock> {
    let tab = config.description_indent;
    let min_indent = base_indent + tab;

    let header = try_parse_description_header(lines[start], min_indent, tab);
    let empty_header = header.is_none() && is_empty_description_header(lines[start], min_indent, tab);
    if header.is_none() && !empty_header {
        return None;
    }

    let mut collected: Vec<String> = Vec::new();
    // A header that itself starts a list needs the two-column compensation
    // below; one that starts a nested definition list loosens the sibling
    // header check.
    let (header_starts_list, starts_nested_list) = match &header {
        Some(h) => {
            collected.push(h.text.clone());
            (is_list_item_start(&h.text), h.starts_nested_list)
        }
        None => (false, false),
    };

    let mut line = start + 1;

    while line < end {
        let raw = lines[line];

        if is_blank(raw) {
            // Keep the blank only when the description continues past it.
            let next = line + 1;
            if next >= end {
                break;
            }
            let next_raw = lines[next];
            if is_blank(next_raw) {
                break;
            }
            if try_parse_term(next_raw).is_some() {
                break;
            }
            let (next_cols, _) = indent_cols(next_raw, tab);
            if is_description_header(next_raw, min_indent, tab)
                && !(starts_nested_list && next_cols > min_indent)
            {
                break;
            }
            if !empty_header && next_cols < min_indent {
                break;
            }
            collected.push(String::new());
            line += 1;
            continue;
        }

        if try_parse_term(raw).is_some() {
            break;
        }

        let (cols, _) = indent_cols(raw, tab);
        // A marker line back at min_indent is a sibling description; deeper
        // marker lines are content when this description opened a nested
        // list.
        if is_description_header(raw, min_indent, tab)
            && !(starts_nested_list && cols > min_indent)
        {
            break;
        }
        if !empty_header && cols < min_indent {
            break;
        }

        let cut = if empty_header {
            cols.min(min_indent)
        } else {
            min_indent
        };
        let mut out = strip_cols(raw, cut, tab).trim_end().to_string();

        // The marker-and-space prefix on the header line occupies two
        // columns, so a list started on the header reappears here pushed
        // right by two; pull it back so the host does not read a nested
        // list one level deeper than written.
        if header_starts_list && is_two_col_offset_list_item(&out) {
            out = strip_two_cols(&out).to_string();
        }

        collected.push(out);
        line += 1;
    }

    Some(DescriptionBlock {
        text: collected.join("\n"),
        next_line: line,
    })
}
