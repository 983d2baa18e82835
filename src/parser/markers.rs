//! Line classification for the definition-list rule.
//!
//! A line is at most one of: term header, description header (plain,
//! doubled-marker shorthand, or empty), blank, or plain content. Callers
//! check in that order.

use super::indent::indent_cols;

/// A recognized term line (`: text`, at most 3 spaces of indentation).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TermHeader<'a> {
    pub text: &'a str,
    /// Raw space count before the marker, 0..=3. Tabs are not permitted
    /// before a term marker.
    pub base_indent: usize,
}

/// A recognized description header at a given indentation level.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DescriptionHeader {
    pub text: String,
    /// True when the body opens a nested definition list, i.e. the text
    /// itself starts with a marker (`: : inner`, or `:: inner` rewritten).
    pub starts_nested_list: bool,
}

/// Match `0-3 spaces, ':', at least one space/tab, non-empty text`.
///
/// Four or more columns of indentation would be indistinguishable from an
/// indented code block, so the term never matches there.
pub(crate) fn try_parse_term(line: &str) -> Option<TermHeader<'_>> {
    let base_indent = line.bytes().take_while(|&b| b == b' ').count();
    if base_indent > 3 {
        return None;
    }
    let rest = line[base_indent..].strip_prefix(':')?;
    if !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(TermHeader { text, base_indent })
}

/// Match a description header whose indentation falls in
/// `[min_indent, min_indent + 3]` columns.
///
/// Two forms match: `: text` (plain) and `:: text` (nested-list shorthand).
/// The shorthand is rewritten here to a plain header whose text is the
/// term-shaped line `: text`, so nested-list detection downstream triggers
/// uniformly for both spellings.
pub(crate) fn try_parse_description_header(
    line: &str,
    min_indent: usize,
    tab_width: usize,
) -> Option<DescriptionHeader> {
    let (cols, idx) = indent_cols(line, tab_width);
    if cols < min_indent || cols > min_indent + 3 {
        return None;
    }
    let rest = line[idx..].strip_prefix(':')?;
    let (rest, shorthand) = match rest.strip_prefix(':') {
        Some(r) => (r, true),
        None => (rest, false),
    };
    if !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }
    let payload = rest.trim();
    if payload.is_empty() {
        return None;
    }
    let text = if shorthand {
        format!(": {payload}")
    } else {
        payload.to_string()
    };
    let starts_nested_list = text.trim_start().starts_with(':');
    Some(DescriptionHeader {
        text,
        starts_nested_list,
    })
}

/// Match a bare description marker (`:` or `::`) with nothing but trailing
/// whitespace, at `[min_indent, min_indent + 3]` columns.
pub(crate) fn is_empty_description_header(line: &str, min_indent: usize, tab_width: usize) -> bool {
    let (cols, idx) = indent_cols(line, tab_width);
    if cols < min_indent || cols > min_indent + 3 {
        return false;
    }
    let Some(rest) = line[idx..].strip_prefix(':') else {
        return false;
    };
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    rest.trim().is_empty()
}

/// Either form of description header at the given level.
pub(crate) fn is_description_header(line: &str, min_indent: usize, tab_width: usize) -> bool {
    try_parse_description_header(line, min_indent, tab_width).is_some()
        || is_empty_description_header(line, min_indent, tab_width)
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// True when `text` starts a bullet (`- `, `* `, `+ `) or ordered
/// (`1. `, `2) `, up to nine digits) list item at column zero.
pub(crate) fn is_list_item_start(text: &str) -> bool {
    if text.starts_with("- ") || text.starts_with("* ") || text.starts_with("+ ") {
        return true;
    }
    let digits = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || digits > 9 {
        return false;
    }
    let Some(rest) = text[digits..].strip_prefix(['.', ')']) else {
        return false;
    };
    rest.starts_with([' ', '\t'])
}

/// True when `text` is a list item pushed right by exactly two spaces, the
/// shape produced when a marker-and-space prefix was stripped one line up.
pub(crate) fn is_two_col_offset_list_item(text: &str) -> bool {
    match text.strip_prefix("  ") {
        Some(rest) => is_list_item_start(rest),
        None => false,
    }
}

pub(crate) fn strip_two_cols(text: &str) -> &str {
    text.strip_prefix("  ").unwrap_or(text)
}
