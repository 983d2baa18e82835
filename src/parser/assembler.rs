//! Item assembly: drives the term and description readers over a line range
//! and enforces the boundary policy.

use crate::config::Config;

use super::description::read_description_block;
use super::markers::{is_blank, is_description_header, try_parse_term};
use super::term::{TermBlock, read_term_block};

/// One definition entry attached to a term.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DescriptionEntry {
    pub line: usize,
    pub text: String,
}

/// One item: a term plus its descriptions, in source order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DlItem {
    pub term_line: usize,
    pub term_text: String,
    pub descriptions: Vec<DescriptionEntry>,
}

/// An assembled block over `[start_line, end_line)`. `items` is non-empty by
/// construction; an attempt yielding zero items is a no-match instead.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DlBlock {
    pub start_line: usize,
    pub end_line: usize,
    pub items: Vec<DlItem>,
}

/// Silent pre-check: would full assembly claim the position at `start`?
///
/// Reads one term block and answers whether a description follows at the
/// same level, or the term-only boundary condition holds. Allocates no
/// output tokens and moves no cursor, so a container-aware host can ask
/// before trying other block rules.
pub(crate) fn probe(lines: &[&str], start: usize, end: usize, config: &Config) -> bool {
    let Some(first) = read_term_block(lines, start, end, config) else {
        return false;
    };
    let has_description = description_follows(lines, &first, end, config);
    let term_only_ok = !has_description
        && (at_term_only_boundary(lines, first.next_line, end)
            || next_line_is_term(lines, first.next_line, end));
    if config.require_description && !has_description && !term_only_ok {
        return false;
    }
    true
}

/// Assemble items starting at `start`. Returns `None` when no item could be
/// collected ("no match": the caller tries its next block rule here).
pub(crate) fn assemble(
    lines: &[&str],
    start: usize,
    end: usize,
    config: &Config,
) -> Option<DlBlock> {
    let mut items = Vec::new();
    let mut line = start;

    while line < end {
        let Some(term) = read_term_block(lines, line, end, config) else {
            break;
        };
        let (descriptions, after_descriptions) =
            collect_descriptions(lines, &term, end, config);

        if descriptions.is_empty() {
            let after_term = term.next_line;
            let at_boundary = at_term_only_boundary(lines, after_term, end);
            let followed_by_term = next_line_is_term(lines, after_term, end);

            // Consecutive term lines stay siblings in the same run:
            //   : Apple
            //   : Grapes
            //       : purple...
            // "Apple" has no description but still belongs to the list.
            if config.require_description && !at_boundary && !followed_by_term {
                break;
            }

            log::debug!("term-only item at line {}: {:?}", line, term.text);
            items.push(DlItem {
                term_line: line,
                term_text: term.text,
                descriptions: Vec::new(),
            });
            line = after_term;
            if followed_by_term {
                continue;
            }
            // A trailing term-only item closes the block at its boundary.
            break;
        }

        log::debug!(
            "item at line {}: {:?} ({} descriptions)",
            line,
            term.text,
            descriptions.len()
        );
        items.push(DlItem {
            term_line: line,
            term_text: term.text,
            descriptions,
        });
        line = after_descriptions;

        if line < end && is_blank(lines[line]) {
            if config.break_on_blank_line {
                break;
            }
            // Keep going only when another term follows the blank run; the
            // blanks become interior to the block.
            let mut peek = line;
            while peek < end && is_blank(lines[peek]) {
                peek += 1;
            }
            if peek < end && try_parse_term(lines[peek]).is_some() {
                line = peek;
                continue;
            }
            break;
        }
    }

    if items.is_empty() {
        return None;
    }
    Some(DlBlock {
        start_line: start,
        end_line: line,
        items,
    })
}

fn collect_descriptions(
    lines: &[&str],
    term: &TermBlock,
    end: usize,
    config: &Config,
) -> (Vec<DescriptionEntry>, usize) {
    let mut descriptions = Vec::new();
    let mut next = term.next_line;

    while next < end {
        if is_blank(lines[next]) {
            break;
        }
        let Some(block) = read_description_block(lines, next, end, term.base_indent, config)
        else {
            break;
        };
        descriptions.push(DescriptionEntry {
            line: next,
            text: block.text,
        });
        next = block.next_line;
    }

    (descriptions, next)
}

/// Does a description header (possibly empty) immediately follow the term at
/// its level?
fn description_follows(lines: &[&str], term: &TermBlock, end: usize, config: &Config) -> bool {
    if term.next_line >= end {
        return false;
    }
    let min_indent = term.base_indent + config.description_indent;
    is_description_header(lines[term.next_line], min_indent, config.description_indent)
}

fn at_term_only_boundary(lines: &[&str], line: usize, end: usize) -> bool {
    line >= end || is_blank(lines[line])
}

fn next_line_is_term(lines: &[&str], line: usize, end: usize) -> bool {
    line < end && !is_blank(lines[line]) && try_parse_term(lines[line]).is_some()
}
