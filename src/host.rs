//! Integration seam to the host document parser.

use crate::token::Token;

/// Block-content parser owned by the host document engine.
///
/// Description bodies that contain more than a single inline line are handed
/// to the host for generic block parsing (paragraphs, lists, nested
/// definition lists, whatever the host supports). The returned tokens carry
/// line spans relative to `text`; the emitter shifts them into document
/// coordinates afterwards.
///
/// `depth` is the nesting depth of the body being parsed. A host that
/// re-enters [`DlRule::parse`](crate::DlRule::parse) for nested definition
/// lists must pass it through unchanged, so the recursion ceiling holds
/// across the host boundary.
pub trait BlockHost {
    fn parse_blocks(&self, text: &str, depth: usize) -> Vec<Token>;
}
