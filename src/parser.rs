//! The definition-list block rule.
//!
//! A host document parser registers [`DlRule`] at a priority relative to its
//! other block rules (typically just before its paragraph rule) and drives
//! it through the two-phase contract: [`DlRule::probe`] asks, without side
//! effects, whether the rule would claim the current position;
//! [`DlRule::parse`] commits and returns the token sequence.

use crate::config::Config;
use crate::host::BlockHost;
use crate::token::Token;

mod assembler;
mod description;
mod emitter;
mod indent;
mod markers;
mod normalize;
mod term;

pub use emitter::MAX_NESTING;

/// A committed parse: the emitted tokens and the first unconsumed line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBlock {
    pub tokens: Vec<Token>,
    /// Exclusive end of the consumed range; the host resumes here.
    pub end_line: usize,
}

/// The colon-marker definition-list rule.
///
/// Holds only the caller-supplied configuration; every attempt is a pure
/// computation over the given line range.
#[derive(Debug, Clone)]
pub struct DlRule {
    config: Config,
}

impl DlRule {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Silent pre-check over `[start_line, end_line)`.
    ///
    /// Allocates no output tokens and moves no cursor. Returns true exactly
    /// when [`parse`](Self::parse) would match at the same position.
    pub fn probe(&self, lines: &[&str], start_line: usize, end_line: usize) -> bool {
        let end_line = end_line.min(lines.len());
        let matched = assembler::probe(lines, start_line, end_line, &self.config);
        log::debug!("probe at line {start_line}: {matched}");
        matched
    }

    /// Parse a block at `[start_line, end_line)`, emitting tokens through
    /// `host` for block-shaped description bodies.
    ///
    /// `depth` is the current nesting depth; top-level callers pass 0 and
    /// re-entrant hosts pass the depth they were handed. Returns `None` on
    /// no match, in which case the host tries its next block rule here.
    pub fn parse(
        &self,
        lines: &[&str],
        start_line: usize,
        end_line: usize,
        host: &dyn BlockHost,
        depth: usize,
    ) -> Option<ParsedBlock> {
        let end_line = end_line.min(lines.len());
        let block = assembler::assemble(lines, start_line, end_line, &self.config)?;
        log::debug!(
            "parsed block at lines {}..{} with {} items (depth {depth})",
            block.start_line,
            block.end_line,
            block.items.len()
        );
        let tokens = emitter::emit_tokens(&block, &self.config, host, depth);
        Some(ParsedBlock {
            tokens,
            end_line: block.end_line,
        })
    }
}
