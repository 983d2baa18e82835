//! A colon-marker definition-list block rule for Markdown token streams.
//!
//! Recognizes the `: term` / indented `: description` syntax and emits a
//! balanced open/close/inline token sequence for a downstream renderer:
//!
//! ```text
//! : term
//!     : description
//!     : another description
//! ```
//!
//! Descriptions may span multiple lines, hold generic block content, or open
//! nested definition lists — explicitly (`: : inner`) or via the doubled
//! marker shorthand (`:: inner`). The rule is host-agnostic: it parses a
//! read-only line range under the two-phase probe/parse contract and
//! delegates block-shaped description bodies to a caller-supplied
//! [`BlockHost`], so it can run inside blockquotes or any other container a
//! host supports.

pub mod config;
pub mod host;
pub mod parser;
pub mod token;

pub use config::{Config, ConfigBuilder};
pub use host::BlockHost;
pub use parser::{DlRule, MAX_NESTING, ParsedBlock};
pub use token::{LineSpan, Token, TokenKind};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Probe a standalone snippet: would [`parse`] match at its first line?
pub fn probe(input: &str, config: &Config) -> bool {
    let lines: Vec<&str> = input.lines().collect();
    DlRule::new(config.clone()).probe(&lines, 0, lines.len())
}

/// Parse a standalone snippet starting at its first line.
///
/// Convenience over [`DlRule::parse`] for callers without a surrounding
/// document; returns `None` when the snippet does not start a definition
/// list.
pub fn parse(input: &str, config: &Config, host: &dyn BlockHost) -> Option<ParsedBlock> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let lines: Vec<&str> = input.lines().collect();
    DlRule::new(config.clone()).parse(&lines, 0, lines.len(), host, 0)
}
