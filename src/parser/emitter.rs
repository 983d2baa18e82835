//! Token emission for assembled blocks.

use crate::config::Config;
use crate::host::BlockHost;
use crate::token::{LineSpan, Token, TokenKind};

use super::assembler::DlBlock;
use super::normalize::{dedent, looks_like_nested_dl, renormalize_nested};

/// Ceiling on nested definition-list depth. Bodies below the ceiling are
/// handed to the host for re-parsing; at the ceiling the remainder is kept
/// as one opaque inline description instead of recursing further.
pub const MAX_NESTING: usize = 32;

fn needs_block_parse(text: &str) -> bool {
    looks_like_nested_dl(text) || text.contains('\n')
}

/// Emit the balanced token sequence for an assembled block.
///
/// `depth` is the nesting depth of this block; description bodies are
/// re-parsed at `depth + 1`.
pub(crate) fn emit_tokens(
    block: &DlBlock,
    config: &Config,
    host: &dyn BlockHost,
    depth: usize,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    tokens.push(Token::with_span(
        TokenKind::DlOpen,
        LineSpan::new(block.start_line, block.end_line),
    ));

    for item in &block.items {
        tokens.push(Token::with_span(
            TokenKind::DtOpen,
            LineSpan::line(item.term_line),
        ));
        tokens.push(Token::inline(
            item.term_text.clone(),
            LineSpan::line(item.term_line),
        ));
        tokens.push(Token::new(TokenKind::DtClose));

        for description in &item.descriptions {
            tokens.push(Token::with_span(
                TokenKind::DdOpen,
                LineSpan::line(description.line),
            ));
            if needs_block_parse(&description.text) {
                emit_description_body(
                    &mut tokens,
                    &description.text,
                    description.line,
                    config,
                    host,
                    depth,
                );
            } else {
                tokens.push(Token::inline(
                    description.text.clone(),
                    LineSpan::line(description.line),
                ));
            }
            tokens.push(Token::new(TokenKind::DdClose));
        }
    }

    tokens.push(Token::new(TokenKind::DlClose));
    tokens
}

/// Normalize a block-shaped description body, re-parse it through the host,
/// shift the returned spans into document coordinates, and unwrap a bare
/// single paragraph so trivial descriptions stay inline.
fn emit_description_body(
    tokens: &mut Vec<Token>,
    text: &str,
    line: usize,
    config: &Config,
    host: &dyn BlockHost,
    depth: usize,
) {
    if depth + 1 > MAX_NESTING {
        log::debug!("nesting ceiling reached at line {line}, keeping body opaque");
        tokens.push(Token::inline(text.to_string(), LineSpan::line(line)));
        return;
    }

    let body = if looks_like_nested_dl(text) {
        renormalize_nested(text)
    } else {
        text.to_string()
    };
    let normalized = dedent(&body, config.description_indent);

    let mut added = host.parse_blocks(&normalized, depth + 1);
    for token in &mut added {
        if let Some(span) = &mut token.span {
            *span = span.shifted(line);
        }
    }

    if added.len() == 3
        && added[0].kind == TokenKind::ParagraphOpen
        && matches!(added[1].kind, TokenKind::Inline(_))
        && added[2].kind == TokenKind::ParagraphClose
    {
        let paragraph_span = added[0].span;
        let mut inline = added.swap_remove(1);
        if inline.span.is_none() {
            inline.span = paragraph_span;
        }
        tokens.push(inline);
        return;
    }

    tokens.extend(added);
}
