//! Flat token events for definition-list blocks.
//!
//! The rule communicates with its host through an ordered sequence of
//! open/close/inline events rather than a tree. Every `*Open` is balanced by
//! exactly one matching `*Close`, and a whole block is bracketed by a single
//! `DlOpen`/`DlClose` pair.

/// A `[start, end)` line range into the source buffer the rule was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single line.
    pub fn line(line: usize) -> Self {
        Self {
            start: line,
            end: line + 1,
        }
    }

    /// The same span moved down by `offset` lines. Used when tokens produced
    /// for an extracted description body are spliced back into the document.
    pub fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// Token vocabulary shared between this rule and a host's block rules.
///
/// `Dl`/`Dt`/`Dd` carry the historical element names (definition list, term,
/// description). The paragraph and list kinds exist because description
/// bodies are re-parsed as generic block content: the emitter must at least
/// recognize a bare single paragraph to unwrap it, and a host needs a
/// vocabulary to append into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    DlOpen,
    DlClose,
    DtOpen,
    DtClose,
    DdOpen,
    DdClose,
    ParagraphOpen,
    ParagraphClose,
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    /// Unparsed inline content. Embedded newlines are hard line breaks, not
    /// paragraph breaks; inline-span parsing happens downstream.
    Inline(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Option<LineSpan>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, span: None }
    }

    pub fn with_span(kind: TokenKind, span: LineSpan) -> Self {
        Self {
            kind,
            span: Some(span),
        }
    }

    pub fn inline(text: impl Into<String>, span: LineSpan) -> Self {
        Self::with_span(TokenKind::Inline(text.into()), span)
    }
}
