use crate::config::Config;
use crate::host::BlockHost;
use crate::parser::{DlRule, ParsedBlock};
use crate::token::{LineSpan, Token, TokenKind};

/// Miniature host engine: re-entrant definition lists, flat bullet lists,
/// and paragraphs. Just enough block vocabulary to exercise description
/// re-parsing.
pub struct TestHost {
    rule: DlRule,
}

impl TestHost {
    pub fn new(config: Config) -> Self {
        Self {
            rule: DlRule::new(config),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }
}

impl BlockHost for TestHost {
    fn parse_blocks(&self, text: &str, depth: usize) -> Vec<Token> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < lines.len() {
            if lines[pos].trim().is_empty() {
                pos += 1;
                continue;
            }
            if self.rule.probe(&lines, pos, lines.len())
                && let Some(parsed) = self.rule.parse(&lines, pos, lines.len(), self, depth)
            {
                tokens.extend(parsed.tokens);
                pos = parsed.end_line;
                continue;
            }
            if is_bullet_line(lines[pos]) {
                pos = parse_bullet_list(&lines, pos, &mut tokens);
                continue;
            }
            pos = parse_paragraph(&lines, pos, &mut tokens);
        }

        tokens
    }
}

fn is_bullet_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();
    indent < 4
        && (trimmed.starts_with("- ") || trimmed.starts_with("* ") || trimmed.starts_with("+ "))
}

fn parse_bullet_list(lines: &[&str], start: usize, tokens: &mut Vec<Token>) -> usize {
    let open_at = tokens.len();
    tokens.push(Token::with_span(
        TokenKind::BulletListOpen,
        LineSpan::line(start),
    ));
    let mut pos = start;
    while pos < lines.len() && is_bullet_line(lines[pos]) {
        let item = &lines[pos].trim_start()[2..];
        tokens.push(Token::with_span(
            TokenKind::ListItemOpen,
            LineSpan::line(pos),
        ));
        tokens.push(Token::inline(item.trim(), LineSpan::line(pos)));
        tokens.push(Token::new(TokenKind::ListItemClose));
        pos += 1;
    }
    tokens[open_at].span = Some(LineSpan::new(start, pos));
    tokens.push(Token::new(TokenKind::BulletListClose));
    pos
}

fn parse_paragraph(lines: &[&str], start: usize, tokens: &mut Vec<Token>) -> usize {
    let mut pos = start;
    let mut content: Vec<&str> = Vec::new();
    while pos < lines.len() {
        let line = lines[pos];
        if line.trim().is_empty() || is_bullet_line(line) {
            break;
        }
        content.push(line.trim());
        pos += 1;
    }
    let span = LineSpan::new(start, pos);
    tokens.push(Token::with_span(TokenKind::ParagraphOpen, span));
    tokens.push(Token::inline(content.join("\n"), span));
    tokens.push(Token::new(TokenKind::ParagraphClose));
    pos
}

pub fn parse_default(input: &str) -> Option<ParsedBlock> {
    let host = TestHost::with_defaults();
    crate::parse(input, &Config::default(), &host)
}

pub fn tokens_default(input: &str) -> Vec<Token> {
    parse_default(input).expect("input should parse").tokens
}

/// All inline payloads, in emission order.
pub fn inline_texts(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Inline(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

pub fn count_kind(tokens: &[Token], want: fn(&TokenKind) -> bool) -> usize {
    tokens.iter().filter(|t| want(&t.kind)).count()
}

/// Every open has a matching close, closes never outrun opens, and the whole
/// sequence is bracketed by one `DlOpen`/`DlClose` pair.
pub fn assert_balanced(tokens: &[Token]) {
    use TokenKind::*;

    assert!(
        matches!(tokens.first().map(|t| &t.kind), Some(DlOpen)),
        "sequence must start with DlOpen"
    );
    assert!(
        matches!(tokens.last().map(|t| &t.kind), Some(DlClose)),
        "sequence must end with DlClose"
    );

    let mut depth = 0i64;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            DlOpen | DtOpen | DdOpen | ParagraphOpen | BulletListOpen | OrderedListOpen
            | ListItemOpen => depth += 1,
            DlClose | DtClose | DdClose | ParagraphClose | BulletListClose | OrderedListClose
            | ListItemClose => {
                depth -= 1;
                assert!(depth >= 0, "close without open at token {i}");
            }
            Inline(_) => {}
        }
        // The outer pair brackets everything else.
        if i + 1 < tokens.len() {
            assert!(depth > 0, "outer pair closed early at token {i}");
        }
    }
    assert_eq!(depth, 0, "unbalanced open/close counts");
}

/// Plain text dump of a token stream, one token per line. No trailing
/// newline, so inline snapshots stay stable.
pub fn dump_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token.span {
            Some(s) => format!("{:?} [{}, {})", token.kind, s.start, s.end),
            None => format!("{:?}", token.kind),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
