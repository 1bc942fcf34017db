//! Token-driven syntax highlighting
//!
//! Styles the expression from the lexer's token ranges rather than from a
//! separate character scanner. Gaps between tokens are the skipped
//! whitespace. When the input does not lex, the whole line falls back to the
//! error style so a half-typed expression never breaks the display.

use crate::parser::{LexError, Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use rustc_hash::FxHashMap;

/// Display order of token kinds in summaries
const KIND_ORDER: [TokenKind; 3] = [TokenKind::Identifier, TokenKind::Operator, TokenKind::Number];

pub fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.identifier),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Operator => Style::default()
            .fg(DEFAULT_THEME.operator)
            .add_modifier(Modifier::BOLD),
    }
}

fn error_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.error)
        .add_modifier(Modifier::UNDERLINED)
}

/// Build a highlighted line for `source` from its lexing result.
pub fn highlight_expression<'a>(source: &'a str, tokens: &Result<Vec<Token>, LexError>) -> Line<'a> {
    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(_) => return Line::from(Span::styled(source, error_style())),
    };

    let mut spans = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut position = 0;

    for token in tokens {
        if token.start > position {
            spans.push(Span::raw(&source[position..token.start]));
        }
        spans.push(Span::styled(&source[token.start..=token.end], token_style(token.kind)));
        position = token.end + 1;
    }

    if position < source.len() {
        spans.push(Span::raw(&source[position..]));
    }

    Line::from(spans)
}

/// Count tokens per kind.
pub fn kind_counts(tokens: &[Token]) -> FxHashMap<TokenKind, usize> {
    let mut counts = FxHashMap::default();
    for token in tokens {
        *counts.entry(token.kind).or_insert(0) += 1;
    }
    counts
}

/// Render counts as `2 Identifier, 3 Operator`, skipping absent kinds.
pub fn summarize_counts(counts: &FxHashMap<TokenKind, usize>) -> String {
    KIND_ORDER
        .iter()
        .filter_map(|kind| counts.get(kind).map(|count| format!("{} {}", count, kind)))
        .collect::<Vec<_>>()
        .join(", ")
}
