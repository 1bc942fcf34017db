//! Token table pane

use crate::parser::{LexError, Token};
use crate::ui::highlight::{kind_counts, summarize_counts, token_style};
use crate::ui::panes::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one row per token, or the lexer error.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &Result<Vec<Token>, LexError>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let (title, lines) = match tokens {
        Ok(tokens) => {
            let summary = summarize_counts(&kind_counts(tokens));
            let title = if summary.is_empty() {
                String::from(" Tokens ")
            } else {
                format!(" Tokens ({}) ", summary)
            };
            (title, tokens.iter().map(token_row).collect::<Vec<_>>())
        }
        Err(e) => (
            String::from(" Tokens "),
            vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            ))],
        ),
    };

    let visible = area.height.saturating_sub(2);
    clamp_scroll(scroll, lines.len(), visible);

    let paragraph = Paragraph::new(lines)
        .block(pane_block(title, is_focused))
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn token_row(token: &Token) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<11}", token.kind.to_string()), token_style(token.kind)),
        Span::styled(
            format!("{:<10}", format!("'{}'", token.text)),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!("{}..{}", token.start, token.end),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])
}
