//! Expression input pane with token-driven highlighting

use crate::parser::{LexError, Token};
use crate::ui::highlight::highlight_expression;
use crate::ui::panes::pane_block;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the input line and place the terminal cursor at `cursor` (in chars).
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    cursor: usize,
    tokens: &Result<Vec<Token>, LexError>,
) {
    let block = pane_block(String::from(" Expression "), true);
    let inner = block.inner(area);

    // Keep the cursor visible on long input
    let width = inner.width.max(1) as usize;
    let horizontal_scroll = cursor.saturating_sub(width - 1);

    let paragraph = Paragraph::new(highlight_expression(input, tokens))
        .block(block)
        .scroll((0, horizontal_scroll as u16));
    frame.render_widget(paragraph, area);

    let x = inner.x + (cursor - horizontal_scroll) as u16;
    frame.set_cursor_position((x, inner.y));
}
