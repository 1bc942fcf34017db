//! Syntax tree pane

use crate::parser::{Program, SyntaxError};
use crate::ui::panes::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the program as pretty JSON, or the error that prevented parsing.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Result<Program, SyntaxError>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let (text, style) = match program.as_ref().map(Program::to_json_pretty) {
        Ok(Ok(json)) => (json, Style::default().fg(DEFAULT_THEME.fg)),
        Ok(Err(e)) => (e.to_string(), Style::default().fg(DEFAULT_THEME.error)),
        Err(e) => (e.to_string(), Style::default().fg(DEFAULT_THEME.error)),
    };

    let lines: Vec<Line> = text.lines().map(|l| Line::styled(l.to_string(), style)).collect();

    let visible = area.height.saturating_sub(2);
    clamp_scroll(scroll, lines.len(), visible);

    let paragraph = Paragraph::new(lines)
        .block(pane_block(String::from(" Syntax Tree "), is_focused))
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
