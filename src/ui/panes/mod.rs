//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: The expression being edited, highlighted from its tokens
//! - [`tokens`]: Token table with kinds, lexemes and byte ranges
//! - [`tree`]: The syntax tree as nested JSON records, or the parse error
//! - [`status`]: Status bar with keybindings and parse state
//!
//! Each pane module exports a primary `render_*` function. Panes are
//! stateless apart from the scroll offset they are handed.

pub mod input;
pub mod status;
pub mod tokens;
pub mod tree;

pub use input::render_input_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border color tracks focus
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Clamp a scroll offset so the last line stays reachable.
pub(crate) fn clamp_scroll(scroll: &mut usize, line_count: usize, visible: u16) {
    let max = line_count.saturating_sub(visible as usize);
    if *scroll > max {
        *scroll = max;
    }
}
