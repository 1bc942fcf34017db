//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! A live playground for the expression parser. The UI is organized into
//! four layers:
//!
//! - **[`app`]**: application state, line editing, keyboard event loop, pane focus
//! - **[`highlight`]**: styling of the input from its token ranges
//! - **[`panes`]**: stateless render functions for each visible pane (input,
//!   tokens, syntax tree, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the initial
//! expression and call [`App::run`] to start the event loop. Every edit
//! relexes and reparses the whole line; errors are shown, never propagated.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod highlight;
pub mod panes;
pub mod theme;

pub use app::App;
