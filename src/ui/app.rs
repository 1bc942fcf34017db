//! Main TUI application state and logic

use crate::parser::{LexError, Lexer, Parser, Program, SyntaxError, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane receives scroll keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Tree,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }
}

/// Lexer and parser output for the current input
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Result<Vec<Token>, LexError>,
    pub program: Result<Program, SyntaxError>,
}

impl Analysis {
    /// Lex and parse `source`, reusing the given lexer and parser.
    pub fn run(lexer: &mut Lexer, parser: &mut Parser, source: &str) -> Self {
        lexer.reset(source);
        Analysis {
            tokens: lexer.remaining_tokens(),
            program: parser.parse(source),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.tokens.is_ok() && self.program.is_ok()
    }
}

/// The main application state
pub struct App {
    /// The expression being edited
    pub input: String,

    /// Cursor position in characters
    pub cursor: usize,

    pub analysis: Analysis,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    lexer: Lexer,
    parser: Parser,
}

impl App {
    /// Create a new app editing `input`, with the cursor at its end
    pub fn new(input: String) -> Self {
        let mut lexer = Lexer::default();
        let mut parser = Parser::new();
        let analysis = Analysis::run(&mut lexer, &mut parser, &input);

        let mut app = App {
            cursor: input.chars().count(),
            input,
            analysis,
            focused_pane: FocusedPane::Tokens,
            tokens_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
            status_message: String::new(),
            lexer,
            parser,
        };
        app.update_status();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input on top, then tokens | tree, plus status bar at bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        super::panes::render_input_pane(
            frame,
            rows[0],
            &self.input,
            self.cursor,
            &self.analysis.tokens,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[0],
            &self.analysis.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            columns[1],
            &self.analysis.program,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[2],
            &self.status_message,
            self.analysis.is_ok(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
                let at = self.byte_index(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
                self.reanalyze();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                    self.reanalyze();
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                    self.reanalyze();
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tokens => self.tokens_scroll = self.tokens_scroll.saturating_sub(1),
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tokens => self.tokens_scroll = self.tokens_scroll.saturating_add(1),
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_add(1),
            },
            _ => {}
        }
    }

    /// Byte offset of the `chars`-th character of the input
    fn byte_index(&self, chars: usize) -> usize {
        self.input
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Relex and reparse after an edit
    fn reanalyze(&mut self) {
        self.analysis = Analysis::run(&mut self.lexer, &mut self.parser, &self.input);
        self.update_status();
    }

    fn update_status(&mut self) {
        self.status_message = match (&self.analysis.tokens, &self.analysis.program) {
            (Ok(tokens), Ok(_)) => format!("Parsed {} token(s)", tokens.len()),
            (_, Err(e)) => e.to_string(),
            (Err(e), Ok(_)) => e.to_string(),
        };
    }
}
