// exprtty: Arithmetic Expression Parser with a Live Token and Syntax Tree Viewer

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use exprtty::parser::{self, Lexer};
use exprtty::ui::App;

/// Expression shown when the playground starts without one
const DEFAULT_EXPRESSION: &str = "x = 40 + (6 / 3.0)";

/// What to do with the expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Interactive,
    Tokens,
    Ast,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens | --ast] [EXPRESSION...]", program_name);
    eprintln!();
    eprintln!("Without a flag, opens the interactive playground.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} \"x = 40 + (6 / 3.0)\"      # Edit an expression live", program_name);
    eprintln!("  {} --tokens \"foo(1, 2e3)\"    # Print the token stream", program_name);
    eprintln!("  {} --ast \"1 - 2 - 3\"         # Print the syntax tree as JSON", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("exprtty");

    let mut mode = Mode::Interactive;
    let mut words = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            "--tokens" => mode = Mode::Tokens,
            "--ast" => mode = Mode::Ast,
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                process::exit(1);
            }
            word => words.push(word),
        }
    }

    let expression = if words.is_empty() {
        if mode != Mode::Interactive {
            eprintln!("Error: No expression provided");
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
        DEFAULT_EXPRESSION.to_string()
    } else {
        words.join(" ")
    };

    match mode {
        Mode::Tokens => print_tokens(&expression),
        Mode::Ast => print_ast(&expression),
        Mode::Interactive => run_playground(expression),
    }
}

fn print_tokens(expression: &str) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Tokenizing expression...");
    let tokens = match Lexer::tokenize(expression) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    for token in &tokens {
        println!(
            "{:<11}{:<12}{}..{}",
            token.kind.to_string(),
            format!("'{}'", token.text),
            token.start,
            token.end
        );
    }
    eprintln!("Found {} token(s).", tokens.len());
    Ok(())
}

fn print_ast(expression: &str) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Parsing expression...");
    let program = match parser::parse(expression) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", program.to_json_pretty()?);
    Ok(())
}

fn run_playground(expression: String) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(expression);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
