use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{NamedSource, Report};
use owo_colors::OwoColorize;
use ruzta::config::DEFAULT_TAB_WIDTH;
use ruzta::lexer::token::{CursorPlace, Token};
use ruzta::{LexError, Scanner, ScannerConfig};
use tracing::debug;

mod logging;

#[derive(Parser)]
#[command(name = "ruzta", version, about = "Print the token stream of a Ruzta source file")]
struct Cli {
    /// Path to a source file to tokenize
    file: Option<PathBuf>,
    /// Tokenize inline source instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Columns a tab character advances
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    tab_width: usize,
    /// Print one JSON object per token
    #[arg(long)]
    json: bool,
    /// Mark tokens touching an editing caret, given as LINE:COL
    #[arg(long, value_parser = parse_caret)]
    caret: Option<(usize, usize)>,
    /// Log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (source, name) = match (&cli.eval, &cli.file) {
        (Some(code), _) => (code.clone(), "<eval>".to_owned()),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(s) => (s, path.display().to_string()),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    path.display().yellow()
                );
                return ExitCode::FAILURE;
            }
        },
        (None, None) => {
            eprintln!("{} expected a file or --eval", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    debug!(source = %name, bytes = source.len(), "loaded source");

    let config = ScannerConfig::with_tab_width(cli.tab_width);
    let mut failed = false;
    for token in Scanner::with_config(&source, config) {
        let token = match cli.caret {
            Some((line, column)) => token.with_caret(line, column),
            None => token,
        };

        if cli.json {
            match serde_json::to_string(&token) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("{} {e}", "error:".red().bold());
                    return ExitCode::FAILURE;
                }
            }
        } else {
            print_token(&token);
        }

        if let Some(error) = LexError::from_token(&token) {
            failed = true;
            let report =
                Report::new(error).with_source_code(NamedSource::new(&name, source.clone()));
            eprintln!("{report:?}");
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_token(token: &Token<'_>) {
    let position = format!("{}:{}", token.span.start_line, token.span.start_column);
    let name = token.debug_name();
    let caret = match token.editor_hint.map(|hint| hint.place) {
        Some(CursorPlace::Before) => " <caret before>",
        Some(CursorPlace::Inside) => " <caret inside>",
        Some(CursorPlace::After) => " <caret after>",
        None => "",
    };
    if token.is_error() {
        println!("{:>7} {}{}", position.bright_black(), name.red().bold(), caret.cyan());
    } else {
        println!("{:>7} {}{}", position.bright_black(), name, caret.cyan());
    }
}

fn parse_caret(value: &str) -> Result<(usize, usize), String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{value}'"))?;
    let line = line
        .parse()
        .map_err(|e| format!("invalid line '{line}': {e}"))?;
    let column = column
        .parse()
        .map_err(|e| format!("invalid column '{column}': {e}"))?;
    Ok((line, column))
}
