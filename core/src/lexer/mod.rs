pub mod cursor;
mod delimiters;
pub mod keywords;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;
mod trivia;

use crate::config::ScannerConfig;
use scanner::Scanner;
use token::Token;

/// Tokenize source code into a list of tokens ending with `Eof`.
///
/// Lexical faults appear in the list as `Error` tokens.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

pub fn lex_with(source: &str, config: ScannerConfig) -> Vec<Token<'_>> {
    Scanner::with_config(source, config).collect()
}
