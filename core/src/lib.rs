pub mod config;
pub mod errors;
pub mod lexer;

pub use config::ScannerConfig;
pub use errors::{LexError, LexFault};
pub use lexer::scanner::Scanner;
pub use lexer::token::{Payload, Span, Token, TokenKind};
pub use lexer::{lex, lex_with};
