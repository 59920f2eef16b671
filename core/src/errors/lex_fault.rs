use serde::Serialize;
use thiserror::Error;

/// A recoverable lexical fault. Each one surfaces as a single `Error` token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "fault", rename_all = "snake_case")]
pub enum LexFault {
    // Trivia
    #[error("Stray carriage return character in source code.")]
    StrayCarriageReturn,
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment,

    // Delimiters
    #[error("Closing \"{closer}\" doesn't have an opening counterpart.")]
    UnmatchedCloser { closer: char },
    #[error("Closing \"{closer}\" doesn't match the opening \"{opener}\", expected \"{expected}\".")]
    MismatchedCloser {
        closer: char,
        opener: char,
        expected: char,
    },

    // Literals
    #[error("Expected digits after base prefix.")]
    MissingRadixDigits,
    #[error("Expected exponent digits after 'e'.")]
    MissingExponentDigits,
    #[error("Invalid numeric literal.")]
    InvalidNumber,
    #[error("Unterminated string")]
    UnterminatedString,

    // Characters
    #[error("Invalid character \"{ch}\"")]
    InvalidCharacter { ch: char },
    #[error("Expected annotation identifier after \"@\".")]
    MissingAnnotationName,
}

impl LexFault {
    /// Short hint shown under rendered diagnostics.
    pub fn help(&self) -> &'static str {
        match self {
            LexFault::StrayCarriageReturn => "use \\n or \\r\\n line endings",
            LexFault::UnterminatedBlockComment => "close the comment with */",
            LexFault::UnmatchedCloser { .. } | LexFault::MismatchedCloser { .. } => {
                "check the nesting of brackets, braces and parentheses"
            }
            LexFault::MissingRadixDigits => "add digits after 0x, 0b or 0o",
            LexFault::MissingExponentDigits => "add digits after the exponent marker",
            LexFault::InvalidNumber => "the literal does not fit in a 64-bit number",
            LexFault::UnterminatedString => "add the closing quote",
            LexFault::InvalidCharacter { .. } => "remove the character or quote it in a string",
            LexFault::MissingAnnotationName => "annotations are written as @name",
        }
    }
}
