use miette::Diagnostic;
use thiserror::Error;

use super::LexFault;
use crate::lexer::token::{Payload, Token};

#[derive(Debug, Error, Diagnostic)]
#[error("SyntaxError: {fault}")]
pub struct LexError {
    pub fault: LexFault,

    #[label("here")]
    pub span: miette::SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl LexError {
    pub fn new(fault: LexFault, offset: usize, length: usize) -> Self {
        let help = Some(fault.help().to_owned());
        Self {
            fault,
            span: (offset, length).into(),
            help,
        }
    }

    /// Build a diagnostic from an `Error` token. Returns `None` for any other token.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        match &token.payload {
            Payload::Error(fault) => Some(Self::new(
                fault.clone(),
                token.span.start,
                token.span.len().max(1),
            )),
            _ => None,
        }
    }
}
