mod lex_error;
mod lex_fault;

pub use lex_error::LexError;
pub use lex_fault::LexFault;
