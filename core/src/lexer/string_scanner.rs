use super::scanner::Scanner;
use super::token::{Payload, Token, TokenKind};
use crate::errors::LexFault;

impl<'src> Scanner<'src> {
    /// Raw and sigil-prefixed strings: the prefix is consumed and the
    /// cursor sits on the opening quote.
    pub(super) fn scan_quoted(&mut self) -> Token<'src> {
        match self.cursor.advance() {
            Some(quote) => self.scan_string(quote),
            None => self.make_error(LexFault::UnterminatedString),
        }
    }

    /// The opening `quote` is already consumed.
    pub(super) fn scan_string(&mut self, quote: char) -> Token<'src> {
        let mut value = String::new();
        loop {
            match self.cursor.advance() {
                Some(c) if c == quote => break,
                Some('\\') => match self.cursor.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('\\') => value.push('\\'),
                    Some('"') => value.push('"'),
                    Some(c) => {
                        if c == '\n' {
                            self.cursor.newline();
                        }
                        value.push(c);
                    }
                    None => return self.make_error(LexFault::UnterminatedString),
                },
                Some('\n') => {
                    self.cursor.newline();
                    value.push('\n');
                }
                Some(c) => value.push(c),
                None => return self.make_error(LexFault::UnterminatedString),
            }
        }
        self.make_token(TokenKind::Literal, Payload::Str(value))
    }
}
