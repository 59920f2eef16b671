use super::cursor::Position;
use super::scanner::Scanner;
use super::token::{Payload, Span, Token, TokenKind};
use crate::errors::LexFault;

/// A fault found while skipping trivia, with where it began.
pub(super) struct TriviaFault {
    pub fault: LexFault,
    pub start: Position,
}

impl TriviaFault {
    fn new(fault: LexFault, start: Position) -> Self {
        Self { fault, start }
    }
}

impl Scanner<'_> {
    /// Skip whitespace and comments up to the next lexeme.
    ///
    /// Stops at the first fault so the caller can queue it.
    pub(super) fn skip_trivia(&mut self) -> Result<(), TriviaFault> {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\t') => {
                    self.cursor.advance();
                }
                Some('\r') => self.skip_carriage_return()?,
                Some('\n') => {
                    let at = self.cursor.position();
                    self.cursor.advance();
                    self.line_break(at);
                }
                Some('#') => self.skip_line_comment(),
                Some('/') if self.cursor.peek_next() == Some('/') => self.skip_line_comment(),
                Some('/') if self.cursor.peek_next() == Some('*') => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// A carriage return is only valid as the first half of `\r\n`.
    fn skip_carriage_return(&mut self) -> Result<(), TriviaFault> {
        let at = self.cursor.position();
        self.cursor.advance();
        if !self.cursor.match_char('\n') {
            return Err(TriviaFault::new(LexFault::StrayCarriageReturn, at));
        }
        self.line_break(at);
        Ok(())
    }

    /// Leaves the line break itself for the trivia loop.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n' && c != '\r');
    }

    fn skip_block_comment(&mut self) -> Result<(), TriviaFault> {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();
        loop {
            match self.cursor.peek() {
                None => return Err(TriviaFault::new(LexFault::UnterminatedBlockComment, start)),
                Some('\r') => self.skip_carriage_return()?,
                Some('\n') => {
                    let at = self.cursor.position();
                    self.cursor.advance();
                    self.line_break(at);
                }
                Some('*') if self.cursor.peek_next() == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(());
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Called after consuming a line break that began at `at`. Only the first
    /// break in a run produces a `Newline` token.
    fn line_break(&mut self, at: Position) {
        if self.pending_newline.is_none() {
            let end = self.cursor.position();
            self.pending_newline = Some(Token::new(
                TokenKind::Newline,
                Payload::None,
                Span::new(at, end),
                self.cursor.slice_from(at.offset),
            ));
        }
        self.cursor.newline();
    }
}
