use tracing::{debug, trace};

use super::cursor::{Cursor, Position};
use super::delimiters::DelimiterStack;
use super::number_ident_scanner::is_ident_start;
use super::token::{Payload, Span, Token, TokenKind};
use crate::config::ScannerConfig;
use crate::errors::LexFault;

/// Turns source text into tokens, one per call to [`Scanner::next_token`].
///
/// Lexical faults never stop the scanner: each one becomes an `Error` token
/// and scanning resumes right after it.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
    /// Where the token being scanned began.
    pub(super) start: Position,
    /// Newline found while skipping trivia, not yet handed out.
    pub(super) pending_newline: Option<Token<'src>>,
    last_kind: Option<TokenKind>,
    delimiters: DelimiterStack,
    /// Error tokens awaiting delivery, most recent first out.
    errors: Vec<Token<'src>>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(source: &'src str, config: ScannerConfig) -> Self {
        let cursor = Cursor::new(source, config.tab_width);
        let start = cursor.position();
        Self {
            cursor,
            start,
            pending_newline: None,
            last_kind: None,
            delimiters: DelimiterStack::default(),
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Produce the next token. Once the input is exhausted every call
    /// returns an `Eof` token.
    pub fn next_token(&mut self) -> Token<'src> {
        let token = self.scan();
        trace!(
            kind = %token.kind,
            line = token.span.start_line,
            column = token.span.start_column,
            "token"
        );
        self.last_kind = Some(token.kind);
        token
    }

    /// Number of brackets currently open.
    pub fn open_delimiters(&self) -> usize {
        self.delimiters.depth()
    }

    fn scan(&mut self) -> Token<'src> {
        loop {
            if let Some(error) = self.errors.pop() {
                return error;
            }

            if let Err(fault) = self.skip_trivia() {
                let token =
                    self.token_from(fault.start, TokenKind::Error, Payload::Error(fault.fault));
                self.queue_error(token);
            }

            if let Some(newline) = self.pending_newline.take() {
                return newline;
            }
            if let Some(error) = self.errors.pop() {
                return error;
            }

            self.start = self.cursor.position();
            let Some(c) = self.cursor.advance() else {
                return self.make_token(TokenKind::Eof, Payload::None);
            };

            if let Some(token) = self.scan_lexeme(c) {
                return token;
            }
        }
    }

    /// Dispatch on the first character of a lexeme. Returns `None` when the
    /// character was whitespace that the trivia skipper does not handle.
    fn scan_lexeme(&mut self, c: char) -> Option<Token<'src>> {
        if c.is_ascii_digit() {
            return Some(self.scan_number(c));
        }
        if c == 'r' && matches!(self.cursor.peek(), Some('"' | '\'')) {
            return Some(self.scan_quoted());
        }
        if is_ident_start(c) {
            return Some(self.scan_identifier());
        }

        let token = match c {
            '"' | '\'' => self.scan_string(c),
            '@' => self.scan_annotation(),
            '~' => self.single(TokenKind::Tilde),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            '$' => self.single(TokenKind::Dollar),
            '?' => self.single(TokenKind::QuestionMark),
            '`' => self.single(TokenKind::Backtick),

            '(' => self.open_delimiter(c, TokenKind::ParenthesisOpen),
            '[' => self.open_delimiter(c, TokenKind::BracketOpen),
            '{' => self.open_delimiter(c, TokenKind::BraceOpen),
            ')' => self.close_delimiter(c, TokenKind::ParenthesisClose),
            ']' => self.close_delimiter(c, TokenKind::BracketClose),
            '}' => self.close_delimiter(c, TokenKind::BraceClose),

            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '.' => {
                if self.cursor.match_char('.') {
                    self.either('.', TokenKind::PeriodPeriodPeriod, TokenKind::PeriodPeriod)
                } else if self.next_is_digit() {
                    self.scan_number(c)
                } else {
                    self.single(TokenKind::Period)
                }
            }
            '+' => {
                if self.cursor.match_char('=') {
                    self.single(TokenKind::PlusEqual)
                } else if self.next_is_signed_number() {
                    self.scan_number(c)
                } else {
                    self.single(TokenKind::Plus)
                }
            }
            '-' => {
                if self.cursor.match_char('=') {
                    self.single(TokenKind::MinusEqual)
                } else if self.next_is_signed_number() {
                    self.scan_number(c)
                } else if self.cursor.match_char('>') {
                    self.single(TokenKind::ForwardArrow)
                } else {
                    self.single(TokenKind::Minus)
                }
            }
            '*' => {
                if self.cursor.match_char('=') {
                    self.single(TokenKind::StarEqual)
                } else if self.cursor.match_char('*') {
                    self.either('=', TokenKind::StarStarEqual, TokenKind::StarStar)
                } else {
                    self.single(TokenKind::Star)
                }
            }
            '/' => self.either('=', TokenKind::SlashEqual, TokenKind::Slash),
            '%' => self.either('=', TokenKind::PercentEqual, TokenKind::Percent),
            '^' => {
                if self.cursor.match_char('=') {
                    self.single(TokenKind::CaretEqual)
                } else if matches!(self.cursor.peek(), Some('"' | '\'')) {
                    // Node path.
                    self.scan_quoted()
                } else {
                    self.single(TokenKind::Caret)
                }
            }
            '&' => {
                if self.cursor.match_char('&') {
                    self.single(TokenKind::AmpersandAmpersand)
                } else if self.cursor.match_char('=') {
                    self.single(TokenKind::AmpersandEqual)
                } else if matches!(self.cursor.peek(), Some('"' | '\'')) {
                    // String name.
                    self.scan_quoted()
                } else {
                    self.single(TokenKind::Ampersand)
                }
            }
            '|' => {
                if self.cursor.match_char('|') {
                    self.single(TokenKind::PipePipe)
                } else {
                    self.either('=', TokenKind::PipeEqual, TokenKind::Pipe)
                }
            }

            // Doubled forms may be the start of a conflict marker.
            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.doubled_or_marker('=', TokenKind::EqualEqual)
                } else {
                    self.single(TokenKind::Equal)
                }
            }
            '<' => {
                if self.cursor.match_char('=') {
                    self.single(TokenKind::LessEqual)
                } else if self.cursor.peek() == Some('<') {
                    if self.cursor.peek_next() == Some('=') {
                        self.cursor.advance();
                        self.cursor.advance();
                        self.single(TokenKind::LessLessEqual)
                    } else {
                        self.doubled_or_marker('<', TokenKind::LessLess)
                    }
                } else {
                    self.single(TokenKind::Less)
                }
            }
            '>' => {
                if self.cursor.match_char('=') {
                    self.single(TokenKind::GreaterEqual)
                } else if self.cursor.peek() == Some('>') {
                    if self.cursor.peek_next() == Some('=') {
                        self.cursor.advance();
                        self.cursor.advance();
                        self.single(TokenKind::GreaterGreaterEqual)
                    } else {
                        self.doubled_or_marker('>', TokenKind::GreaterGreater)
                    }
                } else {
                    self.single(TokenKind::Greater)
                }
            }

            c if is_whitespace(c) => return None,
            c => self.make_error(LexFault::InvalidCharacter { ch: c }),
        };
        Some(token)
    }

    fn single(&self, kind: TokenKind) -> Token<'src> {
        self.make_token(kind, Payload::None)
    }

    /// `matched` if the next character is `next` (consuming it), else `otherwise`.
    fn either(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) -> Token<'src> {
        if self.cursor.match_char(next) {
            self.single(matched)
        } else {
            self.single(otherwise)
        }
    }

    fn next_is_digit(&self) -> bool {
        self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
    }

    /// A sign followed by a digit starts a literal unless the previous token
    /// could end an expression.
    fn next_is_signed_number(&self) -> bool {
        self.next_is_digit() && !self.last_kind.is_some_and(TokenKind::can_precede_bin_op)
    }

    /// The first `c` is consumed and the cursor sits on the second. Seven or
    /// more in a row form a VCS conflict marker.
    fn doubled_or_marker(&mut self, c: char, doubled: TokenKind) -> Token<'src> {
        let run = self.cursor.run_length(c);
        if run + 1 >= 7 {
            for _ in 0..run {
                self.cursor.advance();
            }
            return self.single(TokenKind::VcsConflictMarker);
        }
        self.cursor.advance();
        self.single(doubled)
    }

    fn open_delimiter(&mut self, opener: char, kind: TokenKind) -> Token<'src> {
        self.delimiters.open(opener);
        self.single(kind)
    }

    fn close_delimiter(&mut self, closer: char, kind: TokenKind) -> Token<'src> {
        match self.delimiters.close(closer) {
            Ok(()) => self.single(kind),
            Err(fault) => {
                debug!(
                    %fault,
                    line = self.start.line,
                    column = self.start.column,
                    "delimiter fault"
                );
                self.make_error(fault)
            }
        }
    }

    fn queue_error(&mut self, token: Token<'src>) {
        debug!(
            message = %token.debug_name(),
            line = token.span.start_line,
            column = token.span.start_column,
            "queued lexical fault"
        );
        self.errors.push(token);
    }

    pub(super) fn make_token(&self, kind: TokenKind, payload: Payload) -> Token<'src> {
        self.token_from(self.start, kind, payload)
    }

    pub(super) fn make_error(&self, fault: LexFault) -> Token<'src> {
        self.make_token(TokenKind::Error, Payload::Error(fault))
    }

    pub(super) fn token_from(
        &self,
        start: Position,
        kind: TokenKind,
        payload: Payload,
    ) -> Token<'src> {
        Token::new(
            kind,
            payload,
            Span::new(start, self.cursor.position()),
            self.cursor.slice_from(start.offset),
        )
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to and including the first `Eof`, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

/// Unicode whitespace accepted between tokens.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\u{0009}'..='\u{000D}'
            | '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200B}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}
