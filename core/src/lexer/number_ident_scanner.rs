use super::keywords;
use super::scanner::Scanner;
use super::token::{Payload, Token, TokenKind};
use crate::errors::LexFault;

impl<'src> Scanner<'src> {
    /// `first` is already consumed: a digit, a `.` before a digit, or a sign
    /// before a digit.
    pub(super) fn scan_number(&mut self, first: char) -> Token<'src> {
        let (negative, lead) = match first {
            '+' | '-' => match self.cursor.advance() {
                Some(digit) => (first == '-', digit),
                None => return self.make_error(LexFault::InvalidNumber),
            },
            _ => (false, first),
        };

        if lead == '0' {
            if let Some(radix) = self.cursor.peek().and_then(radix_for_prefix) {
                self.cursor.advance();
                return self.scan_radix_digits(radix, negative);
            }
        }

        let mut is_float = lead == '.';
        self.eat_digits(10);

        if !is_float
            && self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.eat_digits(10);
            is_float = true;
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some('+' | '-')) {
                self.cursor.advance();
            }
            if !self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                return self.make_error(LexFault::MissingExponentDigits);
            }
            self.eat_digits(10);
            is_float = true;
        }

        let clean = strip_separators(self.cursor.slice_from(self.start.offset));
        let payload = if is_float {
            match clean.parse::<f64>() {
                Ok(value) if value.is_finite() => Payload::Float(value),
                _ => return self.make_error(LexFault::InvalidNumber),
            }
        } else {
            match clean.parse::<i64>() {
                Ok(value) => Payload::Int(value),
                Err(_) => return self.make_error(LexFault::InvalidNumber),
            }
        };
        self.make_token(TokenKind::Literal, payload)
    }

    /// Digits after a `0x`/`0b`/`0o` prefix, which is already consumed.
    fn scan_radix_digits(&mut self, radix: u32, negative: bool) -> Token<'src> {
        let digits_start = self.cursor.pos();
        if self.eat_digits(radix) == 0 {
            return self.make_error(LexFault::MissingRadixDigits);
        }

        let mut digits = strip_separators(self.cursor.slice_from(digits_start));
        if negative {
            digits.insert(0, '-');
        }
        match i64::from_str_radix(&digits, radix) {
            Ok(value) => self.make_token(TokenKind::Literal, Payload::Int(value)),
            Err(_) => self.make_error(LexFault::InvalidNumber),
        }
    }

    /// Consume digits of `radix` and separators; returns the digit count.
    fn eat_digits(&mut self, radix: u32) -> usize {
        let mut count = 0;
        while let Some(c) = self.cursor.peek() {
            if is_separator(c) {
                self.cursor.advance();
            } else if c.is_digit(radix) {
                self.cursor.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    /// The first character is already consumed.
    pub(super) fn scan_identifier(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.start.offset);
        match text {
            "true" => self.make_token(TokenKind::Literal, Payload::Bool(true)),
            "false" => self.make_token(TokenKind::Literal, Payload::Bool(false)),
            "null" => self.make_token(TokenKind::Literal, Payload::Null),
            _ => {
                let kind = keywords::classify(text).unwrap_or(TokenKind::Identifier);
                self.make_token(kind, Payload::Name(text.to_owned()))
            }
        }
    }

    /// `@` is already consumed.
    pub(super) fn scan_annotation(&mut self) -> Token<'src> {
        if !self.cursor.peek().is_some_and(is_ident_start) {
            return self.make_error(LexFault::MissingAnnotationName);
        }
        self.cursor.eat_while(is_ident_continue);

        let name = &self.cursor.slice_from(self.start.offset)['@'.len_utf8()..];
        self.make_token(TokenKind::Annotation, Payload::Name(name.to_owned()))
    }
}

fn radix_for_prefix(c: char) -> Option<u32> {
    match c {
        'x' | 'X' => Some(16),
        'b' | 'B' => Some(2),
        'o' | 'O' => Some(8),
        _ => None,
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == ','
}

fn strip_separators(text: &str) -> String {
    text.chars().filter(|&c| !is_separator(c)).collect()
}

// Alphabetic includes combining marks with the Other_Alphabetic property, and
// numeric covers Nl/No as well as decimal digits.
pub(super) fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_numeric()
}
