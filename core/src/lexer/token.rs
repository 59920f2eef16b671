use std::fmt;

use serde::Serialize;

use super::cursor::Position;
use crate::errors::LexFault;

/// A single token with its kind, payload and source span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub payload: Payload,
    pub span: Span,
    /// Exact source text the token was lexed from.
    pub lexeme: &'src str,
    /// Caret relationship, filled in by tooling after scanning.
    pub editor_hint: Option<EditorHint>,
}

/// Location of a token: byte offsets plus 1-based lines and columns.
///
/// `end_column` is exclusive, pointing just past the last character. Start
/// and end are ordered as `(line, column)` pairs, so a token spanning lines
/// may end at a smaller column than it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset);
        debug_assert!((start.line, start.column) <= (end.line, end.column));
        Self {
            start: start.offset,
            end: end.offset,
            start_line: start.line,
            end_line: end.line,
            start_column: start.column,
            end_column: end.column,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Value carried by a token. Which variant is valid is decided by the kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    None,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Decoded string literal.
    Str(String),
    /// Identifier, keyword or annotation text.
    Name(String),
    Error(LexFault),
}

impl Payload {
    /// Whether this payload is allowed on a token of `kind`.
    pub fn fits(&self, kind: TokenKind) -> bool {
        match self {
            Payload::Null
            | Payload::Bool(_)
            | Payload::Int(_)
            | Payload::Float(_)
            | Payload::Str(_) => kind == TokenKind::Literal,
            Payload::Name(_) => {
                matches!(kind, TokenKind::Identifier | TokenKind::Annotation) || kind.is_keyword()
            }
            Payload::Error(_) => kind == TokenKind::Error,
            Payload::None => !matches!(
                kind,
                TokenKind::Literal | TokenKind::Identifier | TokenKind::Annotation | TokenKind::Error
            ) && !kind.is_keyword(),
        }
    }
}

/// Where an editing caret sits relative to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPlace {
    Before,
    Inside,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditorHint {
    pub place: CursorPlace,
    /// Caret column minus the token's start column, on the token's first line.
    pub offset: usize,
}

/// Which opener produced a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringForm {
    Plain,
    Raw,
    NodePath,
    StringName,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, payload: Payload, span: Span, lexeme: &'src str) -> Self {
        debug_assert!(
            payload.fits(kind),
            "payload {payload:?} does not fit token kind {kind:?}"
        );
        Self {
            kind,
            payload,
            span,
            lexeme,
            editor_hint: None,
        }
    }

    /// Relate an editing caret to this token.
    ///
    /// A caret on the first or last character boundary is `Before`/`After`,
    /// strictly between is `Inside`, anywhere else leaves the hint empty.
    pub fn with_caret(mut self, line: usize, column: usize) -> Self {
        let caret = (line, column);
        let start = (self.span.start_line, self.span.start_column);
        let end = (self.span.end_line, self.span.end_column);
        let place = if caret == start {
            Some(CursorPlace::Before)
        } else if caret == end {
            Some(CursorPlace::After)
        } else if caret > start && caret < end {
            Some(CursorPlace::Inside)
        } else {
            None
        };
        let offset = if line == start.0 {
            column.saturating_sub(start.1)
        } else {
            0
        };
        self.editor_hint = place.map(|place| EditorHint { place, offset });
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    pub fn can_precede_bin_op(&self) -> bool {
        self.kind.can_precede_bin_op()
    }

    pub fn is_identifier(&self) -> bool {
        self.kind.is_identifier()
    }

    pub fn is_node_name(&self) -> bool {
        self.kind.is_node_name()
    }

    pub fn string_form(&self) -> Option<StringForm> {
        if !matches!(self.payload, Payload::Str(_)) {
            return None;
        }
        Some(match self.lexeme.chars().next() {
            Some('r') => StringForm::Raw,
            Some('^') => StringForm::NodePath,
            Some('&') => StringForm::StringName,
            _ => StringForm::Plain,
        })
    }

    /// Name used by the token dump: includes the lexeme or error message.
    pub fn debug_name(&self) -> String {
        match (&self.kind, &self.payload) {
            (TokenKind::Identifier, _) => format!("identifier: {}", self.lexeme),
            (TokenKind::Literal, _) => format!("Literal: {}", self.lexeme),
            (TokenKind::Error, Payload::Error(fault)) => format!("Error: {fault}"),
            (kind, _) => kind.name().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Basic
    Annotation,
    Identifier,
    Literal,

    // Comparison
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    EqualEqual,
    BangEqual,

    // Logical
    And,
    Or,
    Not,
    AmpersandAmpersand,
    PipePipe,
    Bang,

    // Bitwise
    Ampersand,
    Pipe,
    Tilde,
    Caret,
    LessLess,
    GreaterGreater,

    // Math
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,

    // Assignment
    Equal,
    PlusEqual,
    MinusEqual,
    StarEqual,
    StarStarEqual,
    SlashEqual,
    PercentEqual,
    LessLessEqual,
    GreaterGreaterEqual,
    AmpersandEqual,
    PipeEqual,
    CaretEqual,

    // Control flow
    If,
    Elif,
    Else,
    For,
    While,
    Break,
    Continue,
    Pass,
    Return,
    Match,
    When,

    // Keywords
    As,
    Class,
    Const,
    Enum,
    Extends,
    Fn,
    Import,
    In,
    Is,
    Mod,
    #[serde(rename = "SELF")]
    SelfKw,
    Signal,
    Trait,
    Type,
    Uses,
    Var,
    Void,

    // Punctuation
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
    ParenthesisOpen,
    ParenthesisClose,
    Comma,
    Semicolon,
    Period,
    PeriodPeriod,
    PeriodPeriodPeriod,
    Colon,
    Dollar,
    ForwardArrow,
    Underscore,

    // Whitespace
    Newline,

    // Constants
    ConstPi,
    ConstTau,
    ConstInf,
    ConstNan,

    // Diagnostics helpers
    VcsConflictMarker,
    Backtick,
    QuestionMark,

    // Special
    Error,
    Eof,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Annotation => "Annotation",
            Identifier => "Identifier",
            Literal => "Literal",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            EqualEqual => "==",
            BangEqual => "!=",
            And => "and",
            Or => "or",
            Not => "not",
            AmpersandAmpersand => "&&",
            PipePipe => "||",
            Bang => "!",
            Ampersand => "&",
            Pipe => "|",
            Tilde => "~",
            Caret => "^",
            LessLess => "<<",
            GreaterGreater => ">>",
            Plus => "+",
            Minus => "-",
            Star => "*",
            StarStar => "**",
            Slash => "/",
            Percent => "%",
            Equal => "=",
            PlusEqual => "+=",
            MinusEqual => "-=",
            StarEqual => "*=",
            StarStarEqual => "**=",
            SlashEqual => "/=",
            PercentEqual => "%=",
            LessLessEqual => "<<=",
            GreaterGreaterEqual => ">>=",
            AmpersandEqual => "&=",
            PipeEqual => "|=",
            CaretEqual => "^=",
            If => "if",
            Elif => "elif",
            Else => "else",
            For => "for",
            While => "while",
            Break => "break",
            Continue => "continue",
            Pass => "pass",
            Return => "return",
            Match => "match",
            When => "when",
            As => "as",
            Class => "class",
            Const => "const",
            Enum => "enum",
            Extends => "extends",
            Fn => "fn",
            Import => "import",
            In => "in",
            Is => "is",
            Mod => "mod",
            SelfKw => "self",
            Signal => "signal",
            Trait => "trait",
            Type => "type",
            Uses => "uses",
            Var => "var",
            Void => "void",
            BracketOpen => "[",
            BracketClose => "]",
            BraceOpen => "{",
            BraceClose => "}",
            ParenthesisOpen => "(",
            ParenthesisClose => ")",
            Comma => ",",
            Semicolon => ";",
            Period => ".",
            PeriodPeriod => "..",
            PeriodPeriodPeriod => "...",
            Colon => ":",
            Dollar => "$",
            ForwardArrow => "->",
            Underscore => "_",
            Newline => "Newline",
            ConstPi => "PI",
            ConstTau => "TAU",
            ConstInf => "INF",
            ConstNan => "NaN",
            VcsConflictMarker => "VCS conflict marker",
            Backtick => "`",
            QuestionMark => "?",
            Error => "Error",
            Eof => "End of file",
        }
    }

    /// Keywords, word operators and named constants: the kinds produced from
    /// identifier-shaped text, which carry that text as their payload.
    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            If | Elif
                | Else
                | For
                | While
                | Break
                | Continue
                | Pass
                | Return
                | Match
                | When
                | As
                | Class
                | Const
                | Enum
                | Extends
                | Fn
                | Import
                | In
                | Is
                | Mod
                | SelfKw
                | Signal
                | Trait
                | Type
                | Uses
                | Var
                | Void
                | And
                | Or
                | Not
                | ConstPi
                | ConstTau
                | ConstInf
                | ConstNan
        )
    }

    /// Whether a token of this kind can end an expression, so that a
    /// following `+`/`-` is a binary operator rather than a sign.
    pub fn can_precede_bin_op(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Identifier
                | Literal
                | SelfKw
                | BracketClose
                | BraceClose
                | ParenthesisClose
                | ConstPi
                | ConstTau
                | ConstInf
                | ConstNan
        )
    }

    /// Identifiers plus the soft keywords usable as names.
    pub fn is_identifier(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Identifier | Match | When | ConstPi | ConstTau | ConstInf | ConstNan
        )
    }

    pub fn is_node_name(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Identifier
                | And
                | As
                | Break
                | Class
                | Const
                | ConstPi
                | ConstInf
                | ConstNan
                | ConstTau
                | Continue
                | Elif
                | Else
                | Enum
                | Extends
                | For
                | Fn
                | If
                | Import
                | In
                | Is
                | Match
                | Mod
                | Not
                | Or
                | Pass
                | Return
                | SelfKw
                | Signal
                | Trait
                | Type
                | Underscore
                | Uses
                | Var
                | Void
                | While
                | When
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(offset: usize, line: usize, column: usize) -> Position {
        Position {
            offset,
            line,
            column,
        }
    }

    fn ident(lexeme: &str, column: usize) -> Token<'_> {
        let len = lexeme.len();
        Token::new(
            TokenKind::Identifier,
            Payload::Name(lexeme.to_owned()),
            Span::new(pos(column - 1, 1, column), pos(column - 1 + len, 1, column + len)),
            lexeme,
        )
    }

    #[test]
    fn payload_family_matches_kind() {
        assert!(Payload::Int(1).fits(TokenKind::Literal));
        assert!(Payload::Name("fn".into()).fits(TokenKind::Fn));
        assert!(Payload::None.fits(TokenKind::Plus));
        assert!(!Payload::None.fits(TokenKind::Identifier));
        assert!(!Payload::Str("x".into()).fits(TokenKind::Identifier));
        assert!(Payload::Error(LexFault::InvalidNumber).fits(TokenKind::Error));
    }

    #[test]
    fn caret_placement() {
        let token = ident("name", 5);
        assert_eq!(token.editor_hint, None);

        let before = token.clone().with_caret(1, 5).editor_hint.expect("hint");
        assert_eq!(before.place, CursorPlace::Before);
        assert_eq!(before.offset, 0);

        let inside = token.clone().with_caret(1, 7).editor_hint.expect("hint");
        assert_eq!(inside.place, CursorPlace::Inside);
        assert_eq!(inside.offset, 2);

        let after = token.clone().with_caret(1, 9).editor_hint.expect("hint");
        assert_eq!(after.place, CursorPlace::After);

        assert_eq!(token.clone().with_caret(2, 5).editor_hint, None);
        assert_eq!(token.with_caret(1, 2).editor_hint, None);
    }

    #[test]
    fn names_and_debug_names() {
        assert_eq!(TokenKind::StarStarEqual.to_string(), "**=");
        assert_eq!(TokenKind::ConstNan.name(), "NaN");
        assert_eq!(TokenKind::Eof.name(), "End of file");
        assert_eq!(ident("foo", 1).debug_name(), "identifier: foo");
    }

    #[test]
    fn classification_helpers() {
        assert!(TokenKind::ParenthesisClose.can_precede_bin_op());
        assert!(!TokenKind::Equal.can_precede_bin_op());
        assert!(TokenKind::When.is_identifier());
        assert!(!TokenKind::Fn.is_identifier());
        assert!(TokenKind::Fn.is_node_name());
        assert!(!TokenKind::Plus.is_node_name());
    }
}
