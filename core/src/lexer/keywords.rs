use super::token::TokenKind;

pub const MIN_KEYWORD_LEN: usize = 2;
pub const MAX_KEYWORD_LEN: usize = 10;

/// Map identifier-shaped text to its keyword kind, if it is one.
///
/// Literal words (`true`, `false`, `null`) are not keywords and are handled
/// by the identifier scanner before this lookup.
pub fn classify(text: &str) -> Option<TokenKind> {
    if !(MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&text.len()) {
        return None;
    }

    let kind = match text.as_bytes()[0] {
        b'a' => match text {
            "as" => TokenKind::As,
            "and" => TokenKind::And,
            _ => return None,
        },
        b'b' => match text {
            "break" => TokenKind::Break,
            _ => return None,
        },
        b'c' => match text {
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "continue" => TokenKind::Continue,
            _ => return None,
        },
        b'e' => match text {
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "enum" => TokenKind::Enum,
            "extends" => TokenKind::Extends,
            _ => return None,
        },
        b'f' => match text {
            "for" => TokenKind::For,
            "fn" => TokenKind::Fn,
            _ => return None,
        },
        b'i' => match text {
            "if" => TokenKind::If,
            "import" => TokenKind::Import,
            "in" => TokenKind::In,
            "is" => TokenKind::Is,
            _ => return None,
        },
        b'm' => match text {
            "match" => TokenKind::Match,
            "mod" => TokenKind::Mod,
            _ => return None,
        },
        b'n' => match text {
            "not" => TokenKind::Not,
            _ => return None,
        },
        b'o' => match text {
            "or" => TokenKind::Or,
            _ => return None,
        },
        b'p' => match text {
            "pass" => TokenKind::Pass,
            _ => return None,
        },
        b'r' => match text {
            "return" => TokenKind::Return,
            _ => return None,
        },
        b's' => match text {
            "self" => TokenKind::SelfKw,
            "signal" => TokenKind::Signal,
            _ => return None,
        },
        b't' => match text {
            "trait" => TokenKind::Trait,
            "type" => TokenKind::Type,
            _ => return None,
        },
        b'u' => match text {
            "uses" => TokenKind::Uses,
            _ => return None,
        },
        b'v' => match text {
            "var" => TokenKind::Var,
            "void" => TokenKind::Void,
            _ => return None,
        },
        b'w' => match text {
            "while" => TokenKind::While,
            "when" => TokenKind::When,
            _ => return None,
        },
        b'I' if text == "INF" => TokenKind::ConstInf,
        b'N' if text == "NAN" => TokenKind::ConstNan,
        b'P' if text == "PI" => TokenKind::ConstPi,
        b'T' if text == "TAU" => TokenKind::ConstTau,
        _ => return None,
    };
    Some(kind)
}
