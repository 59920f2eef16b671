use ruzta::lexer::lex;
use ruzta::lexer::token::{Payload, TokenKind};
use ruzta::{LexError, LexFault, Scanner};

fn faults(source: &str) -> Vec<LexFault> {
    lex(source)
        .into_iter()
        .filter_map(|t| match t.payload {
            Payload::Error(fault) => Some(fault),
            _ => None,
        })
        .collect()
}

fn token_kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn mismatched_closer_reports_once_and_continues() {
    assert_eq!(
        token_kinds("(] x"),
        vec![
            TokenKind::ParenthesisOpen,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        faults("(]"),
        vec![LexFault::MismatchedCloser {
            closer: ']',
            opener: '(',
            expected: ')',
        }]
    );
}

#[test]
fn mismatch_consumes_the_frame() {
    assert_eq!(
        faults("((])"),
        vec![LexFault::MismatchedCloser {
            closer: ']',
            opener: '(',
            expected: ')',
        }]
    );
}

#[test]
fn closer_without_opener() {
    assert_eq!(faults("x)"), vec![LexFault::UnmatchedCloser { closer: ')' }]);
    let message = LexFault::UnmatchedCloser { closer: '}' }.to_string();
    assert_eq!(message, "Closing \"}\" doesn't have an opening counterpart.");
}

#[test]
fn radix_prefix_without_digits() {
    let tokens = lex("0b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].payload, Payload::Error(LexFault::MissingRadixDigits));
    assert_eq!(tokens[0].lexeme, "0b");
    assert_eq!(faults("0x_"), vec![LexFault::MissingRadixDigits]);
}

#[test]
fn exponent_without_digits() {
    assert_eq!(faults("1e"), vec![LexFault::MissingExponentDigits]);
    assert_eq!(faults("2.5E+ x"), vec![LexFault::MissingExponentDigits]);
}

#[test]
fn numeric_overflow_is_invalid() {
    assert_eq!(faults("9223372036854775808"), vec![LexFault::InvalidNumber]);
    assert_eq!(faults("0x8000000000000000"), vec![LexFault::InvalidNumber]);
    assert_eq!(faults("1e400"), vec![LexFault::InvalidNumber]);
}

#[test]
fn unterminated_string() {
    let tokens = lex("\"abc");
    assert_eq!(tokens[0].payload, Payload::Error(LexFault::UnterminatedString));
    assert_eq!(tokens[0].lexeme, "\"abc");
    assert_eq!(tokens[1].kind, TokenKind::Eof);

    assert_eq!(faults(r#""abc\"#), vec![LexFault::UnterminatedString]);
}

#[test]
fn invalid_character() {
    assert_eq!(
        token_kinds("a § b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(faults("§"), vec![LexFault::InvalidCharacter { ch: '§' }]);
    assert_eq!(
        LexFault::InvalidCharacter { ch: '§' }.to_string(),
        "Invalid character \"§\""
    );
}

#[test]
fn stray_carriage_return() {
    let tokens = lex("a\rb");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "\r");
    assert_eq!(tokens[1].span.start_column, 2);
}

#[test]
fn pending_newline_is_delivered_before_queued_error() {
    assert_eq!(
        token_kinds("a\n\rb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_block_comment() {
    let tokens = lex("x /* open\ncomment");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Error,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[2].lexeme, "/* open\ncomment");
    assert_eq!(tokens[2].span.start_line, 1);
    assert_eq!(tokens[2].span.end_line, 2);
}

#[test]
fn annotation_without_name_is_recoverable() {
    assert_eq!(
        token_kinds("@ x"),
        vec![TokenKind::Error, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(faults("@1"), vec![LexFault::MissingAnnotationName]);
}

#[test]
fn scanning_continues_after_every_fault() {
    let mut scanner = Scanner::new("] \"open");
    assert_eq!(scanner.next_token().kind, TokenKind::Error);
    assert_eq!(scanner.next_token().kind, TokenKind::Error);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn error_token_converts_to_diagnostic() {
    let tokens = lex("x = 0b");
    let error = LexError::from_token(&tokens[2]).expect("error token");
    assert_eq!(error.fault, LexFault::MissingRadixDigits);
    assert_eq!(error.span.offset(), 4);
    assert_eq!(error.span.len(), 2);
    assert_eq!(
        error.to_string(),
        "SyntaxError: Expected digits after base prefix."
    );

    assert!(LexError::from_token(&tokens[0]).is_none());
}

#[test]
fn faults_serialize_with_their_tag() {
    let tokens = lex(")");
    let value = serde_json::to_value(&tokens[0]).expect("token serializes");
    assert_eq!(value["kind"], "ERROR");
    assert_eq!(value["payload"]["type"], "error");
    assert_eq!(value["payload"]["value"]["fault"], "unmatched_closer");
    assert_eq!(value["payload"]["value"]["closer"], ")");
}
