//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{collect_errors, Error, ErrorImpl};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;
use std::rc::Rc;

fn file() -> Rc<String> {
    Rc::new("test.c".to_string())
}

fn token(kind: TokenKind, lexeme: &[u8], line: u32, column: u32) -> Token<'_> {
    Token {
        kind,
        lexeme,
        position: Position { offset: 0, line, column },
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position { offset: 10, line: 2, column: 3 },
        file(),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_file(), "test.c");
}

#[test]
fn test_error_position() {
    let pos = Position { offset: 42, line: 3, column: 5 };
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        pos,
        file(),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_from_token_illegal() {
    let error = Error::from_token(&token(TokenKind::Illegal, b"@", 3, 5), &file()).unwrap();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_tip(), "unexpected character '@' at line 3, column 5");
}

#[test]
fn test_from_token_lone_bang() {
    let error = Error::from_token(&token(TokenKind::Illegal, b"!", 1, 1), &file()).unwrap();

    assert_eq!(error.get_error_name(), "IncompleteOperator");
    assert!(error.get_tip().contains("`!=`"));
}

#[test]
fn test_from_token_ignores_valid_tokens() {
    assert!(Error::from_token(&token(TokenKind::Identifier, b"x", 1, 1), &file()).is_none());
    assert!(Error::from_token(&token(TokenKind::EndOfFile, b"", 1, 2), &file()).is_none());
}

#[test]
fn test_from_token_escapes_unprintable_bytes() {
    let error = Error::from_token(&token(TokenKind::Illegal, &[0xFFu8], 1, 1), &file()).unwrap();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "\\xFF".to_string()
        }
    );

    let error = Error::from_token(&token(TokenKind::Illegal, b"\0", 1, 1), &file()).unwrap();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "\\x00".to_string()
        }
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        Position { offset: 4, line: 1, column: 5 },
        file(),
    );

    assert_eq!(error.to_string(), "test.c:1:5: unrecognised token `$`");
}

#[test]
fn test_collect_errors_in_source_order() {
    let tokens = tokenize(b"a @ b\n# ! c", Some("test.c".to_string()));
    let errors = collect_errors(&tokens, &file());

    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].get_error_name(), "UnrecognisedToken");
    assert_eq!(errors[0].get_position().column, 3);
    assert_eq!(errors[1].get_position().line, 2);
    assert_eq!(errors[1].get_position().column, 1);
    assert_eq!(errors[2].get_error_name(), "IncompleteOperator");
    assert_eq!(errors[2].get_position().column, 3);
}

#[test]
fn test_error_display_escapes_once() {
    let error = Error::from_token(&token(TokenKind::Illegal, &[0xFFu8], 2, 4), &file()).unwrap();

    assert_eq!(error.to_string(), "test.c:2:4: unrecognised token `\\xFF`");
    assert_eq!(error.get_tip(), "unexpected character '\\xFF' at line 2, column 4");

    let error = Error::from_token(&token(TokenKind::Illegal, b"!", 1, 7), &file()).unwrap();
    assert_eq!(error.to_string(), "test.c:1:7: incomplete operator `!`");
}
