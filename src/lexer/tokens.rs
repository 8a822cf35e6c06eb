use lazy_static::lazy_static;
use std::{borrow::Cow, collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static [u8], TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b"int".as_slice(), TokenKind::Int);
        map.insert(b"return".as_slice(), TokenKind::Return);
        map.insert(b"if".as_slice(), TokenKind::If);
        map.insert(b"else".as_slice(), TokenKind::Else);
        map.insert(b"while".as_slice(), TokenKind::While);
        map
    };
}

/// Returns the keyword kind for an exact, case-sensitive spelling.
pub fn lookup_keyword(ident: &[u8]) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(ident).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfFile,

    IntegerLiteral,
    Identifier,

    // Reserved
    Int,
    Return,
    If,
    Else,
    While,

    Assign, // =
    Plus,
    Minus,
    Star,
    Slash,
    Eq,    // ==
    NotEq, // !=
    Lt,
    LtEq,
    Gt,
    GtEq,

    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
}

impl TokenKind {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, TokenKind::Illegal | TokenKind::EndOfFile)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::Identifier)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Return | TokenKind::If | TokenKind::Else | TokenKind::While
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of the input.
///
/// The lexeme borrows the lexer's input buffer, so tokens cannot outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a [u8],
    pub position: Position,
}

impl<'a> Token<'a> {
    /// The lexeme as text. Only an `Illegal` token holding a non-UTF-8 byte
    /// is converted lossily.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.lexeme)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_eof() {
            write!(f, "{} @ {}", self.kind, self.position)
        } else {
            write!(f, "{}({:?}) @ {}", self.kind, self.text(), self.position)
        }
    }
}
