use std::rc::Rc;

use log::{debug, trace};

use crate::{
    errors::errors::{collect_errors, Error},
    Position, MK_COMPOUND, MK_TOKEN,
};

use super::tokens::{lookup_keyword, Token, TokenKind};

#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8], file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
            finished: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// Never fails: bytes outside the grammar come back as `Illegal` tokens
    /// and scanning resumes after them. Once the input is exhausted every
    /// call returns `EndOfFile` at the same position.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.current_position();

        let Some(current) = self.at() else {
            self.finished = true;
            return MK_TOKEN!(TokenKind::EndOfFile, &self.source[self.pos..], start);
        };

        let kind = match current {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                self.advance_while(|b| b.is_ascii_alphanumeric() || b == b'_');
                lookup_keyword(&self.source[start.offset..self.pos])
                    .unwrap_or(TokenKind::Identifier)
            }
            b'0'..=b'9' => {
                self.advance_while(|b| b.is_ascii_digit());
                TokenKind::IntegerLiteral
            }
            b'=' => MK_COMPOUND!(self, b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => MK_COMPOUND!(self, b'=', TokenKind::NotEq, TokenKind::Illegal),
            b'<' => MK_COMPOUND!(self, b'=', TokenKind::LtEq, TokenKind::Lt),
            b'>' => MK_COMPOUND!(self, b'=', TokenKind::GtEq, TokenKind::Gt),
            _ => {
                self.advance_n(1);
                single_byte_kind(current)
            }
        };

        let lexeme = &self.source[start.offset..self.pos];
        self.column += lexeme.len() as u32;

        let token = MK_TOKEN!(kind, lexeme, start);
        if kind == TokenKind::Illegal {
            debug!("{}:{}: illegal byte sequence {:?}", self.file, start, token.text());
        } else {
            trace!("{}: {}", self.file, token);
        }

        token
    }

    fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    fn at(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// The byte after the current one. This is the only lookahead the lexer
    /// ever performs.
    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Where the next scan starts, before any whitespace is skipped.
    pub fn current_position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    fn skip_whitespace(&mut self) {
        while let Some(current) = self.at() {
            match current {
                b'\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                b' ' | b'\t' | b'\r' | b'\x0C' => self.column += 1,
                _ => break,
            }
            self.pos += 1;
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.at().is_some_and(&predicate) {
            self.pos += 1;
        }
    }
}

fn single_byte_kind(byte: u8) -> TokenKind {
    match byte {
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Star,
        b'/' => TokenKind::Slash,
        b';' => TokenKind::Semicolon,
        b',' => TokenKind::Comma,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        _ => TokenKind::Illegal,
    }
}

/// Yields every remaining token up to and including a single `EndOfFile`.
///
/// The `EndOfFile` counts once across both interfaces: if `next_token` has
/// already returned it, the iterator yields nothing.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

pub fn tokenize(source: &[u8], file: Option<String>) -> Vec<Token<'_>> {
    Lexer::new(source, file).collect()
}

/// Tokenizes `source`, rejecting it if any byte fell outside the grammar.
///
/// Every illegal byte is reported, in source order, rather than only the first.
pub fn tokenize_checked(source: &[u8], file: Option<String>) -> Result<Vec<Token<'_>>, Vec<Error>> {
    let lex = Lexer::new(source, file);
    let file = Rc::clone(lex.file());
    let tokens: Vec<Token> = lex.collect();

    let errors = collect_errors(&tokens, &file);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        debug!("{}: rejected with {} lexical error(s)", file, errors.len());
        Err(errors)
    }
}
