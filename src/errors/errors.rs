use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            file,
        }
    }

    /// Builds the diagnostic for an `Illegal` token. Any other kind is not an
    /// error and yields `None`.
    pub fn from_token(token: &Token, file: &Rc<String>) -> Option<Self> {
        if token.kind != TokenKind::Illegal {
            return None;
        }

        let text = escape_bytes(token.lexeme);
        let error_impl = if token.lexeme == b"!" {
            ErrorImpl::IncompleteOperator { token: text }
        } else {
            ErrorImpl::UnrecognisedToken { token: text }
        };

        Some(Error::new(error_impl, token.position, Rc::clone(file)))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::IncompleteOperator { .. } => "IncompleteOperator",
        }
    }

    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => format!(
                "unexpected character '{}' at line {}, column {}",
                token, self.position.line, self.position.column
            ),
            ErrorImpl::IncompleteOperator { token } => {
                format!("`{}` is not an operator on its own, did you mean `!=`?", token)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token `{token}`")]
    UnrecognisedToken { token: String },
    #[error("incomplete operator `{token}`")]
    IncompleteOperator { token: String },
}

/// Every diagnostic in `tokens`, in the order the tokens were scanned.
pub fn collect_errors(tokens: &[Token], file: &Rc<String>) -> Vec<Error> {
    tokens
        .iter()
        .filter_map(|token| Error::from_token(token, file))
        .collect()
}

// Printable ASCII passes through, everything else becomes `\xNN`.
fn escape_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                (b as char).to_string()
            } else {
                format!("\\x{:02X}", b)
            }
        })
        .collect()
}
