//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_COMPOUND!` - Resolves a one-or-two byte operator with a single byte of lookahead

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The scanned bytes
/// * `$position` - Where the first byte was found
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, b"42", position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Consumes the current byte and, when the next byte is `$second`, that one
/// too. Evaluates to `$double` if both were consumed, `$single` otherwise.
///
/// # Example
///
/// ```ignore
/// b'<' => MK_COMPOUND!(self, b'=', TokenKind::LtEq, TokenKind::Lt),
/// ```
#[macro_export]
macro_rules! MK_COMPOUND {
    ($lexer:expr, $second:literal, $double:expr, $single:expr) => {
        if $lexer.peek() == Some($second) {
            $lexer.advance_n(2);
            $double
        } else {
            $lexer.advance_n(1);
            $single
        }
    };
}
