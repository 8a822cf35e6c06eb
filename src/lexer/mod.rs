//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source bytes
//! into a stream of tokens for parsing. It handles:
//!
//! - Single-pass scanning with at most one byte of lookahead
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Line/column tracking for error reporting
//! - Illegal input, which becomes `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;
