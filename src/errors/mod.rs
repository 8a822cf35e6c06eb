//! Diagnostics for lexical errors.
//!
//! The lexer itself never fails; it reports bytes outside the grammar as
//! `Illegal` tokens. This module turns those tokens into positioned errors
//! a caller can aggregate, print, or ignore:
//!
//! - Error structures with source position and file name
//! - One error variant per kind of illegal input
//! - Suggestions attached to each error

pub mod errors;

#[cfg(test)]
mod tests;
