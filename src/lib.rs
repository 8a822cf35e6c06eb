#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;
pub mod macros;

/// A location in the input: 0-based byte offset, 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line's text (newline included) and the
/// byte offset of `position` within that line.
pub fn get_line_at_position(source: &[u8], position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive(|&b| b == b'\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, String::from_utf8_lossy(line).into_owned(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

pub fn format_error(error: &Error, source: &[u8]) -> String {
    /*
        Error: UnrecognisedToken (unexpected character '@' at line 20, column 9)
        -> main.c
           |
        20 | int a = @;
           | --------^
    */

    let mut out = String::new();

    let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    let _ = writeln!(out, "-> {}", error.get_file());

    let offset = error.get_position().offset;
    let Some((line, line_text, line_pos)) = get_line_at_position(source, offset) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    // Width in characters, so the caret stays under the byte after non-ASCII text.
    let line_start = offset - line_pos;
    let caret_start = line_start + removed_whitespace.min(line_pos);
    let arrows = String::from_utf8_lossy(&source[caret_start..offset]).chars().count() + 1;

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(|c| c == ' ' || c == '\t').len();

    (&string[start..], start)
}
