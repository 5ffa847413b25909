//! Convert a block of plain lines into a quoted, `+`-joined string literal
//! block and back.
//!
//! ```text
//! Four score and seven        "Four score and seven " +
//! years ago            -c->   "years ago " +
//! our fathers                 "our fathers";
//! ```
//!
//! Deconstify is a best-effort inverse: it peels quotes, `+` and spaces from
//! the edges of each line and leaves a terminal `";` of the last line alone.

pub mod filter;

use std::fmt;
use std::str::FromStr;

use crate::error::LinefixError;

pub const USAGE: &str = "Argument must be either -d or -c";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Constify,
    Deconstify,
}

impl Mode {
    pub fn from_flag(flag: &str) -> Result<Self, LinefixError> {
        match flag {
            "-c" => Ok(Mode::Constify),
            "-d" => Ok(Mode::Deconstify),
            _ => Err(LinefixError::Usage(USAGE.into())),
        }
    }

    /// Transform one line. `is_last` only matters for constify.
    pub fn transform(self, line: &str, is_last: bool) -> String {
        match self {
            Mode::Constify => constify_line(line, is_last),
            Mode::Deconstify => deconstify_line(line),
        }
    }
}

impl FromStr for Mode {
    type Err = LinefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_flag(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Constify => f.write_str("constify"),
            Mode::Deconstify => f.write_str("deconstify"),
        }
    }
}

/// Interior lines become `"<content> " +`, the last one `"<content>";`.
pub fn constify_line(line: &str, is_last: bool) -> String {
    let body = line.trim_end_matches(' ');
    if is_last {
        format!("\"{body}\";")
    } else {
        format!("\"{body} \" +")
    }
}

pub fn deconstify_line(line: &str) -> String {
    line.trim_end_matches(['"', '+', ' '])
        .trim_start_matches(['"', ' '])
        .to_string()
}
