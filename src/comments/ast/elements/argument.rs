//! Word-like command argument
//!
//!     Inline commands (`\c word`) and block commands (`\param name`) carry their word-like
//!     arguments as small value records: the source range of the word and its text. How many
//!     words a command takes is decided by the parser from the command table.

use super::super::range::SourceRange;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub range: SourceRange,
    pub text: String,
}

impl Argument {
    pub fn new(range: SourceRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
