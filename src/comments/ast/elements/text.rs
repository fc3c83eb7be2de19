//! Text element
//!
//! Plain text between commands and tags. The text is immutable once the node is built, so the
//! "is whitespace-only" answer is computed on first access and cached in the node's bits.

use super::super::bits::layout;
use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::{AstNode, InlineContent};
use super::comment::Comment;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TextComment {
    header: CommentHeader,
    text: String,
}

impl TextComment {
    pub fn new(begin: SourceLocation, end: SourceLocation, text: impl Into<String>) -> Self {
        Self {
            header: CommentHeader::new(CommentKind::Text, begin, end),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_whitespace(&self) -> bool {
        self.header.bits.get_or_cache_flag(
            layout::TEXT_WHITESPACE_VALID,
            layout::TEXT_WHITESPACE,
            layout::TEXT_WHITESPACE_BUSY,
            || {
                log::trace!("computing whitespace flag for text at {}", self.header.begin());
                is_whitespace_text(&self.text)
            },
        )
    }

    /// Cached whitespace flag; `None` until [`is_whitespace`](Self::is_whitespace) ran once
    pub fn cached_whitespace(&self) -> Option<bool> {
        self.header
            .bits
            .cached_flag(layout::TEXT_WHITESPACE_VALID, layout::TEXT_WHITESPACE)
    }
}

pub(crate) fn is_whitespace_text(text: &str) -> bool {
    text.bytes()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
}

impl AstNode for TextComment {
    fn kind(&self) -> CommentKind {
        self.header.kind()
    }

    fn location(&self) -> SourceLocation {
        self.header.location()
    }

    fn source_range(&self) -> SourceRange {
        self.header.source_range()
    }

    fn children(&self) -> &[Comment] {
        &[]
    }
}

impl InlineContent for TextComment {
    fn has_trailing_newline(&self) -> bool {
        self.header.flag(layout::HAS_TRAILING_NEWLINE)
    }

    fn add_trailing_newline(&mut self) {
        self.header.set_flag(layout::HAS_TRAILING_NEWLINE, true);
    }
}

impl fmt::Display for TextComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text('{}')", self.text)
    }
}
