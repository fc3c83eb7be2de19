//! Paragraph element
//!
//! A paragraph owns an ordered sequence of inline content nodes (text, inline commands, HTML
//! tags). Its range is derived from the children: [first child's begin, last child's end].
//!
//! An empty paragraph has an unset range and is whitespace-only by definition. Otherwise the
//! whitespace flag is computed on first access (true iff every child is whitespace text) and
//! cached in the node's bits, the same way [`TextComment`](super::text::TextComment) does it.

use super::super::bits::layout;
use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::AstNode;
use super::comment::Comment;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ParagraphComment {
    header: CommentHeader,
    content: Vec<Comment>,
}

impl ParagraphComment {
    pub fn new(content: Vec<Comment>) -> Self {
        debug_assert!(
            content.iter().all(|item| item.kind().is_inline_content()),
            "Paragraph children must be inline content"
        );
        let mut header = CommentHeader::new(
            CommentKind::Paragraph,
            SourceLocation::invalid(),
            SourceLocation::invalid(),
        );

        match (content.first(), content.last()) {
            (Some(first), Some(last)) => {
                let begin = first.source_range().begin;
                header.set_source_range(SourceRange::new(begin, last.source_range().end));
                header.set_location(begin);
            }
            _ => {
                header.set_flag(layout::PARAGRAPH_WHITESPACE, true);
                header.set_flag(layout::PARAGRAPH_WHITESPACE_VALID, true);
            }
        }

        Self { header, content }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_whitespace(&self) -> bool {
        self.header.bits.get_or_cache_flag(
            layout::PARAGRAPH_WHITESPACE_VALID,
            layout::PARAGRAPH_WHITESPACE,
            layout::PARAGRAPH_WHITESPACE_BUSY,
            || {
                log::trace!(
                    "computing whitespace flag for paragraph at {}",
                    self.header.begin()
                );
                self.content
                    .iter()
                    .all(|item| item.as_text().is_some_and(|text| text.is_whitespace()))
            },
        )
    }

    /// Cached whitespace flag; `None` until [`is_whitespace`](Self::is_whitespace) ran once
    pub fn cached_whitespace(&self) -> Option<bool> {
        self.header.bits.cached_flag(
            layout::PARAGRAPH_WHITESPACE_VALID,
            layout::PARAGRAPH_WHITESPACE,
        )
    }

    /// Concatenated text of the paragraph's text children
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(Comment::as_text)
            .map(|text| text.text())
            .collect()
    }
}

impl AstNode for ParagraphComment {
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
        &self.content
    }
}

impl fmt::Display for ParagraphComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} inline(s))", self.content.len())
    }
}
