//! Full comment (root)
//!
//! The root of one documentation comment. It owns the top-level block content nodes and the
//! [`DeclInfo`] binding for the documented declaration, and it is the only node without a
//! parent. `FullComment` is not a [`Comment`] variant: nothing can contain it.

use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::{AstNode, Visitor};
use super::comment::Comment;
use crate::comments::decl_info::{Decl, DeclInfo};
use crate::comments::error::ResolveError;
use crate::comments::resolve;
use std::fmt;

#[derive(Debug)]
pub struct FullComment<'d> {
    header: CommentHeader,
    /// Always block content
    blocks: Vec<Comment>,
    decl_info: DeclInfo<'d>,
}

impl<'d> FullComment<'d> {
    pub fn new(blocks: Vec<Comment>, decl_info: DeclInfo<'d>) -> Self {
        debug_assert!(
            blocks.iter().all(|block| block.kind().is_block_content()),
            "FullComment children must be block content"
        );
        let mut header = CommentHeader::new(
            CommentKind::FullComment,
            SourceLocation::invalid(),
            SourceLocation::invalid(),
        );
        if let (Some(first), Some(last)) = (blocks.first(), blocks.last()) {
            let begin = first.source_range().begin;
            header.set_source_range(SourceRange::new(begin, last.source_range().end));
            header.set_location(begin);
        }
        Self {
            header,
            blocks,
            decl_info,
        }
    }

    pub fn blocks(&self) -> &[Comment] {
        &self.blocks
    }

    /// The documented declaration, without classifying it
    pub fn decl(&self) -> &'d dyn Decl {
        self.decl_info.decl()
    }

    /// The declaration binding, filled on first access
    pub fn decl_info(&self) -> &DeclInfo<'d> {
        self.decl_info.fill();
        &self.decl_info
    }

    /// Bind every top-level `\param` and `\tparam` to the documented declaration.
    ///
    /// Resolved indices and positions are written back into the commands. References that
    /// cannot be bound stay unresolved and are reported; the tree itself is never rejected.
    pub fn resolve_references(&mut self) -> Vec<ResolveError> {
        resolve::resolve_blocks(&mut self.blocks, &self.decl_info)
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        super::super::traits::walk_full_comment(self, visitor);
    }
}

impl AstNode for FullComment<'_> {
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
        &self.blocks
    }
}

impl fmt::Display for FullComment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FullComment({} block(s), decl '{}')",
            self.blocks.len(),
            self.decl().name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::paragraph::ParagraphComment;
    use super::super::text::TextComment;
    use super::*;
    use crate::comments::decl_info::DeclSummary;

    #[derive(Debug)]
    struct Namespace;

    impl Decl for Namespace {
        fn name(&self) -> &str {
            "ns"
        }

        fn introspect(&self) -> DeclSummary<'_> {
            DeclSummary::default()
        }
    }

    #[test]
    fn test_empty_full_comment() {
        let full = FullComment::new(Vec::new(), DeclInfo::new(&Namespace));
        assert_eq!(full.child_count(), 0);
        assert!(!full.source_range().is_valid());
        assert_eq!(full.kind(), CommentKind::FullComment);
        assert_eq!(full.decl().name(), "ns");
    }

    #[test]
    fn test_span_derived_from_blocks() {
        let para = |begin: u32, text: &str| -> Comment {
            ParagraphComment::new(vec![TextComment::new(
                SourceLocation::new(begin),
                SourceLocation::new(begin + text.len() as u32),
                text,
            )
            .into()])
            .into()
        };
        let full = FullComment::new(
            vec![para(3, "First."), para(12, "Second.")],
            DeclInfo::new(&Namespace),
        );
        assert_eq!(full.source_range(), SourceRange::from_offsets(3, 19));
        assert_eq!(full.location(), SourceLocation::new(3));
        assert_eq!(full.blocks().len(), 2);
    }
}
