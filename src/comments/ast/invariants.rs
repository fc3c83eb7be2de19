//! Structural checks for a built tree
//!
//! Walks a [`FullComment`] through the child view and reports every node that breaks one of
//! the tree's structural rules:
//!
//!     - a range never ends before it begins
//!     - a node's caret location lies inside its own range
//!     - a child's range lies inside its parent's range
//!     - each parent holds only the children its kind allows
//!
//! Location rules only apply where the locations involved are valid; synthesized nodes
//! without positions are not reported.

use super::elements::{Comment, FullComment};
use super::kind::CommentKind;
use super::range::SourceRange;
use super::traits::AstNode;
use crate::comments::error::InvariantViolation;

pub fn check_invariants(full: &FullComment<'_>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    check_node(full, &mut violations);
    for block in full.children() {
        check_child(full.kind(), full.source_range(), block, &mut violations);
        check_subtree(block, &mut violations);
    }
    violations
}

fn check_subtree(comment: &Comment, violations: &mut Vec<InvariantViolation>) {
    check_node(comment, violations);
    for child in comment.children() {
        check_child(comment.kind(), comment.source_range(), child, violations);
        check_subtree(child, violations);
    }
}

fn check_node(node: &dyn AstNode, violations: &mut Vec<InvariantViolation>) {
    let range = node.source_range();
    if range.is_valid() && range.end < range.begin {
        violations.push(InvariantViolation::InvertedSpan {
            kind: node.kind(),
            range,
        });
    }
    let location = node.location();
    if range.is_valid() && location.is_valid() && !range.contains(location) {
        violations.push(InvariantViolation::LocationOutsideSpan {
            kind: node.kind(),
            location,
            range,
        });
    }
}

fn allows_child(parent: CommentKind, child: CommentKind) -> bool {
    match parent {
        CommentKind::FullComment => child.is_block_content(),
        CommentKind::Paragraph => child.is_inline_content(),
        CommentKind::BlockCommand | CommentKind::ParamCommand | CommentKind::TParamCommand => {
            child == CommentKind::Paragraph
        }
        CommentKind::VerbatimBlock => child == CommentKind::VerbatimBlockLine,
        _ => false,
    }
}

fn check_child(
    parent: CommentKind,
    parent_range: SourceRange,
    child: &Comment,
    violations: &mut Vec<InvariantViolation>,
) {
    if !allows_child(parent, child.kind()) {
        violations.push(InvariantViolation::MisplacedChild {
            parent,
            child: child.kind(),
        });
    }
    let child_range = child.source_range();
    if parent_range.is_valid() && child_range.is_valid() && !parent_range.encloses(&child_range) {
        violations.push(InvariantViolation::ChildOutsideParent {
            parent,
            parent_range,
            child: child.kind(),
            child_range,
        });
    }
}
