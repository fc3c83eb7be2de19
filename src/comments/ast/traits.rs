//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the traits that give every node the same read surface (kind,
//! caret location, source range, child slice) and the visitor used to walk a tree without
//! knowing the concrete node shapes.

use super::elements::{Comment, FullComment};
use super::kind::CommentKind;
use super::range::{SourceLocation, SourceRange};

/// Common interface for all comment nodes
pub trait AstNode {
    fn kind(&self) -> CommentKind;

    /// Preferred caret position for diagnostics
    fn location(&self) -> SourceLocation;

    fn source_range(&self) -> SourceRange;

    /// Direct children as a contiguous view. Leaves return an empty slice.
    fn children(&self) -> &[Comment];

    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn begin_loc(&self) -> SourceLocation {
        self.source_range().begin
    }

    fn end_loc(&self) -> SourceLocation {
        self.source_range().end
    }

    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Inline content nodes: text, inline commands and HTML tags
pub trait InlineContent: AstNode {
    fn has_trailing_newline(&self) -> bool;

    fn add_trailing_newline(&mut self);
}

/// HTML start and end tags
pub trait HtmlTag: InlineContent {
    fn tag_name(&self) -> &str;

    /// Range of the name alone, without `<` or `</`
    fn tag_name_range(&self) -> SourceRange;
}

/// Visitor trait for traversing a comment tree
///
/// Default implementations are empty, so you only need to override the methods you care
/// about. `depth` is 0 for the blocks directly under the full comment.
///
/// # Example
///
/// ```ignore
/// struct ParamNames(Vec<String>);
///
/// impl Visitor for ParamNames {
///     fn visit_comment(&mut self, comment: &Comment, _depth: usize) {
///         if let Some(param) = comment.as_param_command() {
///             self.0.push(param.param_name().to_string());
///         }
///     }
/// }
///
/// full_comment.accept(&mut ParamNames(Vec::new()));
/// ```
pub trait Visitor {
    fn visit_full_comment(&mut self, _full: &FullComment<'_>) {}

    fn visit_comment(&mut self, _comment: &Comment, _depth: usize) {}

    /// Called after all children of `comment` were visited
    fn leave_comment(&mut self, _comment: &Comment, _depth: usize) {}
}

/// Depth-first, pre-order walk of `comment` and its descendants
pub fn walk(comment: &Comment, visitor: &mut dyn Visitor) {
    walk_at(comment, 0, visitor);
}

pub fn walk_full_comment(full: &FullComment<'_>, visitor: &mut dyn Visitor) {
    visitor.visit_full_comment(full);
    for block in full.children() {
        walk_at(block, 0, visitor);
    }
}

fn walk_at(comment: &Comment, depth: usize, visitor: &mut dyn Visitor) {
    visitor.visit_comment(comment, depth);
    for child in comment.children() {
        walk_at(child, depth + 1, visitor);
    }
    visitor.leave_comment(comment, depth);
}
