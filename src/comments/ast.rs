//! AST definitions for documentation comments
//!
//!     This module provides the tree a comment parser builds for one documentation comment:
//!     the node kinds, the packed per-kind attribute storage, source positions and the uniform
//!     child view that lets one traversal walk every node shape.
//!
//! Node Kinds
//!
//!     Kinds form a closed enumeration laid out so that every abstract category is a
//!     contiguous range of discriminants:
//!
//!         Text, InlineCommand, HtmlStartTag, HtmlEndTag         inline content
//!                       HtmlStartTag, HtmlEndTag                html tags
//!         Paragraph, BlockCommand, ParamCommand, TParamCommand,
//!         VerbatimBlock, VerbatimLine                           block content
//!                    BlockCommand .. VerbatimLine               block commands
//!         VerbatimBlockLine, FullComment
//!
//!     Checking a concrete kind is an equality test, checking a category is two comparisons.
//!     New kinds must be inserted inside the block of their category. See [kind].
//!
//! Nesting
//!
//!     A full comment holds block content. A paragraph holds inline content. A block command
//!     holds at most one paragraph. A verbatim block holds verbatim block lines. Every other
//!     node is a leaf.
//!
//!         FullComment
//!         ├── Paragraph
//!         │   ├── Text
//!         │   └── InlineCommand
//!         ├── ParamCommand
//!         │   └── Paragraph
//!         └── VerbatimBlock
//!             └── VerbatimBlockLine
//!
//!     Whatever the storage (nothing, an optional box, a vector), every node exposes its
//!     children as a `&[Comment]` slice through [`AstNode::children`]. Generic walkers such as
//!     [`walk`], the snapshot builder and the invariant checker use nothing else.
//!
//! Location Tracking
//!
//!     Positions are byte offsets into the comment's source buffer ([`SourceLocation`]); an
//!     offset may also be invalid, for nodes the parser synthesized. Each node has a preferred
//!     caret location and a half-open source range. Composite nodes derive their range from
//!     their first and last child. Setters that attach content after construction only ever
//!     grow the range. [`LineIndex`](range::LineIndex) converts offsets to line/column pairs
//!     for diagnostics.

pub mod bits;
pub mod elements;
pub mod invariants;
pub mod kind;
pub mod node;
pub mod range;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Argument, BlockCommandComment, Comment, FullComment, HtmlAttribute, HtmlEndTagComment,
    HtmlStartTagComment, InlineCommandComment, ParagraphComment, ParamCommandComment,
    PassDirection, RenderKind, TParamCommandComment, TextComment, VerbatimBlockComment,
    VerbatimBlockLineComment, VerbatimLineComment,
};
pub use invariants::check_invariants;
pub use kind::{CommentCategory, CommentKind};
pub use range::{LineIndex, Position, SourceLocation, SourceRange};
pub use snapshot::{snapshot_from_comment, snapshot_from_full_comment, AstSnapshot};
pub use traits::{walk, walk_full_comment, AstNode, HtmlTag, InlineContent, Visitor};
