//! Error types
//!
//! Contract violations on the tree itself (reading an unresolved `\param` index, writing an
//! empty `\tparam` position) are panics. The enums here cover what a caller can act on:
//! references that could not be bound, unreadable options, a full command table and
//! structural problems found by [`check_invariants`](crate::comments::ast::check_invariants).

use super::ast::{CommentKind, SourceLocation, SourceRange};
use thiserror::Error;

/// A `\param` or `\tparam` reference that could not be bound to the declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("\\param command at {range} has no parameter name")]
    MissingParamName { range: SourceRange },

    #[error("\\tparam command at {range} has no parameter name")]
    MissingTParamName { range: SourceRange },

    #[error("\\param '{name}' at {range} documents a declaration that is not a function")]
    NotAFunction { name: String, range: SourceRange },

    #[error("parameter '{name}' at {range} not found in the function declaration")]
    UnknownParameter { name: String, range: SourceRange },

    #[error("parameter '{name}' at {range} is already documented")]
    DuplicateParameter {
        name: String,
        range: SourceRange,
        index: usize,
    },

    #[error("\\tparam '{name}' at {range} documents a declaration that is not a template")]
    NotATemplate { name: String, range: SourceRange },

    #[error("template parameter '{name}' at {range} not found in the template declaration")]
    UnknownTemplateParameter { name: String, range: SourceRange },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("cannot register '{name}': command table is full ({capacity} commands)")]
    TableFull { name: String, capacity: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid comment options: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// A structural problem in a built tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{kind} location {location} lies outside its range {range}")]
    LocationOutsideSpan {
        kind: CommentKind,
        location: SourceLocation,
        range: SourceRange,
    },

    #[error("{child} range {child_range} is not enclosed by its parent {parent} range {parent_range}")]
    ChildOutsideParent {
        parent: CommentKind,
        parent_range: SourceRange,
        child: CommentKind,
        child_range: SourceRange,
    },

    #[error("{kind} range {range} ends before it begins")]
    InvertedSpan { kind: CommentKind, range: SourceRange },

    #[error("{parent} must not contain {child}")]
    MisplacedChild {
        parent: CommentKind,
        child: CommentKind,
    },
}
