//! Main module for documentation comment functionality

pub mod ast;
pub mod commands;
pub mod config;
pub mod decl_info;
pub mod error;
pub mod resolve;
pub mod testing;

pub use ast::{AstNode, Comment, CommentKind, FullComment, SourceLocation, SourceRange, Visitor};
pub use commands::{CommandId, CommandInfo, CommandTraits};
pub use config::CommentOptions;
pub use decl_info::{Decl, DeclInfo, DeclKind, DeclSummary, TemplateDeclKind};
pub use error::{CommandError, ConfigError, InvariantViolation, ResolveError};
