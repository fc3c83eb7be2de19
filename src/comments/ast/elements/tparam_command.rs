//! `\tparam` command element
//!
//! Describes a template parameter. Once resolved, the node stores a position path: one index
//! per nesting level of template parameter lists, outermost first.
//!
//!     template<typename C, template<typename T> class TT>
//!     void test(TT<int> aaa);
//!
//!     C  -> [0]
//!     TT -> [1]
//!     T  -> [1, 0]

use super::super::kind::CommentKind;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::AstNode;
use super::block_command::BlockCommandComment;
use super::comment::Comment;
use crate::comments::commands::CommandId;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TParamCommandComment {
    command: BlockCommandComment,
    position: Vec<usize>,
}

impl TParamCommandComment {
    pub fn new(begin: SourceLocation, end: SourceLocation, command_id: CommandId) -> Self {
        Self {
            command: BlockCommandComment::with_kind(
                CommentKind::TParamCommand,
                begin,
                end,
                command_id,
            ),
            position: Vec::new(),
        }
    }

    pub fn command(&self) -> &BlockCommandComment {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut BlockCommandComment {
        &mut self.command
    }

    pub fn has_param_name(&self) -> bool {
        self.command.num_args() > 0
    }

    pub fn param_name(&self) -> &str {
        self.command.arg_text(0)
    }

    pub fn param_name_range(&self) -> SourceRange {
        self.command.arg_range(0)
    }

    pub fn is_position_valid(&self) -> bool {
        !self.position.is_empty()
    }

    pub fn position(&self) -> &[usize] {
        assert!(
            self.is_position_valid(),
            "position read before \\tparam was resolved"
        );
        &self.position
    }

    /// Number of nesting levels in the position path
    pub fn depth(&self) -> usize {
        self.position().len()
    }

    pub fn index(&self, depth: usize) -> usize {
        self.position()[depth]
    }

    pub fn set_position(&mut self, position: Vec<usize>) {
        assert!(
            !position.is_empty(),
            "set_position called with an empty position"
        );
        self.position = position;
    }
}

impl AstNode for TParamCommandComment {
    fn kind(&self) -> CommentKind {
        self.command.kind()
    }

    fn location(&self) -> SourceLocation {
        self.command.location()
    }

    fn source_range(&self) -> SourceRange {
        self.command.source_range()
    }

    fn children(&self) -> &[Comment] {
        self.command.paragraph_slice()
    }
}

impl fmt::Display for TParamCommandComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.has_param_name() {
            self.param_name()
        } else {
            ""
        };
        write!(f, "TParam({})", name)
    }
}
