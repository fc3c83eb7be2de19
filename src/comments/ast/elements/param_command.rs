//! `\param` command element
//!
//! A block command describing one formal parameter of the documented function. Besides the
//! base block command state it records the passing direction (`[in]`, `[out]`, `[in,out]`),
//! whether that direction was spelled out, and the index of the referenced parameter once the
//! resolution pass has bound the name.
//!
//! The index starts unresolved. Reading it before [`ParamCommandComment::is_param_index_valid`]
//! holds is a programming error and panics; so is writing the unresolved sentinel.

use super::super::bits::layout;
use super::super::kind::CommentKind;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::AstNode;
use super::block_command::BlockCommandComment;
use super::comment::Comment;
use crate::comments::commands::CommandId;
use std::fmt;

/// Parameter passing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PassDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl PassDirection {
    pub fn as_raw(self) -> u32 {
        match self {
            PassDirection::In => 0,
            PassDirection::Out => 1,
            PassDirection::InOut => 2,
        }
    }

    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => PassDirection::Out,
            2 => PassDirection::InOut,
            _ => PassDirection::In,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassDirection::In => "[in]",
            PassDirection::Out => "[out]",
            PassDirection::InOut => "[in,out]",
        }
    }
}

impl fmt::Display for PassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ParamCommandComment {
    command: BlockCommandComment,
    param_index: Option<usize>,
}

impl ParamCommandComment {
    /// Index value that means "not resolved"
    pub const INVALID_PARAM_INDEX: usize = usize::MAX;

    pub fn new(begin: SourceLocation, end: SourceLocation, command_id: CommandId) -> Self {
        let mut command =
            BlockCommandComment::with_kind(CommentKind::ParamCommand, begin, end, command_id);
        command
            .header
            .bits
            .set(layout::PARAM_DIRECTION, PassDirection::In.as_raw());
        command
            .header
            .set_flag(layout::PARAM_DIRECTION_EXPLICIT, false);
        Self {
            command,
            param_index: None,
        }
    }

    pub fn command(&self) -> &BlockCommandComment {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut BlockCommandComment {
        &mut self.command
    }

    pub fn direction_as_str(direction: PassDirection) -> &'static str {
        direction.as_str()
    }

    pub fn direction(&self) -> PassDirection {
        PassDirection::from_raw(self.command.header.bits.get(layout::PARAM_DIRECTION))
    }

    pub fn is_direction_explicit(&self) -> bool {
        self.command.header.flag(layout::PARAM_DIRECTION_EXPLICIT)
    }

    pub fn set_direction(&mut self, direction: PassDirection, explicit: bool) {
        self.command
            .header
            .bits
            .set(layout::PARAM_DIRECTION, direction.as_raw());
        self.command
            .header
            .set_flag(layout::PARAM_DIRECTION_EXPLICIT, explicit);
    }

    pub fn has_param_name(&self) -> bool {
        self.command.num_args() > 0
    }

    /// First word argument. Panics without one; check [`has_param_name`](Self::has_param_name).
    pub fn param_name(&self) -> &str {
        self.command.arg_text(0)
    }

    pub fn param_name_range(&self) -> SourceRange {
        self.command.arg_range(0)
    }

    pub fn is_param_index_valid(&self) -> bool {
        self.param_index.is_some()
    }

    pub fn param_index(&self) -> usize {
        match self.param_index {
            Some(index) => index,
            None => panic!("param index read before \\param was resolved"),
        }
    }

    pub fn set_param_index(&mut self, index: usize) {
        assert!(
            index != Self::INVALID_PARAM_INDEX,
            "set_param_index called with the unresolved sentinel"
        );
        self.param_index = Some(index);
    }
}

impl AstNode for ParamCommandComment {
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

impl fmt::Display for ParamCommandComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.has_param_name() {
            self.param_name()
        } else {
            ""
        };
        write!(f, "Param({} {})", self.direction(), name)
    }
}
