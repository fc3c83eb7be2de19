//! Inline command element
//!
//! A command embedded in running text that takes only word-like arguments, e.g. `\c nullptr`
//! or `\em really`. The parser picks a rendering hint from the command's semantics.

use super::super::bits::layout;
use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::{AstNode, InlineContent};
use super::argument::Argument;
use super::comment::Comment;
use crate::comments::commands::{CommandId, CommandTraits};
use std::fmt;

/// The most appropriate rendering mode for an inline command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderKind {
    #[default]
    Normal,
    Bold,
    Monospaced,
    Emphasized,
}

impl RenderKind {
    pub fn as_raw(self) -> u32 {
        match self {
            RenderKind::Normal => 0,
            RenderKind::Bold => 1,
            RenderKind::Monospaced => 2,
            RenderKind::Emphasized => 3,
        }
    }

    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => RenderKind::Bold,
            2 => RenderKind::Monospaced,
            3 => RenderKind::Emphasized,
            _ => RenderKind::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderKind::Normal => "normal",
            RenderKind::Bold => "bold",
            RenderKind::Monospaced => "monospaced",
            RenderKind::Emphasized => "emphasized",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InlineCommandComment {
    header: CommentHeader,
    args: Vec<Argument>,
}

impl InlineCommandComment {
    pub fn new(
        begin: SourceLocation,
        end: SourceLocation,
        command_id: CommandId,
        render_kind: RenderKind,
        args: Vec<Argument>,
    ) -> Self {
        let mut header = CommentHeader::new(CommentKind::InlineCommand, begin, end);
        header
            .bits
            .set(layout::INLINE_COMMAND_ID, command_id.as_raw() as u32);
        header
            .bits
            .set(layout::INLINE_RENDER_KIND, render_kind.as_raw());
        Self { header, args }
    }

    pub fn command_id(&self) -> CommandId {
        CommandId::from_raw(self.header.bits.get(layout::INLINE_COMMAND_ID) as u16)
    }

    /// Command name looked up in the command table; `None` for ids the table doesn't know
    pub fn command_name<'t>(&self, traits: &'t CommandTraits) -> Option<&'t str> {
        traits
            .command_info(self.command_id())
            .map(|info| info.name.as_str())
    }

    /// Range of the command name including its leading marker
    pub fn command_name_range(&self) -> SourceRange {
        SourceRange::new(self.header.begin().with_offset(-1), self.header.end())
    }

    pub fn render_kind(&self) -> RenderKind {
        RenderKind::from_raw(self.header.bits.get(layout::INLINE_RENDER_KIND))
    }

    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    pub fn num_args(&self) -> usize {
        self.args.len()
    }

    pub fn arg_text(&self, index: usize) -> &str {
        &self.args[index].text
    }

    pub fn arg_range(&self, index: usize) -> SourceRange {
        self.args[index].range
    }
}

impl AstNode for InlineCommandComment {
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

impl InlineContent for InlineCommandComment {
    fn has_trailing_newline(&self) -> bool {
        self.header.flag(layout::HAS_TRAILING_NEWLINE)
    }

    fn add_trailing_newline(&mut self) {
        self.header.set_flag(layout::HAS_TRAILING_NEWLINE, true);
    }
}

impl fmt::Display for InlineCommandComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InlineCommand(#{}, {} args)",
            self.command_id(),
            self.args.len()
        )
    }
}
