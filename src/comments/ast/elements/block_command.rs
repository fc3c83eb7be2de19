//! Block command element
//!
//!     A block command has zero or more word-like arguments (how many depends on the command
//!     name) and an optional paragraph argument, e.g. `\brief Does things.`
//!
//!     `BlockCommandComment` is both the plain block command node and the shared base of the
//!     specializations (`\param`, `\tparam`, verbatim blocks and verbatim lines), which embed
//!     it and reach it through `command()`. The base always reports the kind of the node it
//!     belongs to.
//!
//!     Span growth: attaching arguments or a paragraph moves the end of the range to the new
//!     content's end when that end is a valid location. The range never shrinks.

use super::super::bits::layout;
use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::AstNode;
use super::argument::Argument;
use super::comment::Comment;
use super::paragraph::ParagraphComment;
use crate::comments::commands::{CommandId, CommandTraits};
use std::fmt;
use std::slice;

#[derive(Debug, Clone)]
pub struct BlockCommandComment {
    pub(super) header: CommentHeader,
    args: Vec<Argument>,
    /// Always a `Comment::Paragraph` when present
    paragraph: Option<Box<Comment>>,
}

impl BlockCommandComment {
    pub fn new(begin: SourceLocation, end: SourceLocation, command_id: CommandId) -> Self {
        Self::with_kind(CommentKind::BlockCommand, begin, end, command_id)
    }

    pub(super) fn with_kind(
        kind: CommentKind,
        begin: SourceLocation,
        end: SourceLocation,
        command_id: CommandId,
    ) -> Self {
        debug_assert!(kind.is_block_command(), "{kind} is not a block command kind");
        let mut header = CommentHeader::new(kind, begin, end);
        header.set_location(begin.with_offset(1));
        header
            .bits
            .set(layout::BLOCK_COMMAND_ID, command_id.as_raw() as u32);
        Self {
            header,
            args: Vec::new(),
            paragraph: None,
        }
    }

    pub fn command_id(&self) -> CommandId {
        CommandId::from_raw(self.header.bits.get(layout::BLOCK_COMMAND_ID) as u16)
    }

    pub fn command_name<'t>(&self, traits: &'t CommandTraits) -> Option<&'t str> {
        traits
            .command_info(self.command_id())
            .map(|info| info.name.as_str())
    }

    /// First character of the command name, just past the leading `\` or `@`
    pub fn command_name_begin_loc(&self) -> SourceLocation {
        self.header.begin().with_offset(1)
    }

    pub fn command_name_range(&self, traits: &CommandTraits) -> Option<SourceRange> {
        let name = self.command_name(traits)?;
        let end = self
            .header
            .begin()
            .with_offset(1_i32.saturating_add(name.len() as i32));
        Some(SourceRange::new(self.command_name_begin_loc(), end))
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

    pub fn set_args(&mut self, args: Vec<Argument>) {
        if let Some(last) = args.last() {
            self.header.extend_end(last.range.end);
        }
        self.args = args;
    }

    pub fn paragraph(&self) -> Option<&ParagraphComment> {
        self.paragraph.as_deref().and_then(Comment::as_paragraph)
    }

    pub fn has_non_whitespace_paragraph(&self) -> bool {
        self.paragraph().is_some_and(|p| !p.is_whitespace())
    }

    pub fn set_paragraph(&mut self, paragraph: ParagraphComment) {
        self.header.extend_end(paragraph.source_range().end);
        self.paragraph = Some(Box::new(Comment::Paragraph(paragraph)));
    }

    /// The paragraph as a zero- or one-element child slice
    pub(super) fn paragraph_slice(&self) -> &[Comment] {
        self.paragraph
            .as_deref()
            .map(slice::from_ref)
            .unwrap_or(&[])
    }
}

impl AstNode for BlockCommandComment {
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
        self.paragraph_slice()
    }
}

impl fmt::Display for BlockCommandComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockCommand(#{}, {} args, {})",
            self.command_id(),
            self.args.len(),
            if self.paragraph.is_some() {
                "paragraph"
            } else {
                "no paragraph"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::text::TextComment;
    use super::*;

    fn brief(traits: &CommandTraits) -> BlockCommandComment {
        let id = traits.command_info_by_name("brief").map(|i| i.id).unwrap();
        BlockCommandComment::new(SourceLocation::new(4), SourceLocation::new(10), id)
    }

    fn paragraph(begin: u32, text: &str) -> ParagraphComment {
        ParagraphComment::new(vec![Comment::Text(TextComment::new(
            SourceLocation::new(begin),
            SourceLocation::new(begin + text.len() as u32),
            text,
        ))])
    }

    #[test]
    fn test_location_is_command_name_begin() {
        let traits = CommandTraits::new();
        let cmd = brief(&traits);
        assert_eq!(cmd.location(), SourceLocation::new(5));
        assert_eq!(cmd.command_name(&traits), Some("brief"));
        assert_eq!(
            cmd.command_name_range(&traits),
            Some(SourceRange::from_offsets(5, 10))
        );
    }

    #[test]
    fn test_paragraph_is_zero_or_one_child() {
        let traits = CommandTraits::new();
        let mut cmd = brief(&traits);
        assert_eq!(cmd.child_count(), 0);
        assert!(cmd.paragraph().is_none());
        assert!(!cmd.has_non_whitespace_paragraph());

        cmd.set_paragraph(paragraph(11, "Does things."));
        assert_eq!(cmd.child_count(), 1);
        assert_eq!(cmd.children()[0].kind(), CommentKind::Paragraph);
        assert!(cmd.has_non_whitespace_paragraph());
        assert_eq!(cmd.source_range(), SourceRange::from_offsets(4, 23));
    }

    #[test]
    fn test_whitespace_paragraph_is_not_counted_as_content() {
        let traits = CommandTraits::new();
        let mut cmd = brief(&traits);
        cmd.set_paragraph(paragraph(11, "   "));
        assert!(cmd.paragraph().is_some());
        assert!(!cmd.has_non_whitespace_paragraph());
    }

    #[test]
    fn test_empty_paragraph_keeps_range() {
        let traits = CommandTraits::new();
        let mut cmd = brief(&traits);
        cmd.set_paragraph(ParagraphComment::new(Vec::new()));
        assert_eq!(cmd.source_range(), SourceRange::from_offsets(4, 10));
    }

    #[test]
    fn test_set_args_extends_range() {
        let traits = CommandTraits::new();
        let mut cmd = brief(&traits);
        cmd.set_args(vec![
            Argument::new(SourceRange::from_offsets(11, 14), "one"),
            Argument::new(SourceRange::from_offsets(15, 18), "two"),
        ]);
        assert_eq!(cmd.num_args(), 2);
        assert_eq!(cmd.arg_text(1), "two");
        assert_eq!(cmd.source_range().end, SourceLocation::new(18));

        cmd.set_args(vec![Argument::new(SourceRange::unset(), "ghost")]);
        assert_eq!(cmd.source_range().end, SourceLocation::new(18));
    }
}
