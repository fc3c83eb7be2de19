//! Verbatim elements
//!
//!     Verbatim content is raw text preserved exactly as written, with no markup
//!     interpretation. There are two forms:
//!
//!     - Verbatim blocks (`\code` ... `\endcode`): an opening command, any number of
//!       [`VerbatimBlockLineComment`] children and a closing command name.
//!     - Verbatim lines (`\fn void f(int)`): an opening command followed by the rest of the
//!       line as a single text span; no closing command and no children.

use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::AstNode;
use super::block_command::BlockCommandComment;
use super::comment::Comment;
use crate::comments::commands::CommandId;
use std::fmt;

/// One raw line inside a verbatim block
#[derive(Debug, Clone)]
pub struct VerbatimBlockLineComment {
    header: CommentHeader,
    text: String,
}

impl VerbatimBlockLineComment {
    pub fn new(begin: SourceLocation, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = begin.with_offset(text.len() as i32);
        Self {
            header: CommentHeader::new(CommentKind::VerbatimBlockLine, begin, end),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AstNode for VerbatimBlockLineComment {
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

impl fmt::Display for VerbatimBlockLineComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerbatimBlockLine('{}')", self.text)
    }
}

/// A verbatim block command, e.g. preformatted code
#[derive(Debug, Clone)]
pub struct VerbatimBlockComment {
    command: BlockCommandComment,
    close_name: String,
    close_name_loc_begin: SourceLocation,
    /// Always `Comment::VerbatimBlockLine` items
    lines: Vec<Comment>,
}

impl VerbatimBlockComment {
    pub fn new(begin: SourceLocation, end: SourceLocation, command_id: CommandId) -> Self {
        Self {
            command: BlockCommandComment::with_kind(
                CommentKind::VerbatimBlock,
                begin,
                end,
                command_id,
            ),
            close_name: String::new(),
            close_name_loc_begin: SourceLocation::invalid(),
            lines: Vec::new(),
        }
    }

    pub fn command(&self) -> &BlockCommandComment {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut BlockCommandComment {
        &mut self.command
    }

    pub fn set_close_name(&mut self, name: impl Into<String>, loc_begin: SourceLocation) {
        self.close_name = name.into();
        self.close_name_loc_begin = loc_begin;
    }

    /// Closing command name; empty until the closing command has been seen
    pub fn close_name(&self) -> &str {
        &self.close_name
    }

    pub fn close_name_loc_begin(&self) -> SourceLocation {
        self.close_name_loc_begin
    }

    pub fn set_lines(&mut self, lines: Vec<VerbatimBlockLineComment>) {
        if let Some(last) = lines.last() {
            self.command.header.extend_end(last.source_range().end);
        }
        self.lines = lines.into_iter().map(Comment::VerbatimBlockLine).collect();
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn line_text(&self, index: usize) -> &str {
        self.lines[index]
            .as_verbatim_block_line()
            .map(VerbatimBlockLineComment::text)
            .unwrap_or_default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &VerbatimBlockLineComment> {
        self.lines
            .iter()
            .filter_map(Comment::as_verbatim_block_line)
    }
}

impl AstNode for VerbatimBlockComment {
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
        &self.lines
    }
}

impl fmt::Display for VerbatimBlockComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VerbatimBlock({} line(s), closed by '{}')",
            self.lines.len(),
            self.close_name
        )
    }
}

/// A verbatim line command: the opening command plus the rest of its line
#[derive(Debug, Clone)]
pub struct VerbatimLineComment {
    command: BlockCommandComment,
    text: String,
    text_begin: SourceLocation,
}

impl VerbatimLineComment {
    pub fn new(
        begin: SourceLocation,
        end: SourceLocation,
        command_id: CommandId,
        text_begin: SourceLocation,
        text: impl Into<String>,
    ) -> Self {
        Self {
            command: BlockCommandComment::with_kind(
                CommentKind::VerbatimLine,
                begin,
                end,
                command_id,
            ),
            text: text.into(),
            text_begin,
        }
    }

    pub fn command(&self) -> &BlockCommandComment {
        &self.command
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_range(&self) -> SourceRange {
        SourceRange::new(self.text_begin, self.command.source_range().end)
    }
}

impl AstNode for VerbatimLineComment {
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
        &[]
    }
}

impl fmt::Display for VerbatimLineComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerbatimLine('{}')", self.text)
    }
}
