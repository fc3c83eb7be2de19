//! Comment node
//!
//! `Comment` is the common wrapper for every node that can appear below a
//! [`FullComment`](super::full_comment::FullComment). Child storage in every composite node is
//! a `[Comment]` slice, which is what lets one traversal walk paragraphs, block commands and
//! verbatim blocks alike.
//!
//! Kind checks come in two flavours: concrete (`as_paragraph`, `as_param_command`, ...) which
//! match a single variant, and abstract (`is_inline_content`, `as_block_command`, ...) which go
//! through the contiguous kind ranges of [`CommentKind`].

use super::super::kind::CommentKind;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::{AstNode, HtmlTag, InlineContent, Visitor};
use super::block_command::BlockCommandComment;
use super::html_tag::{HtmlEndTagComment, HtmlStartTagComment};
use super::inline_command::InlineCommandComment;
use super::paragraph::ParagraphComment;
use super::param_command::ParamCommandComment;
use super::text::TextComment;
use super::tparam_command::TParamCommandComment;
use super::verbatim::{VerbatimBlockComment, VerbatimBlockLineComment, VerbatimLineComment};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Comment {
    Text(TextComment),
    InlineCommand(InlineCommandComment),
    HtmlStartTag(HtmlStartTagComment),
    HtmlEndTag(HtmlEndTagComment),
    Paragraph(ParagraphComment),
    BlockCommand(BlockCommandComment),
    ParamCommand(ParamCommandComment),
    TParamCommand(TParamCommandComment),
    VerbatimBlock(Box<VerbatimBlockComment>),
    VerbatimLine(VerbatimLineComment),
    VerbatimBlockLine(VerbatimBlockLineComment),
}

impl AstNode for Comment {
    fn kind(&self) -> CommentKind {
        match self {
            Comment::Text(c) => c.kind(),
            Comment::InlineCommand(c) => c.kind(),
            Comment::HtmlStartTag(c) => c.kind(),
            Comment::HtmlEndTag(c) => c.kind(),
            Comment::Paragraph(c) => c.kind(),
            Comment::BlockCommand(c) => c.kind(),
            Comment::ParamCommand(c) => c.kind(),
            Comment::TParamCommand(c) => c.kind(),
            Comment::VerbatimBlock(c) => c.kind(),
            Comment::VerbatimLine(c) => c.kind(),
            Comment::VerbatimBlockLine(c) => c.kind(),
        }
    }

    fn location(&self) -> SourceLocation {
        match self {
            Comment::Text(c) => c.location(),
            Comment::InlineCommand(c) => c.location(),
            Comment::HtmlStartTag(c) => c.location(),
            Comment::HtmlEndTag(c) => c.location(),
            Comment::Paragraph(c) => c.location(),
            Comment::BlockCommand(c) => c.location(),
            Comment::ParamCommand(c) => c.location(),
            Comment::TParamCommand(c) => c.location(),
            Comment::VerbatimBlock(c) => c.location(),
            Comment::VerbatimLine(c) => c.location(),
            Comment::VerbatimBlockLine(c) => c.location(),
        }
    }

    fn source_range(&self) -> SourceRange {
        match self {
            Comment::Text(c) => c.source_range(),
            Comment::InlineCommand(c) => c.source_range(),
            Comment::HtmlStartTag(c) => c.source_range(),
            Comment::HtmlEndTag(c) => c.source_range(),
            Comment::Paragraph(c) => c.source_range(),
            Comment::BlockCommand(c) => c.source_range(),
            Comment::ParamCommand(c) => c.source_range(),
            Comment::TParamCommand(c) => c.source_range(),
            Comment::VerbatimBlock(c) => c.source_range(),
            Comment::VerbatimLine(c) => c.source_range(),
            Comment::VerbatimBlockLine(c) => c.source_range(),
        }
    }

    fn children(&self) -> &[Comment] {
        match self {
            Comment::Text(c) => c.children(),
            Comment::InlineCommand(c) => c.children(),
            Comment::HtmlStartTag(c) => c.children(),
            Comment::HtmlEndTag(c) => c.children(),
            Comment::Paragraph(c) => c.children(),
            Comment::BlockCommand(c) => c.children(),
            Comment::ParamCommand(c) => c.children(),
            Comment::TParamCommand(c) => c.children(),
            Comment::VerbatimBlock(c) => c.children(),
            Comment::VerbatimLine(c) => c.children(),
            Comment::VerbatimBlockLine(c) => c.children(),
        }
    }
}

impl Comment {
    /// Walk this node and its descendants depth-first
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        super::super::traits::walk(self, visitor);
    }

    pub fn is_inline_content(&self) -> bool {
        self.kind().is_inline_content()
    }

    pub fn is_html_tag(&self) -> bool {
        self.kind().is_html_tag()
    }

    pub fn is_block_content(&self) -> bool {
        self.kind().is_block_content()
    }

    pub fn is_block_command(&self) -> bool {
        self.kind().is_block_command()
    }

    pub fn as_inline_content(&self) -> Option<&dyn InlineContent> {
        match self {
            Comment::Text(c) => Some(c),
            Comment::InlineCommand(c) => Some(c),
            Comment::HtmlStartTag(c) => Some(c),
            Comment::HtmlEndTag(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_inline_content_mut(&mut self) -> Option<&mut dyn InlineContent> {
        match self {
            Comment::Text(c) => Some(c),
            Comment::InlineCommand(c) => Some(c),
            Comment::HtmlStartTag(c) => Some(c),
            Comment::HtmlEndTag(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_html_tag(&self) -> Option<&dyn HtmlTag> {
        match self {
            Comment::HtmlStartTag(c) => Some(c),
            Comment::HtmlEndTag(c) => Some(c),
            _ => None,
        }
    }

    /// The block command base of any block command kind
    pub fn as_block_command(&self) -> Option<&BlockCommandComment> {
        match self {
            Comment::BlockCommand(c) => Some(c),
            Comment::ParamCommand(c) => Some(c.command()),
            Comment::TParamCommand(c) => Some(c.command()),
            Comment::VerbatimBlock(c) => Some(c.command()),
            Comment::VerbatimLine(c) => Some(c.command()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextComment> {
        if let Comment::Text(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_inline_command(&self) -> Option<&InlineCommandComment> {
        if let Comment::InlineCommand(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_html_start_tag(&self) -> Option<&HtmlStartTagComment> {
        if let Comment::HtmlStartTag(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_html_end_tag(&self) -> Option<&HtmlEndTagComment> {
        if let Comment::HtmlEndTag(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_paragraph(&self) -> Option<&ParagraphComment> {
        if let Comment::Paragraph(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_param_command(&self) -> Option<&ParamCommandComment> {
        if let Comment::ParamCommand(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_param_command_mut(&mut self) -> Option<&mut ParamCommandComment> {
        if let Comment::ParamCommand(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_tparam_command(&self) -> Option<&TParamCommandComment> {
        if let Comment::TParamCommand(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_tparam_command_mut(&mut self) -> Option<&mut TParamCommandComment> {
        if let Comment::TParamCommand(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_verbatim_block(&self) -> Option<&VerbatimBlockComment> {
        if let Comment::VerbatimBlock(c) = self {
            Some(&**c)
        } else {
            None
        }
    }

    pub fn as_verbatim_line(&self) -> Option<&VerbatimLineComment> {
        if let Comment::VerbatimLine(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_verbatim_block_line(&self) -> Option<&VerbatimBlockLineComment> {
        if let Comment::VerbatimBlockLine(c) = self {
            Some(c)
        } else {
            None
        }
    }
}

impl From<TextComment> for Comment {
    fn from(c: TextComment) -> Self {
        Comment::Text(c)
    }
}

impl From<InlineCommandComment> for Comment {
    fn from(c: InlineCommandComment) -> Self {
        Comment::InlineCommand(c)
    }
}

impl From<HtmlStartTagComment> for Comment {
    fn from(c: HtmlStartTagComment) -> Self {
        Comment::HtmlStartTag(c)
    }
}

impl From<HtmlEndTagComment> for Comment {
    fn from(c: HtmlEndTagComment) -> Self {
        Comment::HtmlEndTag(c)
    }
}

impl From<ParagraphComment> for Comment {
    fn from(c: ParagraphComment) -> Self {
        Comment::Paragraph(c)
    }
}

impl From<BlockCommandComment> for Comment {
    fn from(c: BlockCommandComment) -> Self {
        Comment::BlockCommand(c)
    }
}

impl From<ParamCommandComment> for Comment {
    fn from(c: ParamCommandComment) -> Self {
        Comment::ParamCommand(c)
    }
}

impl From<TParamCommandComment> for Comment {
    fn from(c: TParamCommandComment) -> Self {
        Comment::TParamCommand(c)
    }
}

impl From<VerbatimBlockComment> for Comment {
    fn from(c: VerbatimBlockComment) -> Self {
        Comment::VerbatimBlock(Box::new(c))
    }
}

impl From<VerbatimLineComment> for Comment {
    fn from(c: VerbatimLineComment) -> Self {
        Comment::VerbatimLine(c)
    }
}

impl From<VerbatimBlockLineComment> for Comment {
    fn from(c: VerbatimBlockLineComment) -> Self {
        Comment::VerbatimBlockLine(c)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comment::Text(c) => fmt::Display::fmt(c, f),
            Comment::InlineCommand(c) => fmt::Display::fmt(c, f),
            Comment::HtmlStartTag(c) => fmt::Display::fmt(c, f),
            Comment::HtmlEndTag(c) => fmt::Display::fmt(c, f),
            Comment::Paragraph(c) => fmt::Display::fmt(c, f),
            Comment::BlockCommand(c) => fmt::Display::fmt(c, f),
            Comment::ParamCommand(c) => fmt::Display::fmt(c, f),
            Comment::TParamCommand(c) => fmt::Display::fmt(c, f),
            Comment::VerbatimBlock(c) => fmt::Display::fmt(c, f),
            Comment::VerbatimLine(c) => fmt::Display::fmt(c, f),
            Comment::VerbatimBlockLine(c) => fmt::Display::fmt(c, f),
        }
    }
}
