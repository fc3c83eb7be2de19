//! Node kind registry
//!
//!     Every comment node carries a [`CommentKind`] assigned once at construction. The kinds
//!     form a closed enumeration whose discriminant order is part of the contract: the concrete
//!     kinds of each abstract category are adjacent, so "is this node a block command?" is a
//!     two-comparison range test against the category's first and last kind.
//!
//!     Layout (discriminants in brackets):
//!
//!         InlineContent   [1..=4]   Text, InlineCommand, HtmlStartTag, HtmlEndTag
//!           HtmlTag       [3..=4]   HtmlStartTag, HtmlEndTag
//!         BlockContent    [5..=10]  Paragraph, BlockCommand, ParamCommand, TParamCommand,
//!                                   VerbatimBlock, VerbatimLine
//!           BlockCommand  [6..=10]  BlockCommand, ParamCommand, TParamCommand,
//!                                   VerbatimBlock, VerbatimLine
//!         (no category)   11, 12    VerbatimBlockLine, FullComment
//!
//!     A new kind must be inserted inside its category's block and the bounds in
//!     [`CommentCategory::bounds`] moved accordingly.

use std::fmt;

/// Concrete node kind. The discriminant is stored in the low byte of every node's packed bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CommentKind {
    Text = 1,
    InlineCommand = 2,
    HtmlStartTag = 3,
    HtmlEndTag = 4,
    Paragraph = 5,
    BlockCommand = 6,
    ParamCommand = 7,
    TParamCommand = 8,
    VerbatimBlock = 9,
    VerbatimLine = 10,
    VerbatimBlockLine = 11,
    FullComment = 12,
}

impl CommentKind {
    /// Every kind, in discriminant order
    pub const ALL: [CommentKind; 12] = [
        CommentKind::Text,
        CommentKind::InlineCommand,
        CommentKind::HtmlStartTag,
        CommentKind::HtmlEndTag,
        CommentKind::Paragraph,
        CommentKind::BlockCommand,
        CommentKind::ParamCommand,
        CommentKind::TParamCommand,
        CommentKind::VerbatimBlock,
        CommentKind::VerbatimLine,
        CommentKind::VerbatimBlockLine,
        CommentKind::FullComment,
    ];

    pub fn as_raw(self) -> u8 {
        self as u8
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1..=12 => Some(Self::ALL[(raw - 1) as usize]),
            _ => None,
        }
    }

    /// Range test against an abstract category
    #[inline]
    pub fn is_a(self, category: CommentCategory) -> bool {
        let (first, last) = category.bounds();
        self >= first && self <= last
    }

    pub fn is_inline_content(self) -> bool {
        self.is_a(CommentCategory::InlineContent)
    }

    pub fn is_html_tag(self) -> bool {
        self.is_a(CommentCategory::HtmlTag)
    }

    pub fn is_block_content(self) -> bool {
        self.is_a(CommentCategory::BlockContent)
    }

    pub fn is_block_command(self) -> bool {
        self.is_a(CommentCategory::BlockCommand)
    }

    pub fn name(self) -> &'static str {
        match self {
            CommentKind::Text => "TextComment",
            CommentKind::InlineCommand => "InlineCommandComment",
            CommentKind::HtmlStartTag => "HTMLStartTagComment",
            CommentKind::HtmlEndTag => "HTMLEndTagComment",
            CommentKind::Paragraph => "ParagraphComment",
            CommentKind::BlockCommand => "BlockCommandComment",
            CommentKind::ParamCommand => "ParamCommandComment",
            CommentKind::TParamCommand => "TParamCommandComment",
            CommentKind::VerbatimBlock => "VerbatimBlockComment",
            CommentKind::VerbatimLine => "VerbatimLineComment",
            CommentKind::VerbatimBlockLine => "VerbatimBlockLineComment",
            CommentKind::FullComment => "FullComment",
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstract node category: a contiguous range of [`CommentKind`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentCategory {
    InlineContent,
    HtmlTag,
    BlockContent,
    BlockCommand,
}

impl CommentCategory {
    pub const ALL: [CommentCategory; 4] = [
        CommentCategory::InlineContent,
        CommentCategory::HtmlTag,
        CommentCategory::BlockContent,
        CommentCategory::BlockCommand,
    ];

    /// First and last kind of the category, both inclusive
    pub const fn bounds(self) -> (CommentKind, CommentKind) {
        match self {
            CommentCategory::InlineContent => (CommentKind::Text, CommentKind::HtmlEndTag),
            CommentCategory::HtmlTag => (CommentKind::HtmlStartTag, CommentKind::HtmlEndTag),
            CommentCategory::BlockContent => (CommentKind::Paragraph, CommentKind::VerbatimLine),
            CommentCategory::BlockCommand => {
                (CommentKind::BlockCommand, CommentKind::VerbatimLine)
            }
        }
    }
}
