//! HTML tag elements
//!
//! HTML tags are always inline content regardless of HTML semantics. Opening and closing tags
//! are stored independently: nothing at this layer matches a `</b>` to its `<b>`.

use super::super::bits::layout;
use super::super::kind::CommentKind;
use super::super::node::CommentHeader;
use super::super::range::{SourceLocation, SourceRange};
use super::super::traits::{AstNode, HtmlTag, InlineContent};
use super::comment::Comment;
use std::fmt;

fn offset_by_len(loc: SourceLocation, extra: i32, name: &str) -> SourceLocation {
    loc.with_offset(extra.saturating_add(name.len() as i32))
}

/// An attribute of an opening tag: `name` or `name="value"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttribute {
    pub name_loc_begin: SourceLocation,
    pub name: String,
    /// Invalid for a bare attribute
    pub equals_loc: SourceLocation,
    /// Unset for a bare attribute
    pub value_range: SourceRange,
    pub value: Option<String>,
}

impl HtmlAttribute {
    /// A bare attribute with no `=value`
    pub fn new(name_loc_begin: SourceLocation, name: impl Into<String>) -> Self {
        Self {
            name_loc_begin,
            name: name.into(),
            equals_loc: SourceLocation::invalid(),
            value_range: SourceRange::unset(),
            value: None,
        }
    }

    pub fn with_value(
        name_loc_begin: SourceLocation,
        name: impl Into<String>,
        equals_loc: SourceLocation,
        value_range: SourceRange,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name_loc_begin,
            name: name.into(),
            equals_loc,
            value_range,
            value: Some(value.into()),
        }
    }

    pub fn name_loc_end(&self) -> SourceLocation {
        offset_by_len(self.name_loc_begin, 0, &self.name)
    }

    pub fn name_range(&self) -> SourceRange {
        SourceRange::new(self.name_loc_begin, self.name_loc_end())
    }

    /// End of the attribute's text: the value's end when valid, else the name's end
    pub fn end_loc(&self) -> SourceLocation {
        if self.value_range.end.is_valid() {
            self.value_range.end
        } else {
            self.name_loc_end()
        }
    }
}

impl fmt::Display for HtmlAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}=\"{}\"", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// An opening HTML tag with attributes
#[derive(Debug, Clone)]
pub struct HtmlStartTagComment {
    header: CommentHeader,
    tag_name: String,
    tag_name_range: SourceRange,
    attributes: Vec<HtmlAttribute>,
}

impl HtmlStartTagComment {
    /// A start tag spanning `<name`; attributes and `>` extend it later
    pub fn new(begin: SourceLocation, tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        let name_begin = begin.with_offset(1);
        let name_end = offset_by_len(begin, 1, &tag_name);
        let mut header = CommentHeader::new(CommentKind::HtmlStartTag, begin, name_end);
        header.set_location(name_begin);
        Self {
            header,
            tag_name,
            tag_name_range: SourceRange::new(name_begin, name_end),
            attributes: Vec::new(),
        }
    }

    pub fn num_attrs(&self) -> usize {
        self.attributes.len()
    }

    pub fn attr(&self, index: usize) -> &HtmlAttribute {
        &self.attributes[index]
    }

    pub fn attrs(&self) -> &[HtmlAttribute] {
        &self.attributes
    }

    /// Attach the attribute list and widen the span to the last attribute's end
    pub fn set_attrs(&mut self, attributes: Vec<HtmlAttribute>) {
        if let Some(last) = attributes.last() {
            self.header.extend_end(last.end_loc());
        }
        self.attributes = attributes;
    }

    /// Position of the closing `>` (or `/>`). Moves the span end forward to it; an earlier
    /// location is ignored.
    pub fn set_greater_loc(&mut self, greater_loc: SourceLocation) {
        self.header.extend_end(greater_loc);
    }

    /// True if the tag was spelled self-closing (`<br />`); a plain `<br>` stays false
    pub fn is_self_closing(&self) -> bool {
        self.header.flag(layout::HTML_SELF_CLOSING)
    }

    pub fn set_self_closing(&mut self) {
        self.header.set_flag(layout::HTML_SELF_CLOSING, true);
    }
}

impl AstNode for HtmlStartTagComment {
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

impl InlineContent for HtmlStartTagComment {
    fn has_trailing_newline(&self) -> bool {
        self.header.flag(layout::HAS_TRAILING_NEWLINE)
    }

    fn add_trailing_newline(&mut self) {
        self.header.set_flag(layout::HAS_TRAILING_NEWLINE, true);
    }
}

impl HtmlTag for HtmlStartTagComment {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn tag_name_range(&self) -> SourceRange {
        self.tag_name_range
    }
}

impl fmt::Display for HtmlStartTagComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        if self.is_self_closing() {
            write!(f, " /")?;
        }
        write!(f, ">")
    }
}

/// A closing HTML tag
#[derive(Debug, Clone)]
pub struct HtmlEndTagComment {
    header: CommentHeader,
    tag_name: String,
    tag_name_range: SourceRange,
}

impl HtmlEndTagComment {
    pub fn new(begin: SourceLocation, end: SourceLocation, tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        let name_begin = begin.with_offset(2);
        let name_end = offset_by_len(begin, 2, &tag_name);
        let mut header = CommentHeader::new(CommentKind::HtmlEndTag, begin, end);
        header.set_location(name_begin);
        Self {
            header,
            tag_name,
            tag_name_range: SourceRange::new(name_begin, name_end),
        }
    }
}

impl AstNode for HtmlEndTagComment {
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

impl InlineContent for HtmlEndTagComment {
    fn has_trailing_newline(&self) -> bool {
        self.header.flag(layout::HAS_TRAILING_NEWLINE)
    }

    fn add_trailing_newline(&mut self) {
        self.header.set_flag(layout::HAS_TRAILING_NEWLINE, true);
    }
}

impl HtmlTag for HtmlEndTagComment {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn tag_name_range(&self) -> SourceRange {
        self.tag_name_range
    }
}

impl fmt::Display for HtmlEndTagComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "</{}>", self.tag_name)
    }
}
