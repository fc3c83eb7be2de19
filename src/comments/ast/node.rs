//! Base node fields
//!
//! Every concrete node embeds a [`CommentHeader`]: the packed bits word (kind tag plus
//! per-kind flags), the preferred caret location and the source range.

use super::bits::{BitField, PackedBits};
use super::kind::CommentKind;
use super::range::{SourceLocation, SourceRange};

#[derive(Debug, Clone)]
pub struct CommentHeader {
    pub(crate) bits: PackedBits,
    location: SourceLocation,
    range: SourceRange,
}

impl CommentHeader {
    /// Header whose preferred location is `begin`
    pub(crate) fn new(kind: CommentKind, begin: SourceLocation, end: SourceLocation) -> Self {
        Self {
            bits: PackedBits::new(kind),
            location: begin,
            range: SourceRange::new(begin, end),
        }
    }

    pub fn kind(&self) -> CommentKind {
        self.bits.kind()
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn source_range(&self) -> SourceRange {
        self.range
    }

    pub fn begin(&self) -> SourceLocation {
        self.range.begin
    }

    pub fn end(&self) -> SourceLocation {
        self.range.end
    }

    pub(crate) fn set_location(&mut self, location: SourceLocation) {
        self.location = location;
    }

    pub(crate) fn set_source_range(&mut self, range: SourceRange) {
        self.range = range;
    }

    /// Move the end of the range to `end` if it is valid and not before the current end.
    /// Returns whether the range changed.
    pub(crate) fn extend_end(&mut self, end: SourceLocation) -> bool {
        if !end.is_valid() {
            return false;
        }
        if self.range.end.is_valid() && end < self.range.end {
            return false;
        }
        self.range.set_end(end);
        true
    }

    pub(crate) fn flag(&self, field: BitField) -> bool {
        self.bits.flag(field)
    }

    pub(crate) fn set_flag(&mut self, field: BitField, value: bool) {
        self.bits.set_flag(field, value);
    }
}
