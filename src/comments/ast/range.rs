//! Source location tracking for comment nodes
//!
//! This module defines the position types every comment node carries, plus a small utility for
//! converting byte offsets to line/column positions when rendering diagnostics.
//!
//! ## Types
//!
//! - [`SourceLocation`] - A byte offset into the comment source, or the invalid location
//! - [`SourceRange`] - A begin/end pair of locations
//! - [`Position`] - A line:column position, only used for display
//! - [`LineIndex`] - Utility for converting byte offsets to positions
//!
//! ## Key Design
//!
//! - **Invalid is a value**: nodes whose extent is not known yet (an empty paragraph, a full
//!   comment with no blocks) carry an unset range instead of an `Option<SourceRange>`
//! - **Offsets only**: nodes store byte offsets; line:column is computed on demand
//! - **Arithmetic on invalid locations is a no-op**: `invalid().with_offset(3)` is still invalid

use std::fmt;

/// A byte offset into the comment source buffer, or the invalid location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourceLocation {
    offset: Option<u32>,
}

impl SourceLocation {
    pub fn new(offset: u32) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    pub fn invalid() -> Self {
        Self { offset: None }
    }

    pub fn is_valid(&self) -> bool {
        self.offset.is_some()
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    /// Location shifted by `delta` bytes. Saturates at the ends of the offset space.
    pub fn with_offset(self, delta: i32) -> Self {
        Self {
            offset: self.offset.map(|o| o.saturating_add_signed(delta)),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{}", offset),
            None => write!(f, "<invalid>"),
        }
    }
}

/// Begin/end pair of source locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    pub begin: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub fn new(begin: SourceLocation, end: SourceLocation) -> Self {
        Self { begin, end }
    }

    /// Range with both ends invalid
    pub fn unset() -> Self {
        Self::default()
    }

    /// Shorthand for a range over two valid offsets
    pub fn from_offsets(begin: u32, end: u32) -> Self {
        Self::new(SourceLocation::new(begin), SourceLocation::new(end))
    }

    pub fn is_valid(&self) -> bool {
        self.begin.is_valid() && self.end.is_valid()
    }

    pub fn set_end(&mut self, end: SourceLocation) {
        self.end = end;
    }

    /// Check if a location lies within this range (both ends inclusive)
    pub fn contains(&self, loc: SourceLocation) -> bool {
        self.is_valid() && loc.is_valid() && self.begin <= loc && loc <= self.end
    }

    /// Check if another range lies entirely within this one
    pub fn encloses(&self, other: &SourceRange) -> bool {
        self.contains(other.begin) && self.contains(other.end)
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// A position in source text (line and column, both 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct LineIndex {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };

        let column = byte_offset - self.line_starts[line];
        Position::new(line, column)
    }

    /// Convert a source location to a position; `None` for the invalid location
    pub fn position(&self, loc: SourceLocation) -> Option<Position> {
        loc.offset()
            .map(|offset| self.byte_to_position(offset as usize))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_location_ignores_offsets() {
        let loc = SourceLocation::invalid().with_offset(5);
        assert!(!loc.is_valid());
        assert_eq!(loc.offset(), None);
    }

    #[test]
    fn test_with_offset_saturates() {
        assert_eq!(SourceLocation::new(2).with_offset(-5).offset(), Some(0));
        assert_eq!(SourceLocation::new(10).with_offset(-1).offset(), Some(9));
    }

    #[test]
    fn test_range_contains_and_encloses() {
        let outer = SourceRange::from_offsets(10, 20);
        assert!(outer.contains(SourceLocation::new(10)));
        assert!(outer.contains(SourceLocation::new(20)));
        assert!(!outer.contains(SourceLocation::new(21)));
        assert!(!outer.contains(SourceLocation::invalid()));
        assert!(outer.encloses(&SourceRange::from_offsets(12, 18)));
        assert!(!outer.encloses(&SourceRange::from_offsets(5, 18)));
        assert!(!SourceRange::unset().contains(SourceLocation::new(0)));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(SourceRange::from_offsets(3, 7).to_string(), "3..7");
        assert_eq!(SourceRange::unset().to_string(), "<invalid>..<invalid>");
    }

    #[test]
    fn test_line_index_multiline() {
        let index = LineIndex::new("/// Hello\n/// \\param x\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.byte_to_position(0), Position::new(0, 0));
        assert_eq!(index.byte_to_position(14), Position::new(1, 4));
        assert_eq!(index.position(SourceLocation::invalid()), None);
        assert_eq!(
            index.position(SourceLocation::new(10)),
            Some(Position::new(1, 0))
        );
    }
}
