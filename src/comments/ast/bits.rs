//! Packed attribute bits
//!
//!     Every node keeps its kind tag and its small per-kind flags in one 32-bit word instead of
//!     spending a full field on each flag. The word is carved into [`BitField`]s layered by
//!     category: a concrete kind's fields start right where its abstract parent's fields end, so
//!     siblings reuse the same bits and only the layout selected by the kind tag is ever active.
//!
//!         bit  0         8    9    11                     27
//!              | kind    |
//!              | kind    | NL | text: ws-valid, ws, ws-busy
//!              | kind    | NL | inline command: render(2), command id(16)
//!              | kind    | NL | start tag: self-closing
//!              | kind    | paragraph: ws-valid, ws, ws-busy
//!              | kind    | block command: command id(16) | param: direction(2), explicit
//!
//!     (NL = has trailing newline, shared by all inline content.)
//!
//!     The word is atomic because two fields are written through `&self`: the whitespace caches
//!     of text and paragraph nodes. Each cache is unset, busy or valid. The first reader claims
//!     the busy bit with a compare-exchange and computes; concurrent first readers wait until the
//!     valid bit is published, so the value is computed exactly once.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use super::kind::CommentKind;

/// A `width`-bit field starting at bit `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub offset: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// Field placed immediately after `prev`
    pub const fn after(prev: BitField, width: u32) -> Self {
        Self::new(prev.end(), width)
    }

    /// First bit past this field
    pub const fn end(self) -> u32 {
        self.offset + self.width
    }

    pub const fn mask(self) -> u32 {
        (((1u64 << self.width) - 1) as u32) << self.offset
    }

    pub const fn max_value(self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    pub fn get(self, word: u32) -> u32 {
        (word & self.mask()) >> self.offset
    }

    pub fn set(self, word: u32, value: u32) -> u32 {
        debug_assert!(
            value <= self.max_value(),
            "value {value} does not fit in {} bits",
            self.width
        );
        (word & !self.mask()) | ((value << self.offset) & self.mask())
    }

    pub fn overlaps(self, other: BitField) -> bool {
        self.mask() & other.mask() != 0
    }
}

/// Field layout, one group per category / concrete kind
pub mod layout {
    use super::BitField;

    pub const KIND: BitField = BitField::new(0, 8);

    // Inline content
    pub const HAS_TRAILING_NEWLINE: BitField = BitField::after(KIND, 1);

    // Text
    pub const TEXT_WHITESPACE_VALID: BitField = BitField::after(HAS_TRAILING_NEWLINE, 1);
    pub const TEXT_WHITESPACE: BitField = BitField::after(TEXT_WHITESPACE_VALID, 1);
    pub const TEXT_WHITESPACE_BUSY: BitField = BitField::after(TEXT_WHITESPACE, 1);

    // Inline command
    pub const INLINE_RENDER_KIND: BitField = BitField::after(HAS_TRAILING_NEWLINE, 2);
    pub const INLINE_COMMAND_ID: BitField = BitField::after(INLINE_RENDER_KIND, 16);

    // HTML start tag
    pub const HTML_SELF_CLOSING: BitField = BitField::after(HAS_TRAILING_NEWLINE, 1);

    // Paragraph
    pub const PARAGRAPH_WHITESPACE_VALID: BitField = BitField::after(KIND, 1);
    pub const PARAGRAPH_WHITESPACE: BitField = BitField::after(PARAGRAPH_WHITESPACE_VALID, 1);
    pub const PARAGRAPH_WHITESPACE_BUSY: BitField = BitField::after(PARAGRAPH_WHITESPACE, 1);

    // Block command
    pub const BLOCK_COMMAND_ID: BitField = BitField::after(KIND, 16);

    // Param command
    pub const PARAM_DIRECTION: BitField = BitField::after(BLOCK_COMMAND_ID, 2);
    pub const PARAM_DIRECTION_EXPLICIT: BitField = BitField::after(PARAM_DIRECTION, 1);
}

/// The packed word every node carries
pub struct PackedBits(AtomicU32);

impl PackedBits {
    pub fn new(kind: CommentKind) -> Self {
        Self(AtomicU32::new(layout::KIND.set(0, kind.as_raw() as u32)))
    }

    pub fn kind(&self) -> CommentKind {
        let raw = layout::KIND.get(self.word()) as u8;
        // Only `new` writes the kind field
        CommentKind::from_raw(raw).unwrap_or(CommentKind::Text)
    }

    pub fn word(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    pub fn get(&self, field: BitField) -> u32 {
        field.get(self.word())
    }

    pub fn flag(&self, field: BitField) -> bool {
        self.get(field) != 0
    }

    /// Construction-time write; exclusive access
    pub fn set(&mut self, field: BitField, value: u32) {
        debug_assert!(!field.overlaps(layout::KIND), "kind is immutable");
        let word = self.0.get_mut();
        *word = field.set(*word, value);
    }

    pub fn set_flag(&mut self, field: BitField, value: bool) {
        self.set(field, value as u32);
    }

    /// Cached value of a lazily computed flag, if it has been computed
    pub fn cached_flag(&self, valid: BitField, value: BitField) -> Option<bool> {
        let word = self.word();
        (valid.get(word) != 0).then(|| value.get(word) != 0)
    }

    /// Return the cached flag, computing and publishing it on first access
    ///
    /// `compute` runs at most once per word. The thread that sets `busy` computes; any other
    /// first reader yields until `valid` is published. `compute` must not panic, or later
    /// readers wait forever.
    pub fn get_or_cache_flag(
        &self,
        valid: BitField,
        value: BitField,
        busy: BitField,
        compute: impl FnOnce() -> bool,
    ) -> bool {
        let mut word = self.word();
        loop {
            if valid.get(word) != 0 {
                return value.get(word) != 0;
            }
            if busy.get(word) == 0 {
                match self.0.compare_exchange_weak(
                    word,
                    word | busy.mask(),
                    Ordering::AcqRel,
                    Ordering::Acquire,
                ) {
                    Ok(_) => break,
                    Err(current) => {
                        word = current;
                        continue;
                    }
                }
            }
            std::thread::yield_now();
            word = self.word();
        }

        let computed = compute();
        // busy is set and valid/value are clear, so one xor releases and publishes
        let flip = busy.mask() | valid.mask() | if computed { value.mask() } else { 0 };
        self.0.fetch_xor(flip, Ordering::AcqRel);
        computed
    }
}

impl Clone for PackedBits {
    fn clone(&self) -> Self {
        Self(AtomicU32::new(self.word()))
    }
}

impl fmt::Debug for PackedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedBits({:#010x})", self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::layout::*;
    use super::*;

    fn assert_disjoint(fields: &[BitField]) {
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert!(!a.overlaps(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_every_layout_fits_in_one_word() {
        for field in [
            TEXT_WHITESPACE_BUSY,
            INLINE_COMMAND_ID,
            HTML_SELF_CLOSING,
            PARAGRAPH_WHITESPACE_BUSY,
            PARAM_DIRECTION_EXPLICIT,
        ] {
            assert!(field.end() <= 32, "{field:?} exceeds 32 bits");
        }
    }

    #[test]
    fn test_concrete_fields_start_after_parent_fields() {
        assert_eq!(HAS_TRAILING_NEWLINE.offset, KIND.end());
        assert_eq!(TEXT_WHITESPACE_VALID.offset, HAS_TRAILING_NEWLINE.end());
        assert_eq!(INLINE_RENDER_KIND.offset, HAS_TRAILING_NEWLINE.end());
        assert_eq!(HTML_SELF_CLOSING.offset, HAS_TRAILING_NEWLINE.end());
        assert_eq!(PARAGRAPH_WHITESPACE_VALID.offset, KIND.end());
        assert_eq!(BLOCK_COMMAND_ID.offset, KIND.end());
        assert_eq!(PARAM_DIRECTION.offset, BLOCK_COMMAND_ID.end());
    }

    #[test]
    fn test_fields_within_one_layout_are_disjoint() {
        assert_disjoint(&[
            KIND,
            HAS_TRAILING_NEWLINE,
            TEXT_WHITESPACE_VALID,
            TEXT_WHITESPACE,
            TEXT_WHITESPACE_BUSY,
        ]);
        assert_disjoint(&[KIND, HAS_TRAILING_NEWLINE, INLINE_RENDER_KIND, INLINE_COMMAND_ID]);
        assert_disjoint(&[KIND, HAS_TRAILING_NEWLINE, HTML_SELF_CLOSING]);
        assert_disjoint(&[
            KIND,
            PARAGRAPH_WHITESPACE_VALID,
            PARAGRAPH_WHITESPACE,
            PARAGRAPH_WHITESPACE_BUSY,
        ]);
        assert_disjoint(&[
            KIND,
            BLOCK_COMMAND_ID,
            PARAM_DIRECTION,
            PARAM_DIRECTION_EXPLICIT,
        ]);
    }

    #[test]
    fn test_set_keeps_neighbouring_fields() {
        let mut bits = PackedBits::new(CommentKind::InlineCommand);
        bits.set(INLINE_COMMAND_ID, INLINE_COMMAND_ID.max_value());
        bits.set(INLINE_RENDER_KIND, 2);
        bits.set_flag(HAS_TRAILING_NEWLINE, true);

        assert_eq!(bits.kind(), CommentKind::InlineCommand);
        assert_eq!(bits.get(INLINE_COMMAND_ID), 0xFFFF);
        assert_eq!(bits.get(INLINE_RENDER_KIND), 2);
        assert!(bits.flag(HAS_TRAILING_NEWLINE));

        bits.set(INLINE_RENDER_KIND, 0);
        assert_eq!(bits.get(INLINE_COMMAND_ID), 0xFFFF);
        assert!(bits.flag(HAS_TRAILING_NEWLINE));
    }

    #[test]
    fn test_cached_flag_computes_once() {
        let bits = PackedBits::new(CommentKind::Text);
        let mut calls = 0;
        assert_eq!(bits.cached_flag(TEXT_WHITESPACE_VALID, TEXT_WHITESPACE), None);

        for _ in 0..3 {
            let value = bits.get_or_cache_flag(
                TEXT_WHITESPACE_VALID,
                TEXT_WHITESPACE,
                TEXT_WHITESPACE_BUSY,
                || {
                    calls += 1;
                    true
                },
            );
            assert!(value);
        }

        assert_eq!(calls, 1);
        assert_eq!(
            bits.cached_flag(TEXT_WHITESPACE_VALID, TEXT_WHITESPACE),
            Some(true)
        );
        assert_eq!(bits.kind(), CommentKind::Text);
    }

    #[test]
    fn test_racing_first_reads_compute_once() {
        use std::sync::atomic::AtomicUsize;
        use std::time::Duration;

        let bits = PackedBits::new(CommentKind::Paragraph);
        let calls = AtomicUsize::new(0);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let value = bits.get_or_cache_flag(
                        PARAGRAPH_WHITESPACE_VALID,
                        PARAGRAPH_WHITESPACE,
                        PARAGRAPH_WHITESPACE_BUSY,
                        || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(Duration::from_millis(20));
                            false
                        },
                    );
                    assert!(!value);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            bits.cached_flag(PARAGRAPH_WHITESPACE_VALID, PARAGRAPH_WHITESPACE),
            Some(false)
        );
        assert!(!bits.flag(PARAGRAPH_WHITESPACE_BUSY));
        assert_eq!(bits.kind(), CommentKind::Paragraph);
    }
}
