//! Property-based tests for span growth and lazy caches
//!
//! Attaching arguments, paragraphs or verbatim lines may only move a node's end forward,
//! and only when the attached content has a valid end. Whitespace answers are computed once
//! and then served from the node's bits.

use doc_comment_ast::comments::ast::{
    Argument, AstNode, BlockCommandComment, SourceLocation, SourceRange, TextComment,
    VerbatimBlockComment, VerbatimBlockLineComment,
};
use doc_comment_ast::comments::testing::{loc, range, text_paragraph};
use doc_comment_ast::comments::CommandId;
use proptest::prelude::*;

/// End offsets of attached content; `None` is content without a position
fn ends_strategy() -> impl Strategy<Value = Vec<Option<u32>>> {
    prop::collection::vec(prop::option::of(0u32..2000), 0..6)
}

fn argument(end: Option<u32>) -> Argument {
    match end {
        Some(end) => Argument::new(range(end.saturating_sub(1), end), "w"),
        None => Argument::new(SourceRange::unset(), "w"),
    }
}

fn expected_end(current: SourceLocation, last: Option<u32>) -> SourceLocation {
    match last {
        Some(end) if loc(end) > current => loc(end),
        _ => current,
    }
}

proptest! {
    #[test]
    fn set_args_never_shrinks(initial_end in 0u32..1000, batches in prop::collection::vec(ends_strategy(), 1..4)) {
        let mut command = BlockCommandComment::new(loc(0), loc(initial_end), CommandId::from_raw(0));
        for batch in batches {
            let before = command.source_range().end;
            let last = batch.last().copied().flatten();
            command.set_args(batch.into_iter().map(argument).collect());
            let after = command.source_range().end;
            prop_assert!(after >= before);
            prop_assert_eq!(after, expected_end(before, last));
        }
    }

    #[test]
    fn set_paragraph_never_shrinks(initial_end in 0u32..1000, begin in 0u32..1000, body in "[a-z ]{1,20}") {
        let mut command = BlockCommandComment::new(loc(0), loc(initial_end), CommandId::from_raw(0));
        let before = command.source_range().end;
        let paragraph = text_paragraph(begin, &body);
        let paragraph_end = paragraph.source_range().end;
        command.set_paragraph(paragraph);
        let after = command.source_range().end;
        prop_assert!(after >= before);
        prop_assert_eq!(after, before.max(paragraph_end));
        prop_assert_eq!(command.child_count(), 1);
    }

    #[test]
    fn set_lines_never_shrinks(initial_end in 0u32..1000, starts in prop::collection::vec(0u32..2000, 0..6)) {
        let mut block = VerbatimBlockComment::new(loc(0), loc(initial_end), CommandId::from_raw(0));
        let before = block.source_range().end;
        let lines: Vec<VerbatimBlockLineComment> = starts
            .iter()
            .map(|start| VerbatimBlockLineComment::new(loc(*start), "line"))
            .collect();
        let last = starts.last().map(|start| start + 4);
        block.set_lines(lines);
        prop_assert_eq!(block.source_range().end, expected_end(before, last));
        prop_assert_eq!(block.child_count(), starts.len());
        prop_assert_eq!(block.num_lines(), starts.len());
    }

    #[test]
    fn text_whitespace_is_computed_once(body in "[ \t\na-z]{0,12}") {
        let node = TextComment::new(loc(0), loc(body.len() as u32), body.clone());
        let expected = body.chars().all(char::is_whitespace);
        prop_assert_eq!(node.cached_whitespace(), None);
        prop_assert_eq!(node.is_whitespace(), expected);
        prop_assert_eq!(node.cached_whitespace(), Some(expected));
        prop_assert_eq!(node.is_whitespace(), expected);
    }

    #[test]
    fn paragraph_whitespace_is_computed_once(body in "[ \tx]{1,12}") {
        let paragraph = text_paragraph(3, &body);
        let expected = body.chars().all(|c| c == ' ' || c == '\t');
        prop_assert_eq!(paragraph.cached_whitespace(), None);
        prop_assert_eq!(paragraph.is_whitespace(), expected);
        prop_assert_eq!(paragraph.cached_whitespace(), Some(expected));
        prop_assert_eq!(paragraph.is_whitespace(), expected);
    }
}
