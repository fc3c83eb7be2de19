//! End-to-end construction scenarios
//!
//! Each test builds nodes the way a parser would (constructor, then deferred setters) and
//! checks what downstream consumers observe.

use doc_comment_ast::comments::ast::{
    AstNode, Comment, CommentKind, FullComment, HtmlAttribute, HtmlEndTagComment,
    HtmlStartTagComment, HtmlTag, InlineCommandComment, ParagraphComment, ParamCommandComment,
    PassDirection, RenderKind, SourceLocation, TParamCommandComment, VerbatimBlockComment,
    VerbatimBlockLineComment, VerbatimLineComment,
};
use doc_comment_ast::comments::testing::{
    assert_comment, block_command, command_id, loc, param_command, range, text, text_paragraph,
    TestDecl,
};
use doc_comment_ast::comments::{CommandTraits, DeclInfo};

#[test]
fn empty_paragraph_is_whitespace_with_unset_span() {
    let paragraph = ParagraphComment::new(Vec::new());
    assert!(paragraph.is_whitespace());
    assert!(paragraph.is_empty());
    assert!(!paragraph.source_range().is_valid());
    assert_eq!(paragraph.child_count(), 0);
}

#[test]
fn single_text_paragraph_takes_child_span() {
    let paragraph = ParagraphComment::new(vec![text(10, "hello")]);
    assert_eq!(paragraph.source_range(), range(10, 15));
    assert_eq!(paragraph.location(), loc(10));
    assert!(!paragraph.is_whitespace());
    assert_eq!(paragraph.child_count(), 1);
}

#[test]
fn param_direction_defaults_then_explicit() {
    let traits = CommandTraits::new();
    let mut param = param_command(&traits, 0, "out");
    assert_eq!(param.direction(), PassDirection::In);
    assert!(!param.is_direction_explicit());

    param.set_direction(PassDirection::Out, true);
    assert_eq!(param.direction(), PassDirection::Out);
    assert!(param.is_direction_explicit());
    assert_eq!(param.param_name(), "out");
}

#[test]
fn start_tag_self_closing_only_when_marked() {
    let mut br = HtmlStartTagComment::new(loc(0), "br");
    assert!(!br.is_self_closing());
    br.set_self_closing();
    assert!(br.is_self_closing());

    let p = HtmlStartTagComment::new(loc(10), "p");
    assert!(!p.is_self_closing());
}

#[test]
fn empty_full_comment_still_fills_once() {
    let decl = TestDecl::other("thing");
    let full = FullComment::new(Vec::new(), DeclInfo::new(&decl));
    assert_eq!(full.child_count(), 0);
    assert!(!full.source_range().is_valid());
    assert_eq!(decl.fill_count(), 0);

    for _ in 0..10 {
        assert!(full.decl_info().is_filled());
    }
    assert_eq!(decl.fill_count(), 1);
}

#[test]
fn decl_access_does_not_fill() {
    let decl = TestDecl::function("f", &["x"]);
    let full = FullComment::new(Vec::new(), DeclInfo::new(&decl));
    assert_eq!(full.decl().name(), "f");
    assert_eq!(decl.fill_count(), 0);
    assert_eq!(full.decl_info().param_vars().len(), 1);
    assert_eq!(full.decl_info().result_type(), Some("void"));
    assert_eq!(decl.fill_count(), 1);
}

#[test]
fn every_leaf_kind_has_no_children() {
    let traits = CommandTraits::new();
    let leaves: Vec<Comment> = vec![
        text(0, "t"),
        InlineCommandComment::new(
            loc(1),
            loc(3),
            command_id(&traits, "c"),
            RenderKind::Monospaced,
            Vec::new(),
        )
        .into(),
        HtmlStartTagComment::new(loc(0), "a").into(),
        HtmlEndTagComment::new(loc(0), loc(4), "a").into(),
        VerbatimLineComment::new(loc(0), loc(10), command_id(&traits, "fn"), loc(3), " f()").into(),
        VerbatimBlockLineComment::new(loc(0), "raw").into(),
    ];
    for leaf in &leaves {
        assert_eq!(leaf.child_count(), 0, "{}", leaf.kind_name());
        assert!(leaf.children().is_empty());
    }
}

#[test]
fn start_tag_spans_follow_attributes_and_greater() {
    let mut tag = HtmlStartTagComment::new(loc(0), "a");
    assert_eq!(tag.source_range(), range(0, 2));
    assert_eq!(tag.tag_name_range(), range(1, 2));

    tag.set_attrs(vec![HtmlAttribute::with_value(
        loc(3),
        "href",
        loc(7),
        range(8, 11),
        "x",
    )]);
    assert_eq!(tag.source_range().end, loc(11));
    assert_eq!(tag.attr(0).name_range(), range(3, 7));

    tag.set_greater_loc(loc(12));
    assert_eq!(tag.source_range(), range(0, 12));
    tag.set_greater_loc(loc(9));
    assert_eq!(tag.source_range(), range(0, 12));
    assert_eq!(tag.num_attrs(), 1);
}

#[test]
fn bare_attribute_falls_back_to_name_end() {
    let mut tag = HtmlStartTagComment::new(loc(0), "input");
    tag.set_attrs(vec![HtmlAttribute::new(loc(7), "disabled")]);
    assert_eq!(tag.attr(0).end_loc(), loc(15));
    assert_eq!(tag.source_range().end, loc(15));
}

#[test]
fn verbatim_block_lines_are_children() {
    let traits = CommandTraits::new();
    let mut code = VerbatimBlockComment::new(loc(0), loc(5), command_id(&traits, "code"));
    code.set_lines(vec![
        VerbatimBlockLineComment::new(loc(6), "int x;"),
        VerbatimBlockLineComment::new(loc(13), "x++;"),
    ]);
    code.set_close_name("endcode", loc(19));

    let block: Comment = code.into();
    assert_eq!(block.child_count(), 2);
    assert!(block
        .children()
        .iter()
        .all(|line| line.kind() == CommentKind::VerbatimBlockLine));
    assert_eq!(block.source_range(), range(0, 17));
    let code = block.as_verbatim_block().unwrap();
    assert_eq!(code.line_text(0), "int x;");
    assert_eq!(code.close_name(), "endcode");
}

#[test]
fn full_comment_covers_blocks() {
    let traits = CommandTraits::new();
    let mut brief = block_command(&traits, "brief", 4);
    brief.set_paragraph(text_paragraph(11, "Does things."));
    let mut param = param_command(&traits, 24, "x");
    param
        .command_mut()
        .set_paragraph(text_paragraph(33, "The input."));

    let decl = TestDecl::function("f", &["x"]);
    let full = FullComment::new(vec![brief.into(), param.into()], DeclInfo::new(&decl));

    assert_comment(&full)
        .block_count(2)
        .span(4, 43)
        .block(0, |b| {
            b.kind(CommentKind::BlockCommand)
                .span(4, 23)
                .child_count(1)
                .child(0, |p| {
                    p.assert_paragraph().text("Does things.").whitespace(false);
                });
        })
        .block(1, |b| {
            b.kind(CommentKind::ParamCommand)
                .assert_param()
                .name("x")
                .direction(PassDirection::In, false)
                .unresolved();
        });
}

#[test]
fn unmatched_end_tag_is_kept_as_is() {
    let paragraph = ParagraphComment::new(vec![
        text(0, "text "),
        HtmlEndTagComment::new(loc(5), loc(11), "div").into(),
    ]);
    assert_eq!(paragraph.child_count(), 2);
    let end_tag = paragraph.children()[1].as_html_end_tag().unwrap();
    assert_eq!(end_tag.location(), SourceLocation::new(7));
}

#[test]
#[should_panic(expected = "unresolved sentinel")]
fn setting_unresolved_sentinel_is_a_contract_violation() {
    let traits = CommandTraits::new();
    param_command(&traits, 0, "x").set_param_index(ParamCommandComment::INVALID_PARAM_INDEX);
}

#[test]
#[should_panic(expected = "empty position")]
fn setting_empty_position_is_a_contract_violation() {
    let traits = CommandTraits::new();
    let mut tparam = TParamCommandComment::new(loc(0), loc(7), command_id(&traits, "tparam"));
    tparam.set_position(Vec::new());
}

#[test]
fn last_resolution_write_wins() {
    let traits = CommandTraits::new();
    let mut param = param_command(&traits, 0, "x");
    param.set_param_index(1);
    param.set_param_index(3);
    assert_eq!(param.param_index(), 3);
}
