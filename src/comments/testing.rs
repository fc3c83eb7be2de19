//! Testing utilities for comment trees
//!
//! Two tools, meant to be used together:
//!
//! 1. Factories (`loc`, `text`, `paragraph`, `param_command`, ...) that build nodes from plain
//!    offsets, plus [`TestDecl`], a declaration double that counts how often it is classified.
//! 2. [`assert_comment`], a fluent assertion API that checks tree shape and payload in one
//!    expression instead of nested `match` blocks.
//!
//! ```rust-example
//! assert_comment(&full)
//!     .block_count(2)
//!     .block(0, |b| b.kind(CommentKind::Paragraph).assert_paragraph().text("Adds."))
//!     .block(1, |b| b.assert_param().name("a").index(0));
//! ```

use super::ast::{
    Argument, AstNode, BlockCommandComment, Comment, CommentKind, FullComment, ParagraphComment,
    ParamCommandComment, PassDirection, SourceLocation, SourceRange, TParamCommandComment,
    TextComment,
};
use super::commands::{CommandId, CommandTraits};
use super::decl_info::{
    Decl, DeclKind, DeclSummary, ParamVarDecl, TemplateDeclKind, TemplateParameterList,
};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Factories
// ============================================================================

pub fn loc(offset: u32) -> SourceLocation {
    SourceLocation::new(offset)
}

pub fn range(begin: u32, end: u32) -> SourceRange {
    SourceRange::from_offsets(begin, end)
}

/// Text node spanning `[begin, begin + len)`
pub fn text(begin: u32, s: &str) -> Comment {
    TextComment::new(loc(begin), loc(begin + s.len() as u32), s).into()
}

pub fn paragraph(content: Vec<Comment>) -> ParagraphComment {
    ParagraphComment::new(content)
}

/// Paragraph holding a single text node
pub fn text_paragraph(begin: u32, s: &str) -> ParagraphComment {
    paragraph(vec![text(begin, s)])
}

/// Id of a command the table knows; panics otherwise
pub fn command_id(traits: &CommandTraits, name: &str) -> CommandId {
    match traits.command_info_by_name(name) {
        Some(info) => info.id,
        None => panic!("unknown command '{}'", name),
    }
}

/// `\name` at `begin`, spanning the backslash and the name
pub fn block_command(traits: &CommandTraits, name: &str, begin: u32) -> BlockCommandComment {
    BlockCommandComment::new(
        loc(begin),
        loc(begin + 1 + name.len() as u32),
        command_id(traits, name),
    )
}

/// `\param <param_name>` at `begin`, with the name as the first argument
pub fn param_command(traits: &CommandTraits, begin: u32, param_name: &str) -> ParamCommandComment {
    let end = begin + "\\param".len() as u32;
    let mut command = ParamCommandComment::new(loc(begin), loc(end), command_id(traits, "param"));
    if !param_name.is_empty() {
        let arg_begin = end + 1;
        command.command_mut().set_args(vec![Argument::new(
            range(arg_begin, arg_begin + param_name.len() as u32),
            param_name,
        )]);
    }
    command
}

/// `\tparam <param_name>` at `begin`, with the name as the first argument
pub fn tparam_command(
    traits: &CommandTraits,
    begin: u32,
    param_name: &str,
) -> TParamCommandComment {
    let end = begin + "\\tparam".len() as u32;
    let mut command =
        TParamCommandComment::new(loc(begin), loc(end), command_id(traits, "tparam"));
    if !param_name.is_empty() {
        let arg_begin = end + 1;
        command.command_mut().set_args(vec![Argument::new(
            range(arg_begin, arg_begin + param_name.len() as u32),
            param_name,
        )]);
    }
    command
}

// ============================================================================
// Declaration double
// ============================================================================

/// A declaration that records how many times it was classified
#[derive(Debug, Default)]
pub struct TestDecl {
    pub name: String,
    pub kind: DeclKind,
    pub template_kind: TemplateDeclKind,
    pub params: Vec<ParamVarDecl>,
    pub result_type: Option<String>,
    pub template_parameters: Option<TemplateParameterList>,
    fills: AtomicUsize,
}

impl TestDecl {
    pub fn other(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn function(name: &str, params: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: DeclKind::Function,
            params: params.iter().map(|p| ParamVarDecl::named(*p)).collect(),
            result_type: Some("void".to_string()),
            ..Self::default()
        }
    }

    pub fn function_template(
        name: &str,
        params: &[&str],
        template_parameters: TemplateParameterList,
    ) -> Self {
        Self {
            template_kind: TemplateDeclKind::Template,
            template_parameters: Some(template_parameters),
            ..Self::function(name, params)
        }
    }

    /// Number of times [`Decl::introspect`] ran
    pub fn fill_count(&self) -> usize {
        self.fills.load(Ordering::SeqCst)
    }
}

impl Decl for TestDecl {
    fn name(&self) -> &str {
        &self.name
    }

    fn introspect(&self) -> DeclSummary<'_> {
        self.fills.fetch_add(1, Ordering::SeqCst);
        DeclSummary {
            kind: self.kind,
            template_kind: self.template_kind,
            param_vars: &self.params,
            result_type: self.result_type.as_deref(),
            template_parameters: self.template_parameters.as_ref(),
            ..DeclSummary::default()
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a full comment
pub fn assert_comment<'a>(full: &'a FullComment<'_>) -> FullCommentAssertion<'a> {
    FullCommentAssertion {
        blocks: full.blocks(),
        range: full.source_range(),
    }
}

fn summarize(items: &[Comment]) -> String {
    items
        .iter()
        .map(|item| item.kind_name())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// FullComment Assertions
// ============================================================================

pub struct FullCommentAssertion<'a> {
    blocks: &'a [Comment],
    range: SourceRange,
}

impl<'a> FullCommentAssertion<'a> {
    pub fn block_count(self, expected: usize) -> Self {
        assert_eq!(
            self.blocks.len(),
            expected,
            "Expected {} blocks, found {}: [{}]",
            expected,
            self.blocks.len(),
            summarize(self.blocks)
        );
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CommentAssertion<'a>),
    {
        assert!(
            index < self.blocks.len(),
            "Block index {} out of bounds (comment has {} blocks)",
            index,
            self.blocks.len()
        );
        assertion(CommentAssertion {
            item: &self.blocks[index],
            context: format!("blocks[{}]", index),
        });
        self
    }

    pub fn span(self, begin: u32, end: u32) -> Self {
        assert_eq!(self.range, range(begin, end), "FullComment span");
        self
    }

    pub fn span_unset(self) -> Self {
        assert!(
            !self.range.is_valid(),
            "Expected unset FullComment span, found {}",
            self.range
        );
        self
    }
}

// ============================================================================
// Comment Assertions
// ============================================================================

pub struct CommentAssertion<'a> {
    item: &'a Comment,
    context: String,
}

impl<'a> CommentAssertion<'a> {
    pub fn kind(self, expected: CommentKind) -> Self {
        assert_eq!(
            self.item.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.item.kind()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.item.child_count(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            self.item.child_count(),
            summarize(self.item.children())
        );
        self
    }

    pub fn span(self, begin: u32, end: u32) -> Self {
        assert_eq!(
            self.item.source_range(),
            range(begin, end),
            "{}: span",
            self.context
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CommentAssertion<'a>),
    {
        let children = self.item.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(CommentAssertion {
            item: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    pub fn text(self, expected: &str) -> Self {
        match self.item.as_text() {
            Some(text) => assert_eq!(text.text(), expected, "{}: text", self.context),
            None => panic!(
                "{}: Expected TextComment, found {}",
                self.context,
                self.item.kind_name()
            ),
        }
        self
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.item.as_paragraph() {
            Some(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            None => panic!(
                "{}: Expected ParagraphComment, found {}",
                self.context,
                self.item.kind_name()
            ),
        }
    }

    pub fn assert_param(self) -> ParamAssertion<'a> {
        match self.item.as_param_command() {
            Some(param) => ParamAssertion {
                param,
                context: self.context,
            },
            None => panic!(
                "{}: Expected ParamCommandComment, found {}",
                self.context,
                self.item.kind_name()
            ),
        }
    }

    pub fn assert_tparam(self) -> TParamAssertion<'a> {
        match self.item.as_tparam_command() {
            Some(tparam) => TParamAssertion {
                tparam,
                context: self.context,
            },
            None => panic!(
                "{}: Expected TParamCommandComment, found {}",
                self.context,
                self.item.kind_name()
            ),
        }
    }
}

// ============================================================================
// Paragraph Assertions
// ============================================================================

pub struct ParagraphAssertion<'a> {
    para: &'a ParagraphComment,
    context: String,
}

impl ParagraphAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.para.text(), expected, "{}: paragraph text", self.context);
        self
    }

    pub fn whitespace(self, expected: bool) -> Self {
        assert_eq!(
            self.para.is_whitespace(),
            expected,
            "{}: paragraph whitespace",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.para.child_count(),
            expected,
            "{}: paragraph children",
            self.context
        );
        self
    }
}

// ============================================================================
// Param / TParam Assertions
// ============================================================================

pub struct ParamAssertion<'a> {
    param: &'a ParamCommandComment,
    context: String,
}

impl ParamAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert!(
            self.param.has_param_name(),
            "{}: \\param has no name",
            self.context
        );
        assert_eq!(self.param.param_name(), expected, "{}: param name", self.context);
        self
    }

    pub fn direction(self, expected: PassDirection, explicit: bool) -> Self {
        assert_eq!(self.param.direction(), expected, "{}: direction", self.context);
        assert_eq!(
            self.param.is_direction_explicit(),
            explicit,
            "{}: explicit direction",
            self.context
        );
        self
    }

    pub fn index(self, expected: usize) -> Self {
        assert!(
            self.param.is_param_index_valid(),
            "{}: Expected index {}, \\param is unresolved",
            self.context,
            expected
        );
        assert_eq!(self.param.param_index(), expected, "{}: param index", self.context);
        self
    }

    pub fn unresolved(self) -> Self {
        assert!(
            !self.param.is_param_index_valid(),
            "{}: Expected unresolved \\param, found index {}",
            self.context,
            self.param.param_index()
        );
        self
    }
}

pub struct TParamAssertion<'a> {
    tparam: &'a TParamCommandComment,
    context: String,
}

impl TParamAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert!(
            self.tparam.has_param_name(),
            "{}: \\tparam has no name",
            self.context
        );
        assert_eq!(self.tparam.param_name(), expected, "{}: tparam name", self.context);
        self
    }

    pub fn position(self, expected: &[usize]) -> Self {
        assert!(
            self.tparam.is_position_valid(),
            "{}: Expected position {:?}, \\tparam is unresolved",
            self.context,
            expected
        );
        assert_eq!(self.tparam.position(), expected, "{}: position", self.context);
        self
    }

    pub fn unresolved(self) -> Self {
        assert!(
            !self.tparam.is_position_valid(),
            "{}: Expected unresolved \\tparam, found {:?}",
            self.context,
            self.tparam.position()
        );
        self
    }
}
