//! AST Snapshot - a normalized intermediate representation of the comment tree
//!
//! The snapshot captures node types, labels, attributes and children in a plain serializable
//! form, so that dumps, JSON output and test snapshots share one traversal. Children are
//! always taken from [`AstNode::children`]; kind-specific payload is read only after the
//! matching kind check.

use super::elements::{Comment, FullComment};
use super::traits::{AstNode, HtmlTag};
use crate::comments::commands::{CommandId, CommandTraits};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// A snapshot of a comment node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// Kind name, e.g. "ParagraphComment"
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type, in key order
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(key.into(), value.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Indented one-line-per-node rendering
    ///
    /// ```text
    /// FullComment "f"
    ///   ParagraphComment "" {whitespace=false}
    ///     TextComment "Adds."
    /// ```
    pub fn to_treeviz(&self) -> String {
        let mut out = String::new();
        self.write_treeviz(0, &mut out);
        out
    }

    fn write_treeviz(&self, depth: usize, out: &mut String) {
        let _ = write!(out, "{}{} {:?}", "  ".repeat(depth), self.node_type, self.label);
        if !self.attributes.is_empty() {
            let attrs: Vec<String> = self
                .attributes
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            let _ = write!(out, " {{{}}}", attrs.join(", "));
        }
        out.push('\n');
        for child in &self.children {
            child.write_treeviz(depth + 1, out);
        }
    }
}

fn command_label(traits: &CommandTraits, id: CommandId) -> String {
    traits
        .command_info(id)
        .map(|info| info.name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

/// Build a snapshot of `comment` and all of its descendants
pub fn snapshot_from_comment(comment: &Comment, traits: &CommandTraits) -> AstSnapshot {
    let node_type = comment.kind_name();
    let mut snapshot = match comment {
        Comment::Text(text) => AstSnapshot::new(node_type, text.text()),
        Comment::InlineCommand(command) => {
            let label = command_label(traits, command.command_id());
            let mut snapshot = AstSnapshot::new(node_type, label)
                .with_attribute("render", command.render_kind().as_str());
            for (index, arg) in command.args().iter().enumerate() {
                snapshot = snapshot.with_attribute(format!("arg{}", index), &arg.text);
            }
            snapshot
        }
        Comment::HtmlStartTag(tag) => {
            let mut snapshot = AstSnapshot::new(node_type, tag.tag_name());
            for attr in tag.attrs() {
                snapshot = snapshot.with_attribute(
                    format!("attr.{}", attr.name),
                    attr.value.as_deref().unwrap_or(""),
                );
            }
            if tag.is_self_closing() {
                snapshot = snapshot.with_attribute("self_closing", true);
            }
            snapshot
        }
        Comment::HtmlEndTag(tag) => AstSnapshot::new(node_type, tag.tag_name()),
        Comment::Paragraph(paragraph) => {
            AstSnapshot::new(node_type, "").with_attribute("whitespace", paragraph.is_whitespace())
        }
        Comment::ParamCommand(param) => {
            let mut snapshot =
                AstSnapshot::new(node_type, command_label(traits, param.command().command_id()))
                    .with_attribute("direction", param.direction())
                    .with_attribute("explicit", param.is_direction_explicit());
            if param.has_param_name() {
                snapshot = snapshot.with_attribute("name", param.param_name());
            }
            if param.is_param_index_valid() {
                snapshot = snapshot.with_attribute("index", param.param_index());
            }
            snapshot
        }
        Comment::TParamCommand(tparam) => {
            let mut snapshot =
                AstSnapshot::new(node_type, command_label(traits, tparam.command().command_id()));
            if tparam.has_param_name() {
                snapshot = snapshot.with_attribute("name", tparam.param_name());
            }
            if tparam.is_position_valid() {
                let position: Vec<String> =
                    tparam.position().iter().map(|i| i.to_string()).collect();
                snapshot = snapshot.with_attribute("position", position.join(","));
            }
            snapshot
        }
        Comment::VerbatimBlock(block) => {
            AstSnapshot::new(node_type, command_label(traits, block.command().command_id()))
                .with_attribute("close", block.close_name())
        }
        Comment::VerbatimLine(line) => {
            AstSnapshot::new(node_type, command_label(traits, line.command().command_id()))
                .with_attribute("text", line.text())
        }
        Comment::VerbatimBlockLine(line) => AstSnapshot::new(node_type, line.text()),
        Comment::BlockCommand(command) => {
            AstSnapshot::new(node_type, command_label(traits, command.command_id()))
        }
    };

    if let Some(command) = comment.as_block_command() {
        for (index, arg) in command.args().iter().enumerate() {
            snapshot = snapshot.with_attribute(format!("arg{}", index), &arg.text);
        }
    }

    let children = comment
        .children()
        .iter()
        .map(|child| snapshot_from_comment(child, traits))
        .collect();
    snapshot.with_children(children)
}

/// Build a snapshot of a whole comment, labeled with the documented declaration's name
pub fn snapshot_from_full_comment(full: &FullComment<'_>, traits: &CommandTraits) -> AstSnapshot {
    let children = full
        .children()
        .iter()
        .map(|block| snapshot_from_comment(block, traits))
        .collect();
    AstSnapshot::new(full.kind_name(), full.decl().name()).with_children(children)
}
