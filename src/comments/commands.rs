//! Command table
//!
//!     Nodes store commands as compact numeric ids. This module maps ids to names and to the
//!     properties a parser needs (argument count, which node kind the command produces, the
//!     closing command of a verbatim block). The table starts with the builtin Doxygen
//!     commands; further block commands can be registered from [`CommentOptions`], and a
//!     parser can register unknown commands it decides to keep.
//!
//!     Ids are dense and stable for the lifetime of a table: builtins first, registered
//!     commands after them in registration order. An id fits in the 16 bits the node layout
//!     reserves for it.

use super::ast::RenderKind;
use super::config::CommentOptions;
use super::error::CommandError;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CommandId(u16);

impl CommandId {
    pub fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Properties of one command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandInfo {
    pub id: CommandId,
    pub name: String,
    /// Closing command of a verbatim block (`endcode` for `code`)
    pub end_command_name: Option<String>,
    /// Number of word-like arguments the parser should collect
    pub num_args: u32,
    pub is_inline_command: bool,
    pub is_block_command: bool,
    pub is_brief_command: bool,
    pub is_returns_command: bool,
    pub is_param_command: bool,
    pub is_tparam_command: bool,
    pub is_verbatim_block_command: bool,
    pub is_verbatim_block_end_command: bool,
    pub is_verbatim_line_command: bool,
    pub is_unknown_command: bool,
}

#[derive(Clone, Copy)]
enum Shape {
    Inline,
    Block,
    Brief,
    Returns,
    Param,
    TParam,
    VerbatimBlock(&'static str),
    VerbatimBlockEnd,
    VerbatimLine,
}

const BUILTINS: &[(&str, u32, Shape)] = &[
    // inline
    ("b", 1, Shape::Inline),
    ("c", 1, Shape::Inline),
    ("p", 1, Shape::Inline),
    ("a", 1, Shape::Inline),
    ("e", 1, Shape::Inline),
    ("em", 1, Shape::Inline),
    // block
    ("brief", 0, Shape::Brief),
    ("short", 0, Shape::Brief),
    ("result", 0, Shape::Returns),
    ("return", 0, Shape::Returns),
    ("returns", 0, Shape::Returns),
    ("param", 0, Shape::Param),
    ("tparam", 0, Shape::TParam),
    ("author", 0, Shape::Block),
    ("authors", 0, Shape::Block),
    ("bug", 0, Shape::Block),
    ("copyright", 0, Shape::Block),
    ("date", 0, Shape::Block),
    ("details", 0, Shape::Block),
    ("deprecated", 0, Shape::Block),
    ("invariant", 0, Shape::Block),
    ("note", 0, Shape::Block),
    ("post", 0, Shape::Block),
    ("pre", 0, Shape::Block),
    ("remark", 0, Shape::Block),
    ("remarks", 0, Shape::Block),
    ("sa", 0, Shape::Block),
    ("see", 0, Shape::Block),
    ("since", 0, Shape::Block),
    ("todo", 0, Shape::Block),
    ("version", 0, Shape::Block),
    ("warning", 0, Shape::Block),
    ("throw", 1, Shape::Block),
    ("throws", 1, Shape::Block),
    ("exception", 1, Shape::Block),
    // verbatim blocks
    ("code", 0, Shape::VerbatimBlock("endcode")),
    ("endcode", 0, Shape::VerbatimBlockEnd),
    ("verbatim", 0, Shape::VerbatimBlock("endverbatim")),
    ("endverbatim", 0, Shape::VerbatimBlockEnd),
    ("htmlonly", 0, Shape::VerbatimBlock("endhtmlonly")),
    ("endhtmlonly", 0, Shape::VerbatimBlockEnd),
    ("latexonly", 0, Shape::VerbatimBlock("endlatexonly")),
    ("endlatexonly", 0, Shape::VerbatimBlockEnd),
    ("xmlonly", 0, Shape::VerbatimBlock("endxmlonly")),
    ("endxmlonly", 0, Shape::VerbatimBlockEnd),
    ("manonly", 0, Shape::VerbatimBlock("endmanonly")),
    ("endmanonly", 0, Shape::VerbatimBlockEnd),
    ("rtfonly", 0, Shape::VerbatimBlock("endrtfonly")),
    ("endrtfonly", 0, Shape::VerbatimBlockEnd),
    ("dot", 0, Shape::VerbatimBlock("enddot")),
    ("enddot", 0, Shape::VerbatimBlockEnd),
    ("msc", 0, Shape::VerbatimBlock("endmsc")),
    ("endmsc", 0, Shape::VerbatimBlockEnd),
    ("f[", 0, Shape::VerbatimBlock("f]")),
    ("f]", 0, Shape::VerbatimBlockEnd),
    ("f{", 0, Shape::VerbatimBlock("f}")),
    ("f}", 0, Shape::VerbatimBlockEnd),
    // verbatim lines
    ("fn", 0, Shape::VerbatimLine),
    ("defgroup", 0, Shape::VerbatimLine),
    ("ingroup", 0, Shape::VerbatimLine),
    ("addtogroup", 0, Shape::VerbatimLine),
    ("weakgroup", 0, Shape::VerbatimLine),
    ("name", 0, Shape::VerbatimLine),
    ("section", 0, Shape::VerbatimLine),
    ("subsection", 0, Shape::VerbatimLine),
    ("subsubsection", 0, Shape::VerbatimLine),
    ("paragraph", 0, Shape::VerbatimLine),
    ("mainpage", 0, Shape::VerbatimLine),
    ("subpage", 0, Shape::VerbatimLine),
    ("relates", 0, Shape::VerbatimLine),
    ("related", 0, Shape::VerbatimLine),
    ("relatesalso", 0, Shape::VerbatimLine),
    ("relatedalso", 0, Shape::VerbatimLine),
];

fn info_for(id: CommandId, name: &str, num_args: u32, shape: Shape) -> CommandInfo {
    let mut info = CommandInfo {
        id,
        name: name.to_string(),
        num_args,
        ..CommandInfo::default()
    };
    match shape {
        Shape::Inline => info.is_inline_command = true,
        Shape::Block => info.is_block_command = true,
        Shape::Brief => {
            info.is_block_command = true;
            info.is_brief_command = true;
        }
        Shape::Returns => {
            info.is_block_command = true;
            info.is_returns_command = true;
        }
        Shape::Param => {
            info.is_block_command = true;
            info.is_param_command = true;
        }
        Shape::TParam => {
            info.is_block_command = true;
            info.is_tparam_command = true;
        }
        Shape::VerbatimBlock(end) => {
            info.is_verbatim_block_command = true;
            info.end_command_name = Some(end.to_string());
        }
        Shape::VerbatimBlockEnd => info.is_verbatim_block_end_command = true,
        Shape::VerbatimLine => info.is_verbatim_line_command = true,
    }
    info
}

/// Id-indexed command table
#[derive(Debug, Clone)]
pub struct CommandTraits {
    commands: Vec<CommandInfo>,
    by_name: HashMap<String, CommandId>,
}

impl CommandTraits {
    /// Largest number of commands a table can hold
    pub const MAX_COMMANDS: usize = u16::MAX as usize + 1;

    pub fn new() -> Self {
        let mut commands = Vec::with_capacity(BUILTINS.len());
        let mut by_name = HashMap::with_capacity(BUILTINS.len());
        for (index, &(name, num_args, shape)) in BUILTINS.iter().enumerate() {
            let id = CommandId::from_raw(index as u16);
            commands.push(info_for(id, name, num_args, shape));
            by_name.insert(name.to_string(), id);
        }
        Self { commands, by_name }
    }

    /// Builtin table plus every block command named in `options`
    pub fn with_options(options: &CommentOptions) -> Result<Self, CommandError> {
        let mut traits = Self::new();
        for name in &options.block_command_names {
            traits.register_block_command(name)?;
        }
        Ok(traits)
    }

    pub fn command_info(&self, id: CommandId) -> Option<&CommandInfo> {
        self.commands.get(id.as_raw() as usize)
    }

    pub fn command_info_by_name(&self, name: &str) -> Option<&CommandInfo> {
        self.by_name
            .get(name)
            .and_then(|id| self.command_info(*id))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandInfo> {
        self.commands.iter()
    }

    /// Register a block command taking no word arguments. Returns the existing id if the
    /// name is already known.
    pub fn register_block_command(&mut self, name: &str) -> Result<CommandId, CommandError> {
        self.register(name, |info| info.is_block_command = true)
    }

    /// Register a command the parser did not recognize but keeps in the tree
    pub fn register_unknown_command(&mut self, name: &str) -> Result<CommandId, CommandError> {
        self.register(name, |info| info.is_unknown_command = true)
    }

    fn register(
        &mut self,
        name: &str,
        configure: impl FnOnce(&mut CommandInfo),
    ) -> Result<CommandId, CommandError> {
        if let Some(id) = self.by_name.get(name) {
            return Ok(*id);
        }
        if self.commands.len() >= Self::MAX_COMMANDS {
            return Err(CommandError::TableFull {
                name: name.to_string(),
                capacity: Self::MAX_COMMANDS,
            });
        }
        let id = CommandId::from_raw(self.commands.len() as u16);
        let mut info = CommandInfo {
            id,
            name: name.to_string(),
            ..CommandInfo::default()
        };
        configure(&mut info);
        log::trace!("registered command '{}' as #{}", name, id);
        self.commands.push(info);
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Rendering hint for an inline command name
    pub fn render_kind_for(name: &str) -> RenderKind {
        match name {
            "b" => RenderKind::Bold,
            "c" | "p" => RenderKind::Monospaced,
            "a" | "e" | "em" => RenderKind::Emphasized,
            _ => RenderKind::Normal,
        }
    }
}

impl Default for CommandTraits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("b", RenderKind::Bold)]
    #[case("c", RenderKind::Monospaced)]
    #[case("p", RenderKind::Monospaced)]
    #[case("a", RenderKind::Emphasized)]
    #[case("e", RenderKind::Emphasized)]
    #[case("em", RenderKind::Emphasized)]
    #[case("ref", RenderKind::Normal)]
    fn test_render_kind_defaults(#[case] name: &str, #[case] expected: RenderKind) {
        assert_eq!(CommandTraits::render_kind_for(name), expected);
    }

    #[test]
    fn test_ids_are_dense_and_match_lookup() {
        let traits = CommandTraits::new();
        for (index, info) in traits.iter().enumerate() {
            assert_eq!(info.id.as_raw() as usize, index);
            assert_eq!(traits.command_info_by_name(&info.name), Some(info));
        }
    }

    #[test]
    fn test_builtin_properties() {
        let traits = CommandTraits::new();
        let param = traits.command_info_by_name("param").unwrap();
        assert!(param.is_block_command && param.is_param_command);

        let code = traits.command_info_by_name("code").unwrap();
        assert!(code.is_verbatim_block_command);
        assert_eq!(code.end_command_name.as_deref(), Some("endcode"));
        assert!(
            traits
                .command_info_by_name("endcode")
                .unwrap()
                .is_verbatim_block_end_command
        );

        assert!(traits.command_info_by_name("fn").unwrap().is_verbatim_line_command);
        assert!(traits.command_info_by_name("em").unwrap().is_inline_command);
        assert_eq!(traits.command_info_by_name("throws").unwrap().num_args, 1);
        assert!(traits.command_info_by_name("nosuchcommand").is_none());
    }

    #[test]
    fn test_register_block_command_is_idempotent() {
        let mut traits = CommandTraits::new();
        let before = traits.len();
        let id = traits.register_block_command("myblock").unwrap();
        assert_eq!(traits.register_block_command("myblock").unwrap(), id);
        assert_eq!(traits.len(), before + 1);

        let info = traits.command_info(id).unwrap();
        assert_eq!(info.name, "myblock");
        assert!(info.is_block_command);
        assert!(!info.is_unknown_command);
    }

    #[test]
    fn test_register_existing_builtin_returns_builtin_id() {
        let mut traits = CommandTraits::new();
        let brief = traits.command_info_by_name("brief").unwrap().id;
        assert_eq!(traits.register_unknown_command("brief").unwrap(), brief);
    }

    #[test]
    fn test_register_unknown_command() {
        let mut traits = CommandTraits::new();
        let id = traits.register_unknown_command("frobnicate").unwrap();
        let info = traits.command_info(id).unwrap();
        assert!(info.is_unknown_command);
        assert!(!info.is_block_command);
    }

    #[test]
    fn test_with_options_registers_configured_names() {
        let options = CommentOptions {
            block_command_names: vec!["retval".to_string(), "complexity".to_string()],
            ..CommentOptions::default()
        };
        let traits = CommandTraits::with_options(&options).unwrap();
        assert!(traits.command_info_by_name("retval").unwrap().is_block_command);
        assert!(traits.command_info_by_name("complexity").is_some());
    }

    #[test]
    fn test_full_table_rejects_new_names() {
        let mut traits = CommandTraits::new();
        let mut next = 0;
        while traits.len() < CommandTraits::MAX_COMMANDS {
            traits.register_unknown_command(&format!("x{}", next)).unwrap();
            next += 1;
        }
        let last = traits.command_info_by_name(&format!("x{}", next - 1)).unwrap();
        assert_eq!(last.id.as_raw(), u16::MAX);

        assert_eq!(
            traits.register_block_command("overflow"),
            Err(CommandError::TableFull {
                name: "overflow".to_string(),
                capacity: CommandTraits::MAX_COMMANDS,
            })
        );
        assert!(traits.command_info_by_name("overflow").is_none());
        // known names still resolve once the table is full
        let brief = traits.command_info_by_name("brief").unwrap().id;
        assert_eq!(traits.register_block_command("brief"), Ok(brief));
    }
}
