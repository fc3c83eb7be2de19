//! Comment options
//!
//! `defaults/comment-options.default.yaml` is embedded so that the documented defaults and
//! [`CommentOptions::default`] stay in sync. User documents are read on top of those
//! defaults: any key they leave out keeps its default value.

use super::commands::CommandTraits;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};

const DEFAULT_YAML: &str = include_str!("../../defaults/comment-options.default.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentOptions {
    /// Extra block commands registered on top of the builtin table
    pub block_command_names: Vec<String>,
    /// Treat ordinary comments as documentation comments. Read by the comment scanner that
    /// feeds this crate; the tree itself does not depend on it.
    pub parse_all_comments: bool,
}

impl CommentOptions {
    /// Options from the embedded defaults document
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_yaml_str(DEFAULT_YAML)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let options: CommentOptions = serde_yaml::from_str(source)?;
        log::debug!(
            "loaded comment options: {} extra block command(s), parse_all_comments={}",
            options.block_command_names.len(),
            options.parse_all_comments
        );
        Ok(options)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Command table for these options
    pub fn command_traits(&self) -> Result<CommandTraits, ConfigError> {
        Ok(CommandTraits::with_options(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::error::CommandError;

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        assert_eq!(CommentOptions::defaults().unwrap(), CommentOptions::default());
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let options = CommentOptions::from_yaml_str("parse_all_comments: true\n").unwrap();
        assert!(options.parse_all_comments);
        assert!(options.block_command_names.is_empty());
    }

    #[test]
    fn test_block_command_names() {
        let options =
            CommentOptions::from_yaml_str("block_command_names:\n  - retval\n  - complexity\n")
                .unwrap();
        assert_eq!(options.block_command_names, vec!["retval", "complexity"]);
        assert!(!options.parse_all_comments);
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = CommentOptions::from_yaml_str("block_command_names: 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid comment options"));
    }

    #[test]
    fn test_command_traits_from_yaml() {
        let traits = CommentOptions::from_yaml_str("block_command_names:\n  - retval\n")
            .unwrap()
            .command_traits()
            .unwrap();
        assert!(traits.command_info_by_name("retval").unwrap().is_block_command);
    }

    #[test]
    fn test_too_many_block_commands_is_command_error() {
        let options = CommentOptions {
            block_command_names: (0..CommandTraits::MAX_COMMANDS)
                .map(|i| format!("extra{}", i))
                .collect(),
            ..CommentOptions::default()
        };
        let err = options.command_traits().unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::Command(CommandError::TableFull { capacity, .. })
                if *capacity == CommandTraits::MAX_COMMANDS
        ));
        assert!(err.to_string().contains("command table is full"));
    }
}
