//! Comment node types
//!
//! One file per node variant. Inline content: text, inline commands and HTML tags. Block
//! content: paragraphs, block commands and their specializations. The root full comment.

pub mod argument;
pub mod block_command;
pub mod comment;
pub mod full_comment;
pub mod html_tag;
pub mod inline_command;
pub mod paragraph;
pub mod param_command;
pub mod text;
pub mod tparam_command;
pub mod verbatim;

pub use argument::Argument;
pub use block_command::BlockCommandComment;
pub use comment::Comment;
pub use full_comment::FullComment;
pub use html_tag::{HtmlAttribute, HtmlEndTagComment, HtmlStartTagComment};
pub use inline_command::{InlineCommandComment, RenderKind};
pub use paragraph::ParagraphComment;
pub use param_command::{ParamCommandComment, PassDirection};
pub use text::TextComment;
pub use tparam_command::TParamCommandComment;
pub use verbatim::{VerbatimBlockComment, VerbatimBlockLineComment, VerbatimLineComment};
