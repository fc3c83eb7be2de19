//! # doc-comment-ast
//!
//! In-memory representation of parsed documentation comments.
//!
//! File Layout
//!
//! The lexer and parser that scan raw comment text live outside this crate. What lives here is
//! the tree they build and the contracts that tree satisfies, plus the small amount of
//! bookkeeping needed to bind `\param` and `\tparam` references to the documented declaration.
//!
//! src/comments
//!   ├── ast          Node kinds, packed attribute bits, elements, traversal, snapshots
//!   ├── commands     Command name table keyed by numeric id
//!   ├── decl_info    Declaration binding model (lazy fill)
//!   ├── resolve      \param / \tparam resolution against DeclInfo
//!   ├── config       Comment options (extra block command names)
//!   ├── error        Diagnostics for resolution, options and tree checks
//!   └── testing      Factories and fluent assertions for tests
//!
//! For testing guidelines, see the [testing module](comments::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod comments;
