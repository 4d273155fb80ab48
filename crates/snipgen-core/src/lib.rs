//! snipgen - helpers for authoring editor snippets.
//!
//! Wraps a block of text into a JSON snippet definition, merges definitions
//! into per-language snippet files, and converts text into an array literal
//! of quoted lines for pasting into source code.

pub mod array_literal;
pub mod config;
pub mod error;
pub mod input;
pub mod lines;
pub mod prefix;
pub mod snippet;
pub mod snippet_file;

// Re-export common items for convenience
pub use array_literal::{decode, encode};
pub use config::Config;
pub use error::{Result, SnipgenError};
pub use input::Input;
pub use lines::split_lines;
pub use prefix::{default_strategy, Initials, KebabCase, PrefixStrategy, Verbatim};
pub use snippet::{SnippetBody, SnippetRecord};
pub use snippet_file::{file_name, SnippetFile};
