//! `stocklist-shell`
//!
//! Terminal front end for the inventory editor: renders the projected table
//! with comfy-table and maps typed commands onto [`EditorSession`] calls.
//! The shell owns no inventory state of its own.
//!
//! [`EditorSession`]: stocklist_inventory::EditorSession

pub mod cli;
pub mod command;
pub mod render;
pub mod repl;

pub use cli::{Cli, ShellConfig};
pub use command::{Command, ParseError, RowRef};
pub use repl::{Flow, Shell, ShellError};
