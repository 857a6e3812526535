//! Core business logic for the terminal simulator.
//!
//! This module provides:
//! - [`FileSystem`] virtual filesystem with copy-on-write mutations
//! - [`Command`] parsing and [`process_command`] execution
//! - [`Session`] transcript and history for an interactive front end
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
pub mod parser;
pub mod path;
mod session;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{Command, CommandResult, PathArg, execute_command, process_command, prompt};
pub use error::{ShellError, SnapshotError};
pub use filesystem::FileSystem;
pub use parser::parse_input;
pub use session::Session;
