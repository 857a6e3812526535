//! Virtual filesystem and command interpreter behind a Linux terminal
//! simulator for teaching shell basics.
//!
//! The filesystem is an immutable value: every command takes the current
//! [`FileSystem`] and returns output lines plus the next one.
//!
//! ```
//! use learnsh::{FileSystem, process_command};
//!
//! let fs = FileSystem::initial();
//! let result = process_command(&fs, "mkdir learning");
//! assert!(result.fs.is_directory("/home/learner/learning"));
//! assert!(!fs.path_exists("/home/learner/learning"));
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    AutocompleteResult, Command, CommandResult, FileSystem, Session, ShellError, SnapshotError,
    autocomplete, get_hint, process_command, prompt,
};
pub use crate::core::path::resolve_path;
pub use crate::models::{FsNode, TerminalLine};
