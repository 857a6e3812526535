//! Data models and types for the simulator.
//!
//! Contains domain types for:
//! - [`FsNode`], [`Children`] - Virtual filesystem tree
//! - [`TerminalLine`] - Terminal transcript lines

mod filesystem;
mod terminal;

pub use filesystem::{Children, FsNode};
pub use terminal::TerminalLine;
