//! Command execution result type.

use crate::core::FileSystem;

/// Result of executing a command.
///
/// Failures are ordinary output lines; the caller cannot (and need not)
/// tell them apart from regular output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<String>,
    /// Filesystem to use for the next command
    pub fs: FileSystem,
    /// Discard all previously displayed lines
    pub clear_screen: bool,
}

impl CommandResult {
    /// Create a result with output and the given filesystem.
    pub fn output(fs: FileSystem, lines: Vec<String>) -> Self {
        Self {
            output: lines,
            fs,
            clear_screen: false,
        }
    }

    /// Create a result with no output.
    pub fn silent(fs: FileSystem) -> Self {
        Self::output(fs, vec![])
    }

    /// Create a result asking the caller to clear the screen.
    pub fn clear(fs: FileSystem) -> Self {
        Self {
            output: vec![],
            fs,
            clear_screen: true,
        }
    }
}
