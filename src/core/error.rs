//! Error types for the simulator.
//!
//! - [`ShellError`] - command failures, rendered as shell-style output lines
//! - [`SnapshotError`] - loading a filesystem snapshot from JSON

use std::fmt;

use thiserror::Error;

/// Why an operation on a named path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NoSuchFile,
    FileExists,
    /// A directory given to `rm` without a recursive flag
    IsDirectoryNeedsRecursive,
    PermissionDenied,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchFile => write!(f, "No such file or directory"),
            Self::FileExists => write!(f, "File exists"),
            Self::IsDirectoryNeedsRecursive => write!(f, "Is a directory (use -r to remove)"),
            Self::PermissionDenied => write!(f, "Permission denied"),
        }
    }
}

/// A command failure.
///
/// The `Display` form is exactly the line shown to the user. Paths are kept
/// as typed, not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{cmd}: missing {operand}")]
    MissingOperand {
        cmd: &'static str,
        operand: &'static str,
    },
    #[error("{cmd}: {path}: No such file or directory")]
    NotFound { cmd: &'static str, path: String },
    #[error("{cmd}: {path}: Not a directory")]
    NotADirectory { cmd: &'static str, path: String },
    #[error("{cmd}: {path}: Is a directory")]
    IsADirectory { cmd: &'static str, path: String },
    #[error("ls: cannot access '{0}': No such file or directory")]
    CannotAccess(String),
    #[error("touch: cannot touch '{0}': No such file or directory")]
    CannotTouch(String),
    #[error("mkdir: cannot create directory '{path}': {reason}")]
    CannotCreate { path: String, reason: Reason },
    #[error("rm: cannot remove '{path}': {reason}")]
    CannotRemove { path: String, reason: Reason },
    #[error("rm: it is dangerous to operate recursively on '/'")]
    RemoveRoot,
    #[error("{0}: command not found. Type 'help' for available commands.")]
    CommandNotFound(String),
}

/// Errors from loading a filesystem snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot root must be a directory named \"\"")]
    InvalidRoot,
    #[error("entry '{key}' is named '{name}'")]
    NameMismatch { key: String, name: String },
    #[error("invalid entry name '{0}'")]
    InvalidName(String),
    #[error("path '{0}' is not absolute and normalized")]
    NonCanonicalPath(String),
    #[error("'{0}' is not an existing directory")]
    NotADirectory(String),
}
