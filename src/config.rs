//! Simulator configuration.
//!
//! Centralizes the constants used throughout the crate.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Lines shown when a terminal session starts or is reset.
pub const WELCOME_LINES: &[&str] = &[
    "Welcome to Linux Terminal Simulator!",
    "Type 'help' to see available commands.",
    "",
];

// =============================================================================
// Identity
// =============================================================================

/// Login name reported by `whoami` and used as file owner in `ls -l`.
pub const USER_NAME: &str = "learner";

/// Machine name reported by `hostname`.
pub const HOST_NAME: &str = "linux-learning";

/// Short host label shown in the prompt.
pub const PROMPT_HOST: &str = "linux";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Home directory of the simulated user.
pub const HOME_DIR: &str = "/home/learner";

/// Mode string shown by `ls -l` for directories.
pub const DIR_MODE: &str = "drwxr-xr-x";

/// Mode string shown by `ls -l` for regular files.
pub const FILE_MODE: &str = "-rw-r--r--";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of transcript lines a session keeps.
pub const MAX_TRANSCRIPT_LINES: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Marker appended to an input line abandoned with Ctrl+C.
pub const INTERRUPT_MARKER: &str = "^C";
