//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `process_command` for running one input line against a filesystem
//! - `prompt` for the prompt shown before the next line
//!
//! # Architecture
//!
//! Input lines are split by the parser, turned into a `Command`, then run
//! by `execute_command`. Each run is a pure function of the filesystem and
//! the line: the new filesystem travels back inside the `CommandResult`.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use log::debug;

use crate::config::{PROMPT_HOST, USER_NAME};
use crate::core::FileSystem;
use crate::core::parser::parse_input;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored exactly as typed: error messages echo it back unresolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    /// Create a new path argument from a string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pwd,
    /// List directory contents
    Ls {
        path: Option<PathArg>,
        /// `-a`: include dotfiles
        all: bool,
        /// `-l`: one entry per line with mode and owner
        long: bool,
    },
    Cd(PathArg),
    Cat(Option<PathArg>),
    Touch(Option<PathArg>),
    Mkdir(Option<PathArg>),
    Rm {
        path: Option<PathArg>,
        recursive: bool,
    },
    Echo(String),
    Clear,
    Help,
    Whoami,
    Hostname,
    /// Blank input line
    Empty,
    Unknown(String),
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "cat", "cd", "clear", "echo", "help", "hostname", "ls", "mkdir", "pwd", "rm", "touch",
            "whoami",
        ]
    }

    /// Parse command from a lower-cased name and its arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "" => Self::Empty,
            "pwd" => Self::Pwd,
            "ls" => {
                let mut all = false;
                let mut long = false;
                let mut path = None;
                for arg in args {
                    if !arg.starts_with('-') {
                        path = Some(PathArg::new(arg));
                    } else if let Some(flags) = short_flags(arg) {
                        all |= flags.contains('a');
                        long |= flags.contains('l');
                    }
                }
                Self::Ls { path, all, long }
            }
            "cd" => Self::Cd(
                args.first()
                    .map(PathArg::new)
                    .unwrap_or_else(|| PathArg::new("~")),
            ),
            "cat" => Self::Cat(args.first().map(PathArg::new)),
            "touch" => Self::Touch(args.first().map(PathArg::new)),
            "mkdir" => Self::Mkdir(args.first().map(PathArg::new)),
            "rm" => {
                let (flags, operands): (Vec<&String>, Vec<&String>) =
                    args.iter().partition(|arg| arg.starts_with('-'));
                Self::Rm {
                    path: operands.first().map(|arg| PathArg::new(arg.as_str())),
                    recursive: flags.iter().any(|flag| {
                        flag.as_str() == "--recursive"
                            || short_flags(flag).is_some_and(|group| group.contains(['r', 'R']))
                    }),
                }
            }
            "echo" => Self::Echo(args.join(" ")),
            "clear" => Self::Clear,
            "help" => Self::Help,
            "whoami" => Self::Whoami,
            "hostname" => Self::Hostname,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Letters of a short option group like `-rf`; `None` for `--long` options.
fn short_flags(arg: &str) -> Option<&str> {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => Some(rest),
        _ => None,
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Run one input line against a filesystem.
///
/// Always succeeds; errors come back as output lines. The input filesystem
/// is never modified.
pub fn process_command(fs: &FileSystem, input: &str) -> CommandResult {
    let parsed = parse_input(input);
    let cmd = Command::parse(&parsed.name, &parsed.args);
    debug!("{} in {}: {:?}", USER_NAME, fs.current_path(), cmd);
    execute_command(cmd, fs)
}

/// Prompt for the next input line, e.g. `learner@linux:~/documents$`.
pub fn prompt(fs: &FileSystem) -> String {
    format!("{}@{}:{}$", USER_NAME, PROMPT_HOST, fs.display_path())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(
            Command::parse("ls", &[]),
            Command::Ls {
                path: None,
                all: false,
                long: false
            }
        );
        assert!(matches!(
            Command::parse("ls", &args(&["-la", "projects"])),
            Command::Ls { path: Some(ref p), all: true, long: true } if p == &"projects"
        ));
        assert!(matches!(
            Command::parse("ls", &args(&["-a", "-l"])),
            Command::Ls {
                path: None,
                all: true,
                long: true
            }
        ));
        assert!(matches!(
            Command::parse("ls", &args(&["-l"])),
            Command::Ls {
                path: None,
                all: false,
                long: true
            }
        ));
    }

    #[test]
    fn test_parse_ls_last_path_wins() {
        assert!(matches!(
            Command::parse("ls", &args(&["documents", "projects"])),
            Command::Ls { path: Some(ref p), .. } if p == &"projects"
        ));
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(
            Command::parse("cd", &[]),
            Command::Cd(ref p) if p == &"~"
        ));
        assert!(matches!(
            Command::parse("cd", &args(&["/etc"])),
            Command::Cd(ref p) if p == &"/etc"
        ));
    }

    #[test]
    fn test_parse_missing_operands() {
        assert_eq!(Command::parse("cat", &[]), Command::Cat(None));
        assert_eq!(Command::parse("touch", &[]), Command::Touch(None));
        assert_eq!(Command::parse("mkdir", &[]), Command::Mkdir(None));
        assert_eq!(
            Command::parse("rm", &args(&["-r"])),
            Command::Rm {
                path: None,
                recursive: true
            }
        );
    }

    #[test]
    fn test_parse_rm_flags_anywhere() {
        for line in [&["-r", "dir"][..], &["dir", "-rf"], &["-R", "dir"], &["-fr", "dir"]] {
            assert_eq!(
                Command::parse("rm", &args(line)),
                Command::Rm {
                    path: Some(PathArg::new("dir")),
                    recursive: true
                }
            );
        }
        assert_eq!(
            Command::parse("rm", &args(&["-f", "file"])),
            Command::Rm {
                path: Some(PathArg::new("file")),
                recursive: false
            }
        );
    }

    #[test]
    fn test_parse_rm_long_options_not_recursive() {
        for flag in ["--force", "--dir", "--verbose", "--preserve-root"] {
            assert_eq!(
                Command::parse("rm", &args(&[flag, "documents"])),
                Command::Rm {
                    path: Some(PathArg::new("documents")),
                    recursive: false
                },
                "{flag}"
            );
        }
        assert_eq!(
            Command::parse("rm", &args(&["--recursive", "documents"])),
            Command::Rm {
                path: Some(PathArg::new("documents")),
                recursive: true
            }
        );
    }

    #[test]
    fn test_parse_ls_ignores_long_options() {
        assert_eq!(
            Command::parse("ls", &args(&["--color", "documents"])),
            Command::Ls {
                path: Some(PathArg::new("documents")),
                all: false,
                long: false
            }
        );
    }

    #[test]
    fn test_parse_echo_joins() {
        assert_eq!(
            Command::parse("echo", &args(&["\"Hello,", "Terminal!\""])),
            Command::Echo("\"Hello, Terminal!\"".to_string())
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("", &[]), Command::Empty);
        assert_eq!(Command::parse("pwd", &[]), Command::Pwd);
        assert_eq!(Command::parse("clear", &[]), Command::Clear);
        assert_eq!(Command::parse("help", &[]), Command::Help);
        assert_eq!(Command::parse("whoami", &[]), Command::Whoami);
        assert_eq!(Command::parse("hostname", &[]), Command::Hostname);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("foobar", &[]),
            Command::Unknown("foobar".to_string())
        );
    }

    #[test]
    fn test_command_names_cover_dispatch() {
        for name in Command::names() {
            assert!(
                !matches!(Command::parse(name, &[]), Command::Unknown(_)),
                "{name} should be dispatched"
            );
        }
    }

    #[test]
    fn test_process_command_case_insensitive() {
        let fs = FileSystem::initial();
        assert_eq!(process_command(&fs, "PWD").output, vec!["/home/learner"]);
    }

    #[test]
    fn test_prompt() {
        let fs = FileSystem::initial();
        assert_eq!(prompt(&fs), "learner@linux:~$");
        let fs = fs.change_directory("documents");
        assert_eq!(prompt(&fs), "learner@linux:~/documents$");
        let fs = fs.change_directory("/etc");
        assert_eq!(prompt(&fs), "learner@linux:/etc$");
        let fs = fs.change_directory("/");
        assert_eq!(prompt(&fs), "learner@linux:/$");
    }
}
