//! Tab autocomplete functionality for terminal commands and paths.
//!
//! This module provides autocompletion for:
//! - Command names (e.g., "cl" -> "clear")
//! - Directory paths for `cd`, `ls`, `mkdir`
//! - File and directory paths for `cat`, `touch`, `rm`
//!
//! The autocomplete system supports:
//! - Single match: Complete immediately
//! - Multiple matches: Show common prefix and all options
//! - Ghost text hints while typing
//!
//! Path matching is case-sensitive, like the filesystem itself.

use crate::core::{Command, FileSystem};

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single exact match - replace the input with this line.
    Single(String),
    /// Multiple matches - (input extended by the common prefix, display names).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands whose argument must be a directory.
const DIR_COMMANDS: &[&str] = &["cd", "ls", "mkdir"];

/// Commands that take any path.
const PATH_COMMANDS: &[&str] = &["cat", "touch", "rm"];

// ============================================================================
// Completion Context
// ============================================================================

/// Determines what type of completion is needed for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionMode {
    /// Complete command names only.
    Command,
    /// Complete directory paths.
    DirectoryPath,
    /// Complete file and directory paths.
    AnyPath,
    /// No completion available.
    None,
}

impl CompletionMode {
    /// Determine completion mode from input.
    ///
    /// Returns the mode, the text before the word being completed, and the
    /// word itself.
    fn from_input(input: &str) -> (Self, &str, &str) {
        let Some(idx) = input.rfind(' ') else {
            return (Self::Command, "", input);
        };
        let (head, word) = input.split_at(idx + 1);

        let cmd = head
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let mode = if DIR_COMMANDS.contains(&cmd.as_str()) {
            Self::DirectoryPath
        } else if PATH_COMMANDS.contains(&cmd.as_str()) {
            Self::AnyPath
        } else {
            Self::None
        };

        (mode, head, word)
    }

    /// Returns true if this mode only matches directories.
    fn dirs_only(self) -> bool {
        matches!(self, Self::DirectoryPath)
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Parsed path components for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Filename/directory name being completed.
    name_part: &'a str,
    /// Resolved search directory path.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    /// Parse a partial path and resolve the search directory.
    fn parse(partial: &'a str, fs: &FileSystem) -> Option<Self> {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => partial.split_at(idx + 1),
            None => ("", partial),
        };

        let search_dir = match dir_part {
            "" => fs.current_path().to_string(),
            "/" => "/".to_string(),
            _ => fs.resolve_path(dir_part.trim_end_matches('/')),
        };
        if !fs.is_directory(&search_dir) {
            return None;
        }

        Some(Self {
            dir_part,
            name_part,
            search_dir,
        })
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
///
/// Returns a completion result based on the current input and filesystem state.
pub fn autocomplete(input: &str, fs: &FileSystem) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let (mode, head, word) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => complete_command(word),
        CompletionMode::DirectoryPath | CompletionMode::AnyPath => {
            complete_path(head, word, fs, mode.dirs_only())
        }
        CompletionMode::None => AutocompleteResult::None,
    }
}

/// Get autocomplete suggestion for ghost text hint (while typing).
///
/// Returns the suffix that would complete the current input.
pub fn get_hint(input: &str, fs: &FileSystem) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let (mode, _, word) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => get_command_hint(word),
        CompletionMode::DirectoryPath | CompletionMode::AnyPath => {
            get_path_hint(word, fs, mode.dirs_only())
        }
        CompletionMode::None => None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

/// Complete command name.
fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

/// Get hint for command name completion.
fn get_command_hint(partial: &str) -> Option<String> {
    let partial_lower = partial.to_lowercase();
    Command::names()
        .iter()
        .find(|cmd| cmd.starts_with(&partial_lower) && **cmd != partial_lower)
        .map(|cmd| cmd[partial_lower.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

/// Complete file/directory path.
fn complete_path(head: &str, partial: &str, fs: &FileSystem, dirs_only: bool) -> AutocompleteResult {
    let Some(parsed) = ParsedPath::parse(partial, fs) else {
        return AutocompleteResult::None;
    };

    let matches = get_matching_entries(fs, &parsed, dirs_only);
    build_path_result(head, &parsed, matches)
}

/// Get hint for path completion.
fn get_path_hint(partial: &str, fs: &FileSystem, dirs_only: bool) -> Option<String> {
    let parsed = ParsedPath::parse(partial, fs)?;
    let matches = get_matching_entries(fs, &parsed, dirs_only);

    // First match that extends current input
    matches
        .iter()
        .find(|(name, _)| name != parsed.name_part)
        .map(|(name, is_dir)| {
            let suffix = if *is_dir { "/" } else { "" };
            format!("{}{}", &name[parsed.name_part.len()..], suffix)
        })
}

/// Sorted `(name, is_dir)` entries of the search directory matching the
/// partial name.
///
/// Hidden entries only match when the partial name starts with `.`.
fn get_matching_entries(
    fs: &FileSystem,
    parsed: &ParsedPath,
    dirs_only: bool,
) -> Vec<(String, bool)> {
    let Some(children) = fs.get_node(&parsed.search_dir).and_then(|n| n.children()) else {
        return Vec::new();
    };
    let show_hidden = parsed.name_part.starts_with('.');

    children
        .values()
        .filter(|node| show_hidden || !node.is_hidden())
        .filter(|node| !dirs_only || node.is_directory())
        .filter(|node| node.name().starts_with(parsed.name_part))
        .map(|node| (node.name().to_string(), node.is_directory()))
        .collect()
}

/// Build the autocomplete result from matched entries.
fn build_path_result(
    head: &str,
    parsed: &ParsedPath,
    matches: Vec<(String, bool)>,
) -> AutocompleteResult {
    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{}{}{}{}", head, parsed.dir_part, name, suffix))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|(name, _)| name.clone()).collect();
            let common = find_common_prefix(&names);

            let display_names = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.clone()
                    }
                })
                .collect();

            AutocompleteResult::Multiple(
                format!("{}{}{}", head, parsed.dir_part, common),
                display_names,
            )
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings.
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in rest {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((idx, a), b)| *idx < prefix_len && a == b)
            .map(|((idx, a), _)| idx + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================
