//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use log::warn;

use crate::config::{DIR_MODE, FILE_MODE, HELP_TEXT, HOST_NAME, USER_NAME};
use crate::core::error::{Reason, ShellError};
use crate::core::parser::strip_quotes;
use crate::core::{FileSystem, path};
use crate::models::FsNode;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command.
///
/// Failures are rendered into a single output line and the filesystem is
/// returned unchanged.
pub fn execute_command(cmd: Command, fs: &FileSystem) -> CommandResult {
    let result = match cmd {
        Command::Pwd => Ok(lines(fs, [fs.current_path()])),
        Command::Ls { path, all, long } => execute_ls(path, all, long, fs),
        Command::Cd(path) => execute_cd(path, fs),
        Command::Cat(file) => execute_cat(file, fs),
        Command::Touch(file) => execute_touch(file, fs),
        Command::Mkdir(dir) => execute_mkdir(dir, fs),
        Command::Rm { path, recursive } => execute_rm(path, recursive, fs),
        Command::Echo(text) => Ok(lines(fs, [strip_quotes(&text)])),
        Command::Clear => Ok(CommandResult::clear(fs.clone())),
        Command::Help => Ok(lines(fs, HELP_TEXT.lines())),
        Command::Whoami => Ok(lines(fs, [USER_NAME])),
        Command::Hostname => Ok(lines(fs, [HOST_NAME])),
        Command::Empty => Ok(CommandResult::silent(fs.clone())),
        Command::Unknown(name) => Err(ShellError::CommandNotFound(name)),
    };

    result.unwrap_or_else(|err| CommandResult::output(fs.clone(), vec![err.to_string()]))
}

/// Output lines with the filesystem unchanged.
fn lines<S: AsRef<str>>(fs: &FileSystem, text: impl IntoIterator<Item = S>) -> CommandResult {
    CommandResult::output(
        fs.clone(),
        text.into_iter().map(|s| s.as_ref().to_string()).collect(),
    )
}

/// Execute `ls` command.
fn execute_ls(
    path: Option<PathArg>,
    all: bool,
    long: bool,
    fs: &FileSystem,
) -> Result<CommandResult, ShellError> {
    let target = path.as_ref().map(PathArg::as_str).unwrap_or(".");
    let resolved = fs.resolve_path(target);

    let node = fs
        .get_node(&resolved)
        .ok_or_else(|| ShellError::CannotAccess(target.to_string()))?;
    let FsNode::Directory { children, .. } = node else {
        return Ok(lines(fs, [node.name()]));
    };

    let entries: Vec<&FsNode> = fs
        .list_directory(&resolved, all)
        .iter()
        .filter_map(|name| children.get(name))
        .map(|node| &**node)
        .collect();
    if entries.is_empty() {
        return Ok(CommandResult::silent(fs.clone()));
    }

    let output = if long {
        entries.iter().map(|entry| long_entry(entry)).collect()
    } else {
        let names: Vec<String> = entries.iter().map(|entry| short_entry(entry)).collect();
        vec![names.join("  ")]
    };
    Ok(CommandResult::output(fs.clone(), output))
}

/// `name/` for directories, `name` for files.
fn short_entry(entry: &FsNode) -> String {
    if entry.is_directory() {
        format!("{}/", entry.name())
    } else {
        entry.name().to_string()
    }
}

/// One `ls -l` line: mode, owner, group, size (files only) and name.
fn long_entry(entry: &FsNode) -> String {
    if entry.is_directory() {
        format!(
            "{}  {}  {}  {}/",
            DIR_MODE,
            USER_NAME,
            USER_NAME,
            entry.name()
        )
    } else {
        format!(
            "{}  {}  {}  {:>4}  {}",
            FILE_MODE,
            USER_NAME,
            USER_NAME,
            entry.size(),
            entry.name()
        )
    }
}

/// Execute `cd` command.
fn execute_cd(path: PathArg, fs: &FileSystem) -> Result<CommandResult, ShellError> {
    match fs.get_node(path.as_str()) {
        Some(FsNode::Directory { .. }) => {
            Ok(CommandResult::silent(fs.change_directory(path.as_str())))
        }
        Some(FsNode::File { .. }) => Err(ShellError::NotADirectory {
            cmd: "cd",
            path: path.to_string(),
        }),
        None => Err(ShellError::NotFound {
            cmd: "cd",
            path: path.to_string(),
        }),
    }
}

/// Execute `cat` command.
fn execute_cat(file: Option<PathArg>, fs: &FileSystem) -> Result<CommandResult, ShellError> {
    let file = file.ok_or(ShellError::MissingOperand {
        cmd: "cat",
        operand: "file operand",
    })?;

    match fs.get_node(file.as_str()) {
        Some(FsNode::File { content, .. }) => Ok(lines(fs, content_lines(content))),
        Some(FsNode::Directory { .. }) => Err(ShellError::IsADirectory {
            cmd: "cat",
            path: file.to_string(),
        }),
        None => Err(ShellError::NotFound {
            cmd: "cat",
            path: file.to_string(),
        }),
    }
}

/// Split file content on `\n`, dropping the empty piece after a final newline.
fn content_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Execute `touch` command.
fn execute_touch(file: Option<PathArg>, fs: &FileSystem) -> Result<CommandResult, ShellError> {
    let file = file.ok_or(ShellError::MissingOperand {
        cmd: "touch",
        operand: "file operand",
    })?;

    let resolved = fs.resolve_path(file.as_str());
    if !fs.is_directory(&path::parent_path(&resolved)) {
        return Err(ShellError::CannotTouch(file.to_string()));
    }

    if fs.path_exists(&resolved) {
        return Ok(CommandResult::silent(fs.clone()));
    }
    Ok(CommandResult::silent(fs.create_file(&resolved, "")))
}

/// Execute `mkdir` command.
fn execute_mkdir(dir: Option<PathArg>, fs: &FileSystem) -> Result<CommandResult, ShellError> {
    let dir = dir.ok_or(ShellError::MissingOperand {
        cmd: "mkdir",
        operand: "operand",
    })?;

    let resolved = fs.resolve_path(dir.as_str());
    if fs.path_exists(&resolved) {
        return Err(ShellError::CannotCreate {
            path: dir.to_string(),
            reason: Reason::FileExists,
        });
    }

    let parent = path::parent_path(&resolved);
    if !fs.is_directory(&parent) {
        return Err(ShellError::CannotCreate {
            path: dir.to_string(),
            reason: Reason::NoSuchFile,
        });
    }

    Ok(CommandResult::silent(fs.create_directory(&resolved)))
}

/// Execute `rm` command.
fn execute_rm(
    target: Option<PathArg>,
    recursive: bool,
    fs: &FileSystem,
) -> Result<CommandResult, ShellError> {
    let target = target.ok_or(ShellError::MissingOperand {
        cmd: "rm",
        operand: "operand",
    })?;

    let resolved = fs.resolve_path(target.as_str());
    let cannot_remove = |reason| ShellError::CannotRemove {
        path: target.to_string(),
        reason,
    };

    let node = fs
        .get_node(&resolved)
        .ok_or_else(|| cannot_remove(Reason::NoSuchFile))?;

    if resolved == "/" {
        warn!("rm refused on the root directory");
        return Err(ShellError::RemoveRoot);
    }
    if path::is_ancestor_or_self(&resolved, fs.home_dir()) {
        warn!("rm refused on {}, which contains the home directory", resolved);
        return Err(cannot_remove(Reason::PermissionDenied));
    }
    if node.is_directory() && !recursive {
        return Err(cannot_remove(Reason::IsDirectoryNeedsRecursive));
    }

    Ok(CommandResult::silent(fs.remove(&resolved)))
}
