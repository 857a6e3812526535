//! In-memory virtual filesystem.
//!
//! A [`FileSystem`] is an immutable value: the root tree, the working
//! directory and the home directory. Lookups take any user path and resolve
//! it against the working directory first; mutations (see `mutate.rs`)
//! return a new value and leave the receiver untouched.

mod mutate;
mod seed;
mod snapshot;

use std::sync::Arc;

use serde::Serialize;

use crate::core::path;
use crate::models::FsNode;

/// Virtual filesystem state for one terminal session.
///
/// # Invariants
///
/// - `root` is a directory named `""`
/// - `current_path` and `home_dir` are resolved paths of existing directories
///
/// Cloning is cheap: the tree is shared until a mutation copies the nodes
/// along the edited path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystem {
    root: Arc<FsNode>,
    current_path: String,
    home_dir: String,
}

impl FileSystem {
    /// Root directory node.
    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Working directory (resolved).
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Home directory (resolved).
    pub fn home_dir(&self) -> &str {
        &self.home_dir
    }

    /// Resolve a path against the working and home directories.
    ///
    /// Never fails; the result may not exist.
    pub fn resolve_path(&self, input: &str) -> String {
        path::resolve_path(&self.current_path, &self.home_dir, input)
    }

    /// Working directory with the home prefix shown as `~`.
    pub fn display_path(&self) -> String {
        path::display_path(&self.current_path, &self.home_dir)
    }

    /// Get the node at a path.
    ///
    /// Returns `None` if a segment is missing or a file sits where a
    /// directory is needed.
    pub fn get_node(&self, path: &str) -> Option<&FsNode> {
        let resolved = self.resolve_path(path);
        let mut current = self.root.as_ref();

        for segment in path::segments(&resolved) {
            match current {
                FsNode::Directory { children, .. } => {
                    current = children.get(segment)?;
                }
                FsNode::File { .. } => return None,
            }
        }

        Some(current)
    }

    /// Check if a path exists.
    pub fn path_exists(&self, path: &str) -> bool {
        self.get_node(path).is_some()
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        matches!(self.get_node(path), Some(FsNode::Directory { .. }))
    }

    /// Check if a path is a file.
    pub fn is_file(&self, path: &str) -> bool {
        matches!(self.get_node(path), Some(FsNode::File { .. }))
    }

    /// List the names in a directory, sorted.
    ///
    /// Names starting with `.` are skipped unless `show_hidden` is set.
    /// Anything that is not a directory lists as empty.
    pub fn list_directory(&self, path: &str, show_hidden: bool) -> Vec<String> {
        let Some(children) = self.get_node(path).and_then(FsNode::children) else {
            return Vec::new();
        };

        // BTreeMap iteration is already in name order
        children
            .keys()
            .filter(|name| show_hidden || !name.starts_with('.'))
            .cloned()
            .collect()
    }

    /// Get the content of a file.
    pub fn read_file(&self, path: &str) -> Option<&str> {
        self.get_node(path)?.content()
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_node_root() {
        let fs = FileSystem::initial();
        let root = fs.get_node("/").expect("root should exist");
        assert!(root.is_directory());
        assert_eq!(root.name(), "");
    }

    #[test]
    fn test_get_node_relative_and_absolute() {
        let fs = FileSystem::initial();
        assert_eq!(fs.get_node("documents").map(FsNode::name), Some("documents"));
        assert_eq!(
            fs.get_node("/home/learner/documents/notes.txt").map(FsNode::name),
            Some("notes.txt")
        );
        assert_eq!(fs.get_node("~/projects/hello.py").map(FsNode::name), Some("hello.py"));
    }

    #[test]
    fn test_get_node_through_file_fails() {
        let fs = FileSystem::initial();
        assert!(fs.get_node("documents/notes.txt/more").is_none());
        assert!(fs.get_node("nonexistent").is_none());
    }

    #[test]
    fn test_predicates() {
        let fs = FileSystem::initial();
        assert!(fs.path_exists("/etc/hostname"));
        assert!(fs.is_file("/etc/hostname"));
        assert!(!fs.is_directory("/etc/hostname"));
        assert!(fs.is_directory("/tmp"));
        assert!(!fs.is_file("/tmp"));
        assert!(!fs.path_exists("/var"));
        assert!(!fs.is_directory("/var"));
        assert!(!fs.is_file("/var"));
    }

    #[test]
    fn test_list_directory_sorted_and_hidden() {
        let fs = FileSystem::initial();
        assert_eq!(fs.list_directory(".", false), vec!["documents", "downloads", "projects"]);
        assert_eq!(
            fs.list_directory("~", true),
            vec![".bashrc", ".hidden_secret", "documents", "downloads", "projects"]
        );
        assert_eq!(fs.list_directory("/", false), vec!["etc", "home", "tmp"]);
    }

    #[test]
    fn test_list_directory_not_a_directory() {
        let fs = FileSystem::initial();
        assert!(fs.list_directory("/etc/hostname", true).is_empty());
        assert!(fs.list_directory("/missing", true).is_empty());
        assert!(fs.list_directory("/tmp", true).is_empty());
    }

    #[test]
    fn test_read_file() {
        let fs = FileSystem::initial();
        assert_eq!(fs.read_file("/etc/hostname"), Some("linux-learning\n"));
        assert_eq!(fs.read_file("/etc"), None);
        assert_eq!(fs.read_file("/etc/missing"), None);
    }

    #[test]
    fn test_display_path() {
        let fs = FileSystem::initial();
        assert_eq!(fs.display_path(), "~");
        let fs = fs.change_directory("documents");
        assert_eq!(fs.display_path(), "~/documents");
        let fs = fs.change_directory("/etc");
        assert_eq!(fs.display_path(), "/etc");
    }
}
