//! Copy-on-write mutations.
//!
//! Every operation returns a new [`FileSystem`]; the receiver is never
//! modified. Only the directories on the path from the root to the edited
//! entry are copied, everything else stays shared.
//!
//! Invalid requests (missing parent, wrong node type, touching the root or
//! the home directory's ancestry) are no-ops that return an equal value.
//! Commands report those cases to the user before calling in here.

use std::sync::Arc;

use log::{debug, warn};

use super::FileSystem;
use crate::core::path;
use crate::models::{Children, FsNode};

impl FileSystem {
    /// Create or overwrite a file.
    pub fn create_file(&self, path: &str, content: &str) -> FileSystem {
        self.insert_node(path, |name| FsNode::file(name, content))
    }

    /// Create or overwrite an empty directory.
    pub fn create_directory(&self, path: &str) -> FileSystem {
        self.insert_node(path, |name| FsNode::directory(name))
    }

    /// Remove a file or a whole directory subtree.
    ///
    /// The root, the home directory and its ancestors are never removed.
    /// If the working directory disappears it moves back to home.
    pub fn remove(&self, path: &str) -> FileSystem {
        let resolved = self.resolve_path(path);
        if self.is_protected(&resolved) {
            warn!("refusing to remove protected path {}", resolved);
            return self.clone();
        }

        self.edit_parent(&resolved, |children, name| {
            children.remove(name);
        })
        .unwrap_or_else(|| self.clone())
    }

    /// Change the working directory.
    ///
    /// Returns an unchanged value if the target is not a directory.
    pub fn change_directory(&self, path: &str) -> FileSystem {
        let resolved = self.resolve_path(path);
        if !self.is_directory(&resolved) {
            debug!("cd target {} is not a directory", resolved);
            return self.clone();
        }

        FileSystem {
            current_path: resolved,
            ..self.clone()
        }
    }

    fn insert_node(&self, path: &str, make: impl FnOnce(&str) -> FsNode) -> FileSystem {
        let resolved = self.resolve_path(path);
        if self.is_protected(&resolved) {
            warn!("refusing to replace protected path {}", resolved);
            return self.clone();
        }

        self.edit_parent(&resolved, |children, name| {
            children.insert(name.to_string(), Arc::new(make(name)));
        })
        .unwrap_or_else(|| self.clone())
    }

    /// The root and every directory on the way to home must survive.
    fn is_protected(&self, resolved: &str) -> bool {
        path::is_ancestor_or_self(resolved, &self.home_dir)
    }

    /// Apply `edit` to the children of the parent of `resolved`.
    ///
    /// Returns `None` when the parent is missing or is not a directory.
    fn edit_parent(
        &self,
        resolved: &str,
        edit: impl FnOnce(&mut Children, &str),
    ) -> Option<FileSystem> {
        let (parent, name) = path::split_parent(resolved)?;
        if !self.is_directory(&parent) {
            debug!("parent {} of {} is not a directory", parent, resolved);
            return None;
        }

        let mut next = self.clone();
        let mut node = Arc::make_mut(&mut next.root);
        for segment in path::segments(&parent) {
            let children = match node {
                FsNode::Directory { children, .. } => children,
                FsNode::File { .. } => return None,
            };
            node = Arc::make_mut(children.get_mut(segment)?);
        }

        match node {
            FsNode::Directory { children, .. } => edit(children, name),
            FsNode::File { .. } => return None,
        }

        if !next.is_directory(&next.current_path) {
            debug!(
                "working directory {} is gone, returning to {}",
                next.current_path, next.home_dir
            );
            next.current_path = next.home_dir.clone();
        }

        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_file_leaves_original_untouched() {
        let fs = FileSystem::initial();
        let next = fs.create_file("/tmp/new.txt", "hi");

        assert!(next.path_exists("/tmp/new.txt"));
        assert_eq!(next.read_file("/tmp/new.txt"), Some("hi"));
        assert!(!fs.path_exists("/tmp/new.txt"));
    }

    #[test]
    fn test_create_file_relative() {
        let fs = FileSystem::initial().change_directory("documents");
        let next = fs.create_file("draft.md", "");
        assert!(next.is_file("/home/learner/documents/draft.md"));
    }

    #[test]
    fn test_create_file_overwrites() {
        let fs = FileSystem::initial();
        let next = fs.create_file("documents/notes.txt", "replaced");
        assert_eq!(next.read_file("documents/notes.txt"), Some("replaced"));
        assert_ne!(fs.read_file("documents/notes.txt"), Some("replaced"));
    }

    #[test]
    fn test_create_with_missing_parent_is_noop() {
        let fs = FileSystem::initial();
        assert_eq!(fs.create_file("/nope/file.txt", "x"), fs);
        assert_eq!(fs.create_directory("/nope/dir"), fs);
        // A file is not a valid parent either
        assert_eq!(fs.create_file("/etc/hostname/child", "x"), fs);
    }

    #[test]
    fn test_create_directory() {
        let fs = FileSystem::initial();
        let next = fs.create_directory("learning");

        assert!(next.is_directory("/home/learner/learning"));
        assert!(next.list_directory("learning", true).is_empty());
        assert!(!fs.path_exists("learning"));
    }

    #[test]
    fn test_create_at_root_is_noop() {
        let fs = FileSystem::initial();
        assert_eq!(fs.create_directory("/"), fs);
        assert_eq!(fs.create_file("/", "x"), fs);
    }

    #[test]
    fn test_cannot_replace_home_ancestry() {
        let fs = FileSystem::initial();
        assert_eq!(fs.create_file("/home", "x"), fs);
        assert_eq!(fs.create_directory("/home/learner"), fs);
    }

    #[test]
    fn test_remove_file_and_directory() {
        let fs = FileSystem::initial();

        let next = fs.remove("documents/notes.txt");
        assert!(!next.path_exists("documents/notes.txt"));
        assert!(next.path_exists("documents/todo.txt"));

        let next = fs.remove("documents");
        assert!(!next.path_exists("documents"));
        assert!(!next.path_exists("documents/todo.txt"));

        assert!(fs.path_exists("documents/notes.txt"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let fs = FileSystem::initial();
        assert_eq!(fs.remove("ghost"), fs);
        assert_eq!(fs.remove("/ghost/child"), fs);
    }

    #[test]
    fn test_remove_protected_is_noop() {
        let fs = FileSystem::initial();
        assert_eq!(fs.remove("/"), fs);
        assert_eq!(fs.remove("/home"), fs);
        assert_eq!(fs.remove("~"), fs);
    }

    #[test]
    fn test_remove_working_directory_returns_home() {
        let fs = FileSystem::initial().change_directory("/home/learner/projects");
        let next = fs.remove("/home/learner/projects");
        assert_eq!(next.current_path(), "/home/learner");

        let fs = FileSystem::initial()
            .create_directory("/tmp/a")
            .create_directory("/tmp/a/b")
            .change_directory("/tmp/a/b");
        let next = fs.remove("/tmp/a");
        assert_eq!(next.current_path(), "/home/learner");
        assert_eq!(fs.current_path(), "/tmp/a/b");
    }

    #[test]
    fn test_change_directory() {
        let fs = FileSystem::initial();

        let next = fs.change_directory("documents");
        assert_eq!(next.current_path(), "/home/learner/documents");
        assert_eq!(fs.current_path(), "/home/learner");

        assert_eq!(next.change_directory("..").current_path(), "/home/learner");
        assert_eq!(next.change_directory("~").current_path(), "/home/learner");
        assert_eq!(next.change_directory("/").current_path(), "/");
    }

    #[test]
    fn test_change_directory_invalid_is_noop() {
        let fs = FileSystem::initial();
        assert_eq!(fs.change_directory("ghost"), fs);
        assert_eq!(fs.change_directory("/etc/hostname"), fs);
    }

    #[test]
    fn test_change_directory_round_trip() {
        let fs = FileSystem::initial().change_directory("projects");
        let original = fs.current_path().to_string();
        let last = path::file_name(&original).to_string();

        let back = fs.change_directory("..").change_directory(&last);
        assert_eq!(back.current_path(), original);
    }

    #[test]
    fn test_untouched_subtrees_are_shared() {
        let fs = FileSystem::initial();
        let next = fs.create_file("/tmp/x", "");

        let etc_before = fs.root().children().unwrap()["etc"].clone();
        let etc_after = next.root().children().unwrap()["etc"].clone();
        assert!(Arc::ptr_eq(&etc_before, &etc_after));

        let tmp_before = fs.root().children().unwrap()["tmp"].clone();
        let tmp_after = next.root().children().unwrap()["tmp"].clone();
        assert!(!Arc::ptr_eq(&tmp_before, &tmp_after));
    }
}
