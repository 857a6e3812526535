use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Children of a directory, keyed by name.
///
/// Nodes sit behind `Arc` so cloning a directory is shallow: edits copy only
/// the nodes between the root and the edited entry.
pub type Children = BTreeMap<String, Arc<FsNode>>;

/// Represents an entry in the virtual filesystem.
///
/// Serialized with a `type` tag (`"file"` / `"directory"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File {
        name: String,
        content: String,
    },
    Directory {
        name: String,
        #[serde(default)]
        children: Children,
    },
}

impl FsNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        FsNode::File {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create an empty directory node.
    pub fn directory(name: impl Into<String>) -> Self {
        FsNode::Directory {
            name: name.into(),
            children: Children::new(),
        }
    }

    /// Create a directory node holding the given entries.
    ///
    /// Each entry is keyed by its own name.
    pub fn directory_with(name: impl Into<String>, entries: impl IntoIterator<Item = FsNode>) -> Self {
        let children = entries
            .into_iter()
            .map(|node| (node.name().to_string(), Arc::new(node)))
            .collect();
        FsNode::Directory {
            name: name.into(),
            children,
        }
    }

    /// Final path segment of this node (`""` for the root).
    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } | FsNode::Directory { name, .. } => name,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    /// Names starting with `.` are hidden from plain `ls`.
    pub fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }

    /// Get the children (directories only).
    pub fn children(&self) -> Option<&Children> {
        match self {
            FsNode::Directory { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    /// Get the text content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content, .. } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Size shown by `ls -l`: UTF-16 code units for files, zero for directories.
    pub fn size(&self) -> usize {
        self.content().map_or(0, |c| c.encode_utf16().count())
    }
}
