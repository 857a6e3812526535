//! JSON snapshots of a filesystem.
//!
//! The layout mirrors the in-memory value:
//!
//! ```json
//! {
//!   "root": { "type": "directory", "name": "", "children": { ... } },
//!   "currentPath": "/home/learner",
//!   "homeDir": "/home/learner"
//! }
//! ```

use std::sync::Arc;

use serde::Deserialize;

use super::FileSystem;
use crate::core::error::SnapshotError;
use crate::core::path;
use crate::models::FsNode;

/// Unvalidated snapshot as read from JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    root: FsNode,
    current_path: String,
    home_dir: String,
}

impl FileSystem {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot, checking the filesystem invariants.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;

        match &raw.root {
            FsNode::Directory { name, .. } if name.is_empty() => {}
            _ => return Err(SnapshotError::InvalidRoot),
        }
        validate_children(&raw.root)?;

        for p in [&raw.current_path, &raw.home_dir] {
            if !path::is_canonical(p) {
                return Err(SnapshotError::NonCanonicalPath(p.clone()));
            }
        }

        let fs = FileSystem {
            root: Arc::new(raw.root),
            current_path: raw.current_path,
            home_dir: raw.home_dir,
        };
        for p in [fs.home_dir(), fs.current_path()] {
            if !fs.is_directory(p) {
                return Err(SnapshotError::NotADirectory(p.to_string()));
            }
        }

        Ok(fs)
    }
}

/// Check every entry below `node` is keyed by its own, valid name.
fn validate_children(node: &FsNode) -> Result<(), SnapshotError> {
    let Some(children) = node.children() else {
        return Ok(());
    };

    for (key, child) in children {
        if key.is_empty() || key == "." || key == ".." || key.contains('/') {
            return Err(SnapshotError::InvalidName(key.clone()));
        }
        if child.name() != key {
            return Err(SnapshotError::NameMismatch {
                key: key.clone(),
                name: child.name().to_string(),
            });
        }
        validate_children(child)?;
    }

    Ok(())
}
