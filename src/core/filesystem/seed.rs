//! The demo tree every exercise starts from.

use std::sync::Arc;

use super::FileSystem;
use crate::config::{HOME_DIR, HOST_NAME};
use crate::models::FsNode;

const NOTES_TXT: &str = "Welcome to Linux!\n\nThis is your notes file.\nYou can view files using the cat command.\n";

const TODO_TXT: &str = "1. Learn terminal basics\n2. Practice navigation\n3. Create and manage files\n4. Become a Linux pro!\n";

const HELLO_PY: &str = "# My first Python script\nprint(\"Hello, World!\")\n";

const README_MD: &str = "# Projects Folder\n\nThis is where you can store your coding projects.\n";

const IMAGE_PNG: &str = "[Binary image data]";

const BASHRC: &str = "# Bash configuration file\nexport PATH=$PATH:/usr/local/bin\nalias ll=\"ls -la\"\n";

const HIDDEN_SECRET: &str = "You found the hidden file! 🎉\n";

impl FileSystem {
    /// Create the seeded filesystem with the working directory at home.
    ///
    /// ```text
    /// /
    /// ├── etc/hostname
    /// ├── home/learner/{documents,projects,downloads,.bashrc,.hidden_secret}
    /// └── tmp/
    /// ```
    pub fn initial() -> Self {
        let learner = FsNode::directory_with(
            "learner",
            [
                FsNode::directory_with(
                    "documents",
                    [
                        FsNode::file("notes.txt", NOTES_TXT),
                        FsNode::file("todo.txt", TODO_TXT),
                    ],
                ),
                FsNode::directory_with(
                    "projects",
                    [
                        FsNode::file("hello.py", HELLO_PY),
                        FsNode::file("readme.md", README_MD),
                    ],
                ),
                FsNode::directory_with("downloads", [FsNode::file("image.png", IMAGE_PNG)]),
                FsNode::file(".bashrc", BASHRC),
                FsNode::file(".hidden_secret", HIDDEN_SECRET),
            ],
        );

        let root = FsNode::directory_with(
            "",
            [
                FsNode::directory_with("home", [learner]),
                FsNode::directory_with("etc", [FsNode::file("hostname", format!("{}\n", HOST_NAME))]),
                FsNode::directory("tmp"),
            ],
        );

        Self {
            root: Arc::new(root),
            current_path: HOME_DIR.to_string(),
            home_dir: HOME_DIR.to_string(),
        }
    }
}
