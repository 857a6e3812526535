//! Path resolution for the virtual filesystem.
//!
//! All resolved paths are absolute:
//! - Root: `"/"`
//! - Anything else: `"/"` followed by `/`-joined, non-empty segments
//! - No `.`, `..` or `~` survives resolution
//!
//! Nothing here touches the tree; existence is checked by the caller.

/// Resolve a user-supplied path against a working and a home directory.
///
/// - Empty input or `.` yields `current`
/// - `~` yields `home`, and a leading `~/` is replaced by `home`
/// - A leading `/` makes the path absolute, otherwise it is appended to `current`
/// - `..` pops one segment and never climbs above the root
pub fn resolve_path(current: &str, home: &str, input: &str) -> String {
    let input = input.trim();

    if input.is_empty() || input == "." {
        return current.to_string();
    }
    if input == "~" {
        return home.to_string();
    }

    let expanded;
    let input = match input.strip_prefix("~/") {
        Some(rest) => {
            expanded = format!("{}/{}", home, rest);
            expanded.as_str()
        }
        None => input,
    };

    let mut resolved: Vec<&str> = Vec::new();
    let base = if input.starts_with('/') { "" } else { current };
    for segment in segments(base).chain(segments(input)) {
        match segment {
            "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(segment),
        }
    }

    join_path(&resolved)
}

/// Non-empty segments of a path, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Join segments into an absolute path.
pub fn join_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

/// Split a resolved path into its parent directory and final name.
///
/// Returns `None` for the root, which has no parent.
pub fn split_parent(path: &str) -> Option<(String, &str)> {
    let mut parts: Vec<&str> = segments(path).collect();
    let name = parts.pop()?;
    Some((join_path(&parts), name))
}

/// Parent directory of a resolved path (the root is its own parent).
pub fn parent_path(path: &str) -> String {
    split_parent(path)
        .map(|(parent, _)| parent)
        .unwrap_or_else(|| "/".to_string())
}

/// Final segment of a resolved path (`""` for the root).
pub fn file_name(path: &str) -> &str {
    segments(path).last().unwrap_or("")
}

/// Check whether `ancestor` is `path` itself or one of its ancestors.
///
/// Both paths must already be resolved.
pub fn is_ancestor_or_self(ancestor: &str, path: &str) -> bool {
    let mut path_segments = segments(path);
    segments(ancestor).all(|segment| path_segments.next() == Some(segment))
}

/// Abbreviate the home directory prefix of a resolved path to `~`.
pub fn display_path(path: &str, home: &str) -> String {
    if path == home {
        return "~".to_string();
    }
    match path.strip_prefix(home) {
        Some(rest) if rest.starts_with('/') && home != "/" => format!("~{}", rest),
        _ => path.to_string(),
    }
}

/// Check that a path is already in resolved form.
pub fn is_canonical(path: &str) -> bool {
    path.starts_with('/') && resolve_path("/", "/", path) == path
}
