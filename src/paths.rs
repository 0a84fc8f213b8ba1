//! Project-root confinement for every path the tools read or write.
//!
//! Paths are resolved lexically: relative paths are joined onto the root,
//! `.` and `..` components are folded away, and the result must still live
//! under the root. Nothing here touches the filesystem, so a rejected path
//! is rejected before any file is opened or created.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

/// A path that would resolve outside the project root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("path traversal detected: '{}' resolves outside project root '{}'", .path.display(), .root.display())]
pub struct PathRejected {
    pub path: PathBuf,
    pub root: PathBuf,
}

/// Absolute, normalized project root that all tool I/O is confined to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    /// Canonicalizes `dir` and uses it as the root.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let root = dir
            .canonicalize()
            .with_context(|| format!("Project root '{}' is not accessible", dir.display()))?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves `path` against the root and rejects anything escaping it.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, PathRejected> {
        let path = path.as_ref();
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        let resolved = normalize_path(&joined);

        if resolved.starts_with(&self.root) {
            Ok(resolved)
        } else {
            Err(PathRejected {
                path: path.to_path_buf(),
                root: self.root.clone(),
            })
        }
    }

    /// Displays `path` relative to the root when it lives under it.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Folds `.` and `..` components without consulting the filesystem.
///
/// A `..` that would climb above the first component is kept, so the
/// caller's prefix check sees it.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => result.push(p.as_os_str()),
            Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(result.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    result.pop();
                } else if !result.has_root() {
                    result.push("..");
                }
            }
            Component::Normal(c) => result.push(c),
        }
    }
    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}
