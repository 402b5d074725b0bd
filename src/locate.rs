use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory entry that marks a repository root.
pub const REPO_MARKER: &str = ".git";

/// What to do when the walk hits an unreadable entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkPolicy {
    /// Abort the whole scan on the first error.
    #[default]
    Abort,
    /// Log the error and keep scanning.
    Skip,
}

/// A discovered repository, identified by its marker directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    marker: PathBuf,
}

impl Repository {
    /// Path of the `.git` directory itself.
    pub fn marker(&self) -> &Path {
        &self.marker
    }

    /// Name of the directory the marker sits in.
    ///
    /// Empty when the marker has no named parent (a filesystem root).
    pub fn project(&self) -> String {
        self.marker
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Find every repository under `root`, including `root` itself.
///
/// The walk visits the full subtree and does not prune below a marker, so a
/// repository checked out inside another is reported separately.
pub fn find_repositories(root: &Path, policy: WalkPolicy) -> Result<Vec<Repository>> {
    let mut repos = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if policy == WalkPolicy::Skip => {
                tracing::warn!("skipping unreadable entry: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if entry.file_type().is_dir() && entry.file_name() == REPO_MARKER {
            repos.push(Repository {
                marker: entry.into_path(),
            });
        }
    }

    Ok(repos)
}
