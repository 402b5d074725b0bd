//! git command invocation
//!
//! Shells out to the `git` binary for history extraction and for the
//! configured user name fallback.

use crate::error::{Result, StandupError};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const GIT_COMMAND: &str = "git";

/// Per-commit template passed to `git log --pretty=format:`.
///
/// Emits one `<entry>` block per commit with author, date and message
/// sub-fields, decoded back by [`crate::record`]. git inserts field bodies
/// verbatim, so a commit message containing a literal closing tag breaks
/// decoding downstream.
pub const LOG_TEMPLATE: &str =
    "<entry><author>%an</author><date>%cd</date><message>%B</message></entry>";

/// Runs `git log` scoped to one repository.
#[derive(Debug, Clone)]
pub struct GitLog {
    dir: PathBuf,
}

impl GitLog {
    /// Scope invocations to `dir`, the repository's marker directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Raw templated history for `author`, limited to commits after `after`.
    ///
    /// Both filters are handed to git verbatim. Empty output means no
    /// matching commits and is not an error; the caller decides what to do
    /// with it.
    pub fn history(&self, author: &str, after: &str) -> Result<Vec<u8>> {
        let output = Command::new(GIT_COMMAND)
            .arg("-C")
            .arg(&self.dir)
            .arg("log")
            .arg(format!("--author={author}"))
            .arg(format!("--pretty=format:{LOG_TEMPLATE}"))
            .arg(format!("--after={after}"))
            .output()
            .map_err(spawn_error)?;

        if !output.status.success() {
            return Err(StandupError::Extraction {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code().unwrap_or(-1),
            });
        }

        Ok(output.stdout)
    }
}

/// The globally configured `user.name`, if any.
///
/// `git config --get` exits non-zero when the key is unset; that is the
/// "not configured" case, not a failure.
pub fn global_user_name() -> Result<Option<String>> {
    let output = Command::new(GIT_COMMAND)
        .args(["config", "--get", "user.name"])
        .output()
        .map_err(spawn_error)?;

    if !output.status.success() {
        return Ok(None);
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!name.is_empty()).then_some(name))
}

fn spawn_error(err: std::io::Error) -> StandupError {
    if err.kind() == std::io::ErrorKind::NotFound {
        StandupError::GitNotFound
    } else {
        StandupError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_template_is_one_entry_per_commit() {
        assert!(LOG_TEMPLATE.starts_with("<entry>"));
        assert!(LOG_TEMPLATE.ends_with("</entry>"));
    }

    #[test]
    fn log_template_has_all_record_fields() {
        assert!(LOG_TEMPLATE.contains("<author>%an</author>"));
        assert!(LOG_TEMPLATE.contains("<date>%cd</date>"));
        assert!(LOG_TEMPLATE.contains("<message>%B</message>"));
    }
}
