//! Run configuration and default resolution

use crate::error::{Result, StandupError};
use crate::git;
use crate::locate::WalkPolicy;
use chrono::Local;
use std::path::PathBuf;

/// Time format for the default `--after` window, understood by `git log`.
const AFTER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Everything one run needs, resolved up front and passed down the
/// pipeline explicitly.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub user: String,
    pub root: PathBuf,
    pub after: String,
    pub walk_policy: WalkPolicy,
}

/// Author filter: an explicit non-empty flag wins, otherwise the global
/// git `user.name`. With neither, the run fails before any directory walk.
pub fn resolve_user(flag: Option<String>) -> Result<String> {
    if let Some(user) = flag.filter(|u| !u.is_empty()) {
        return Ok(user);
    }

    match git::global_user_name()? {
        Some(name) => {
            tracing::debug!("using configured git user.name: {name}");
            Ok(name)
        }
        None => Err(StandupError::Config(
            "no --user given and no git user.name configured".to_string(),
        )),
    }
}

/// Default scan root: the invoking user's home directory.
pub fn default_scan_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Default lower bound: 24 hours before now.
pub fn default_after() -> String {
    (Local::now() - chrono::Duration::hours(24))
        .format(AFTER_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn explicit_user_wins() {
        assert_eq!(resolve_user(Some("alice".to_string())).unwrap(), "alice");
    }

    #[test]
    fn default_after_has_the_git_timestamp_shape() {
        let after = default_after();
        assert!(NaiveDateTime::parse_from_str(&after, AFTER_FORMAT).is_ok());
    }

    #[test]
    fn default_after_is_in_the_past() {
        let after = NaiveDateTime::parse_from_str(&default_after(), AFTER_FORMAT).unwrap();
        assert!(after < Local::now().naive_local());
    }
}
