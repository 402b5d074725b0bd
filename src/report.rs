use crate::error::{Result, StandupError};
use crate::model::CommitRecord;
use std::fs;
use std::path::Path;

/// Report file name, created in the current working directory.
pub const REPORT_FILE: &str = "standup.json";

/// Serialize `records` as indented JSON and replace whatever is at `path`.
pub fn write_report(records: &[CommitRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|source| StandupError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> Vec<CommitRecord> {
        vec![
            CommitRecord {
                author: "Alice".to_string(),
                project: "api".to_string(),
                date: "Mon Aug 3 10:00:00 2026 +0000".to_string(),
                message: "fix the build\n".to_string(),
            },
            CommitRecord {
                author: "Alice".to_string(),
                project: "web".to_string(),
                date: "Mon Aug 3 09:00:00 2026 +0000".to_string(),
                message: "tweak styles\n\nand a body\n".to_string(),
            },
        ]
    }

    #[test]
    fn report_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE);
        let records = sample();

        write_report(&records, &path).unwrap();

        let decoded: Vec<CommitRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn empty_collection_writes_an_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE);

        write_report(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn overwrites_a_previous_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE);

        write_report(&sample(), &path).unwrap();
        write_report(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(REPORT_FILE);

        let err = write_report(&sample(), &path).unwrap_err();
        assert!(matches!(err, StandupError::Write { .. }));
    }
}
