use serde::{Deserialize, Serialize};

/// One commit attributed to the project it was found under.
///
/// `date` is kept exactly as git printed it; the report never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author: String,
    pub project: String,
    pub date: String,
    pub message: String,
}
