use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One public repository as returned by the GitHub API.
///
/// `description` and `language` may be null or missing upstream; the
/// counters default to zero when the API omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
}

impl RepositoryRecord {
    /// Date component of the creation timestamp, e.g. "2023-05-01".
    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    /// Date component of the last-update timestamp.
    pub fn updated_date(&self) -> String {
        self.updated_at.format("%Y-%m-%d").to_string()
    }
}
