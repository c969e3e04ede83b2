#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use starlist::RepositoryRecord;

/// Build a record with the given name and star count and fixed everything
/// else, for sort and render assertions.
pub fn record(name: &str, stars: u32) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        language: Some("Rust".to_string()),
        html_url: format!("https://github.com/octocat/{}", name),
        created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        stargazers_count: stars,
        forks_count: 1,
        watchers_count: stars,
        open_issues_count: 0,
    }
}

/// A repository object shaped like the GitHub API payload, for mock
/// server responses.
pub fn repo_json(name: &str, stars: u32) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "language": "Rust",
        "html_url": format!("https://github.com/octocat/{}", name),
        "created_at": "2023-01-01T00:00:00Z",
        "updated_at": "2024-06-01T12:00:00Z",
        "stargazers_count": stars,
        "forks_count": 1,
        "watchers_count": stars,
        "open_issues_count": 0
    })
}
