//! Terminal rendering of repository listings.
//!
//! All functions build a `String` rather than printing, so callers decide
//! where output goes and tests can assert on it directly.

use crate::error::Result;
use crate::types::RepositoryRecord;
use colored::*;
use std::cmp::Reverse;
use std::collections::HashSet;

const MISSING_DESCRIPTION: &str = "No description available";
const MISSING_LANGUAGE: &str = "Not specified";

/// One repository name per line, for pick-a-repository listings.
pub fn repo_name_list(repos: &[RepositoryRecord]) -> String {
    let mut out = String::new();
    for repo in repos {
        out.push_str("  ");
        out.push_str(&repo.name);
        out.push('\n');
    }
    out
}

/// Summary block for a single repository: description, language, dates, URL
/// and the headline counters.
pub fn repo_detail(repo: &RepositoryRecord) -> String {
    let description = repo.description.as_deref().unwrap_or(MISSING_DESCRIPTION);
    let language = repo.language.as_deref().unwrap_or(MISSING_LANGUAGE);

    let mut out = String::new();
    out.push_str(&format!("{}\n", repo.name.bold().green()));
    out.push_str(&format!("  Description:  {}\n", description));
    out.push_str(&format!("  Language:     {}\n", language));
    out.push_str(&format!("  Created:      {}\n", repo.created_date()));
    out.push_str(&format!("  Last Updated: {}\n", repo.updated_date()));
    out.push_str(&format!("  URL:          {}\n", repo.html_url));
    out.push_str(&format!(
        "  Stars: {}  Forks: {}  Watchers: {}  Open Issues: {}\n",
        repo.stargazers_count, repo.forks_count, repo.watchers_count, repo.open_issues_count
    ));
    out
}

/// Table of repositories: Name, Language, Stars, Forks, Last Updated, URL.
///
/// `recent` limits the table to the N most recently created repositories;
/// rows always stay in the order of the input slice (star order). Repository
/// names are unique within a user's set, so selection goes by name.
pub fn repo_table(repos: &[RepositoryRecord], recent: Option<usize>) -> String {
    let rows: Vec<&RepositoryRecord> = match recent {
        Some(n) => {
            let mut by_created: Vec<&RepositoryRecord> = repos.iter().collect();
            by_created.sort_by_key(|repo| Reverse(repo.created_at));
            by_created.truncate(n);
            let keep: HashSet<&str> = by_created.iter().map(|repo| repo.name.as_str()).collect();
            repos
                .iter()
                .filter(|repo| keep.contains(repo.name.as_str()))
                .collect()
        }
        None => repos.iter().collect(),
    };

    let name_width = rows
        .iter()
        .map(|repo| repo.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);
    let language_width = rows
        .iter()
        .map(|repo| repo.language.as_deref().unwrap_or(MISSING_LANGUAGE).len())
        .chain(std::iter::once("Language".len()))
        .max()
        .unwrap_or(8);

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!(
            "{:<name_width$}  {:<language_width$}  {:>6}  {:>6}  {:<12}  {}",
            "Name", "Language", "Stars", "Forks", "Last Updated", "URL"
        )
        .bold()
    ));

    for repo in rows {
        out.push_str(&format!(
            "{:<name_width$}  {:<language_width$}  {:>6}  {:>6}  {:<12}  {}\n",
            repo.name,
            repo.language.as_deref().unwrap_or(MISSING_LANGUAGE),
            repo.stargazers_count,
            repo.forks_count,
            repo.updated_date(),
            repo.html_url
        ));
    }

    out
}

/// The sorted repository list as pretty-printed JSON.
pub fn to_json(repos: &[RepositoryRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(repos)?)
}
