use crate::error::{Result, StarlistError};
use crate::types::RepositoryRecord;
use reqwest::Client;
use std::cmp::Reverse;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("starlist/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: Url,
}

impl GitHubClient {
    /// Create a client against the public GitHub API. The token is optional;
    /// unauthenticated requests work but get a much lower rate limit.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a client against an alternate API root, e.g. a local mock
    /// server in tests or a GitHub Enterprise instance.
    pub fn with_base_url(token: Option<String>, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        let base_url = Url::parse(base_url)?;

        Ok(GitHubClient {
            client,
            token,
            base_url,
        })
    }

    /// Fetch all public repositories for `username`, ordered by descending
    /// star count. Repositories with equal star counts keep the order the
    /// API returned them in.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>> {
        let url = self.base_url.join(&format!("users/{}/repos", username))?;
        debug!(username, "fetching public repositories");

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let mut repos: Vec<RepositoryRecord> = response.json().await?;
                sort_by_stars(&mut repos);
                debug!(count = repos.len(), "fetched repositories");
                Ok(repos)
            }
            reqwest::StatusCode::NOT_FOUND => {
                Err(StarlistError::NotFound(format!("no such user: {}", username)))
            }
            reqwest::StatusCode::FORBIDDEN => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StarlistError::RateLimitExceeded(error_text))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                error!(%status, "repository listing failed");
                Err(StarlistError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

/// Stable sort by star count, most popular first.
pub fn sort_by_stars(repos: &mut [RepositoryRecord]) {
    repos.sort_by_key(|repo| Reverse(repo.stargazers_count));
}
