//! GitHub API client implementation

use reqwest::header::{self, HeaderMap};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::{GitHubConfig, RepoRef, PER_PAGE};
use crate::error::{Result, StatsError};
use crate::github::types::{ApiCommit, ApiRelease};
use crate::utils::DateRange;

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("repostats"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(ref token) = config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| StatsError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
        })
    }

    fn repo_url(&self, repo: &RepoRef, resource: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, repo.owner, repo.name, resource)
    }

    /// List commits committed inside `range`; the API does the date filtering.
    pub async fn list_commits(&self, repo: &RepoRef, range: &DateRange) -> Result<Vec<ApiCommit>> {
        let url = self.repo_url(repo, "commits");
        let params = [("since", range.api_since()), ("until", range.api_until())];
        self.paginate(&url, &params).await
    }

    /// List every release of the repository, newest first.
    pub async fn list_releases(&self, repo: &RepoRef) -> Result<Vec<ApiRelease>> {
        let url = self.repo_url(repo, "releases");
        self.paginate(&url, &[]).await
    }

    /// Fetch pages of up to [`PER_PAGE`] items until a page is empty or the
    /// response has no `rel="next"` link.
    ///
    /// A non-success status ends pagination; whatever was collected before
    /// it is returned.
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .http_client
                .get(url)
                .query(params)
                .query(&[("per_page", PER_PAGE), ("page", page)])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(%status, %body, url, page, "GitHub API request failed, stopping pagination");
                break;
            }

            let more = has_next_page(response.headers());
            let batch: Vec<T> = response.json().await?;
            if batch.is_empty() {
                break;
            }

            debug!(url, page, count = batch.len(), "fetched page");
            items.extend(batch);
            page += 1;

            if !more {
                break;
            }
        }

        Ok(items)
    }
}

fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(header::LINK)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |link| link.contains("rel=\"next\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_next_link_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_next_page(&headers));

        headers.insert(
            header::LINK,
            HeaderValue::from_static(
                "<https://api.github.com/repositories/1/commits?page=2>; rel=\"next\", \
                 <https://api.github.com/repositories/1/commits?page=9>; rel=\"last\"",
            ),
        );
        assert!(has_next_page(&headers));

        headers.insert(
            header::LINK,
            HeaderValue::from_static("<https://api.github.com/repositories/1/commits?page=1>; rel=\"prev\""),
        );
        assert!(!has_next_page(&headers));
    }

    #[test]
    fn test_rejects_unencodable_token() {
        let config = GitHubConfig::new("http://localhost", Some("bad\ntoken".to_string()));
        assert!(matches!(GitHubClient::new(&config), Err(StatsError::Config(_))));
    }
}
