//! GitHub API client implementation

use crate::core::{TagFileError, TagFileResult};
use crate::di::traits::HostingProvider;
use crate::github::types::{BlobObject, CommitObject, TagInfo, TreeObject};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::time::Duration;

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// The token is attached as a bearer credential on every request and is
    /// never inspected beyond that. Anonymous access works for public
    /// repositories but is rate-limited aggressively by GitHub.
    pub fn new(api_url: &str, token: Option<&str>) -> TagFileResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("tagfile"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| TagFileError::Config(format!("Invalid GitHub token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get tags for a repository
    pub async fn get_tags(&self, owner: &str, repo: &str) -> TagFileResult<Vec<TagInfo>> {
        let url = format!("{}/repos/{}/{}/tags", self.api_url, owner, repo);
        self.api_get(&url).await
    }

    /// Get a single commit
    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> TagFileResult<CommitObject> {
        let url = format!("{}/repos/{}/{}/commits/{}", self.api_url, owner, repo, sha);
        self.api_get(&url).await
    }

    /// Get a tree object (one directory level, non-recursive)
    pub async fn get_tree(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<TreeObject> {
        let url = format!("{}/repos/{}/{}/git/trees/{}", self.api_url, owner, repo, sha);
        self.api_get(&url).await
    }

    /// Get a blob; content stays base64-encoded
    pub async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<BlobObject> {
        let url = format!("{}/repos/{}/{}/git/blobs/{}", self.api_url, owner, repo, sha);
        self.api_get(&url).await
    }

    /// Make an API GET request and parse the JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> TagFileResult<T> {
        tracing::debug!(%url, "GitHub API request");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    TagFileError::Auth(format!("GitHub rejected credentials: HTTP {}", status))
                }
                StatusCode::NOT_FOUND => TagFileError::NotFound(format!("{}: HTTP 404", url)),
                _ => TagFileError::Api(format!("{}: HTTP {}", url, status)),
            });
        }

        response
            .json()
            .await
            .map_err(|e| TagFileError::Api(format!("Failed to parse GitHub API response: {}", e)))
    }
}

#[async_trait]
impl HostingProvider for GitHubClient {
    async fn list_tags(&self, owner: &str, repo: &str) -> TagFileResult<Vec<TagInfo>> {
        self.get_tags(owner, repo).await
    }

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<CommitObject> {
        Self::get_commit(self, owner, repo, sha).await
    }

    async fn get_tree(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<TreeObject> {
        Self::get_tree(self, owner, repo, sha).await
    }

    async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<BlobObject> {
        Self::get_blob(self, owner, repo, sha).await
    }
}
