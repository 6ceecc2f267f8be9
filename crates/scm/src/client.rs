//! GitHub REST client.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, info};

use labeler::{RuleSet, ScmGateway};

const GITHUB_API_URL: &str = "https://api.github.com";

/// Path of the rule file inside the target repository.
pub const DEFAULT_CONFIG_PATH: &str = ".github/labeler.yml";

/// GitHub API client implementing [`ScmGateway`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    config_path: String,
}

/// GitHub content response for file fetching.
#[derive(Debug, Deserialize)]
struct ContentResponse {
    /// Base64-encoded content
    content: Option<String>,
}

/// A label as returned by the issues labels API.
#[derive(Debug, Deserialize)]
struct LabelResponse {
    name: String,
}

impl GitHubClient {
    /// Create a new GitHub client against the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API_URL)
    }

    /// Create a client against a custom API base URL (tests, GHES).
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("labeler-server/1.0"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            config_path: DEFAULT_CONFIG_PATH.to_string(),
        })
    }

    /// Override the rule file path (default `.github/labeler.yml`).
    #[must_use]
    pub fn with_config_path(mut self, path: &str) -> Self {
        self.config_path = path.to_string();
        self
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("GitHub API error: {status} - {body}"));
        }
        Ok(response)
    }

    /// Fetch and parse the repository's label rule file.
    pub async fn fetch_rule_file(&self, owner: &str, repo: &str) -> Result<RuleSet> {
        let url = format!(
            "{}/repos/{owner}/{repo}/contents/{}",
            self.base_url, self.config_path
        );
        debug!(url = %url, "Fetching label rule file");

        let response = self.send(self.client.get(&url)).await?;
        let content: ContentResponse = response
            .json()
            .await
            .context("Failed to parse content response")?;

        let encoded = content
            .content
            .ok_or_else(|| anyhow!("No content in GitHub response"))?;

        // GitHub wraps base64 with newlines
        let encoded: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .context("Failed to decode base64 content")?;

        let rules: RuleSet =
            serde_yaml::from_slice(&decoded).context("Failed to parse label rule file")?;

        info!(
            owner = %owner,
            repo = %repo,
            rule_count = rules.len(),
            "Fetched label rules"
        );
        Ok(rules)
    }

    /// List the labels currently applied to a pull request.
    ///
    /// Pull requests are issues as far as the labels API is concerned.
    pub async fn list_labels(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/{number}/labels",
            self.base_url
        );

        let response = self.send(self.client.get(&url)).await?;
        let labels: Vec<LabelResponse> = response
            .json()
            .await
            .context("Failed to parse label list response")?;

        Ok(labels.into_iter().map(|l| l.name).collect())
    }

    /// Replace the full label set on a pull request.
    pub async fn put_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> Result<()> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/{number}/labels",
            self.base_url
        );

        self.send(
            self.client
                .put(&url)
                .json(&serde_json::json!({ "labels": labels })),
        )
        .await?;

        info!(
            owner = %owner,
            repo = %repo,
            number = number,
            labels = ?labels,
            "Replaced PR labels"
        );
        Ok(())
    }
}

#[async_trait]
impl ScmGateway for GitHubClient {
    async fn fetch_rule_set(&self, owner: &str, repo: &str) -> Result<RuleSet> {
        self.fetch_rule_file(owner, repo).await
    }

    async fn current_labels(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<String>> {
        self.list_labels(owner, repo, number).await
    }

    async fn replace_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> Result<()> {
        self.put_labels(owner, repo, number, labels).await
    }
}
