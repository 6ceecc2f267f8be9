//! GitHub webhook payload types and event filtering.
//!
//! Only `pull_request` events carry enough context to reconcile
//! labels; every other event category is ignored.

use serde::Deserialize;

/// GitHub PR event payload (simplified)
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// Action type (opened, edited, synchronize, etc.)
    pub action: String,
    /// Pull request details
    pub pull_request: PullRequest,
}

/// GitHub Pull Request
///
/// Read-only projection of the triggering pull request. The
/// reconciler never mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body/description
    #[serde(default)]
    pub body: Option<String>,
    /// Target branch, including the repository the PR lands in
    pub base: GitRef,
    /// Labels on the PR
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl PullRequest {
    /// Owner login of the repository the PR targets.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.base.repo.owner.login
    }

    /// Name of the repository the PR targets.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.base.repo.name
    }
}

/// Git reference (branch)
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// SHA
    pub sha: String,
    /// Repository the reference lives in
    pub repo: Repository,
}

/// GitHub Repository
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Full name (org/repo)
    #[serde(default)]
    pub full_name: Option<String>,
    /// Repository owner
    pub owner: RepoOwner,
    /// Default branch
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// Repository owner (user or organization)
#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    /// Owner login
    pub login: String,
}

/// GitHub Label
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Label color
    #[serde(default)]
    pub color: Option<String>,
}

/// A parsed webhook event.
#[derive(Debug, Clone)]
pub enum Event {
    /// A `pull_request` event with its payload.
    PullRequest(Box<PullRequestEvent>),
    /// Any other event category.
    Ignored,
}

impl Event {
    /// Parse a webhook event from its `X-GitHub-Event` name and raw
    /// JSON payload.
    ///
    /// Unrecognized event names parse to [`Event::Ignored`] without
    /// touching the payload; a malformed `pull_request` payload is an
    /// error.
    pub fn parse(event_name: &str, payload: &[u8]) -> Result<Self, serde_json::Error> {
        match event_name {
            "pull_request" => Ok(Self::PullRequest(serde_json::from_slice(payload)?)),
            _ => Ok(Self::Ignored),
        }
    }
}
