//! SCM gateway trait: the three external operations a reconciliation
//! needs, injected so the engine stays independent of any hosting API.

use async_trait::async_trait;

use crate::rules::RuleSet;

/// Remote operations against the SCM hosting the pull request.
///
/// Implementations own any transport policy (auth, timeouts); the
/// reconciler treats all three calls as opaque and applies no retry.
#[async_trait]
pub trait ScmGateway: Send + Sync {
    /// Fetch the label rule configuration for a repository.
    async fn fetch_rule_set(&self, owner: &str, repo: &str) -> anyhow::Result<RuleSet>;

    /// List the labels currently applied to a pull request.
    async fn current_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> anyhow::Result<Vec<String>>;

    /// Replace the full label set on a pull request.
    async fn replace_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> anyhow::Result<()>;
}
