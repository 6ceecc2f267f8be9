//! Error types for condition evaluation and reconciliation.

use thiserror::Error;

/// Errors from evaluating a single rule against a pull request.
///
/// Both variants are non-fatal to a reconciliation: the reconciler
/// logs them and skips the rule, leaving that label's pre-existing
/// state untouched.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The matcher lacks the data its condition needs (e.g. an empty
    /// title pattern). Distinct from a matching failure.
    #[error("condition `{condition}` is not applicable: {reason}")]
    Inapplicable {
        /// Human-readable condition name.
        condition: &'static str,
        /// Why the condition could not run.
        reason: &'static str,
    },

    /// The configured pattern is not a valid regex.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern as configured.
        pattern: String,
        /// Compile error from the regex engine.
        source: regex::Error,
    },
}

/// Errors that abort a reconciliation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The `pull_request` payload could not be parsed.
    #[error("failed to parse pull_request payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The rule configuration could not be fetched.
    #[error("failed to fetch label rules for {owner}/{repo}: {source}")]
    FetchRuleSet {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
        /// Underlying gateway error.
        #[source]
        source: anyhow::Error,
    },

    /// The PR's current labels could not be fetched.
    #[error("failed to fetch current labels for {owner}/{repo}#{number}: {source}")]
    FetchLabels {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
        /// Pull request number.
        number: u64,
        /// Underlying gateway error.
        #[source]
        source: anyhow::Error,
    },

    /// The final label replacement failed.
    #[error("failed to replace labels on {owner}/{repo}#{number}: {source}")]
    ReplaceLabels {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
        /// Pull request number.
        number: u64,
        /// Underlying gateway error.
        #[source]
        source: anyhow::Error,
    },
}
