//! The reconciler: computes and applies the label set a pull request
//! should carry given the repository's rules and its current labels.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::conditions;
use crate::error::{EvalError, ReconcileError};
use crate::events::{Event, PullRequest};
use crate::gateway::ScmGateway;
use crate::rules::RuleSet;

/// Reconciles pull request labels against a repository's rule file.
pub struct Reconciler {
    gateway: Arc<dyn ScmGateway>,
}

/// What a completed reconciliation did.
#[derive(Debug, Clone)]
pub struct ReconcileSummary {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Pull request number.
    pub number: u64,
    /// The full label set that was applied.
    pub desired_labels: Vec<String>,
}

/// Result of handling one webhook event.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A pull request was reconciled.
    Reconciled(ReconcileSummary),
    /// The event category is not handled; nothing happened.
    Ignored {
        /// Why the event was ignored.
        reason: &'static str,
    },
}

impl Reconciler {
    /// Create a reconciler backed by the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn ScmGateway>) -> Self {
        Self { gateway }
    }

    /// Handle a webhook event by its `X-GitHub-Event` name and raw
    /// payload.
    ///
    /// Only `pull_request` events trigger a reconciliation; everything
    /// else is a no-op reported as [`Outcome::Ignored`].
    pub async fn handle_event(
        &self,
        event_name: &str,
        payload: &[u8],
    ) -> Result<Outcome, ReconcileError> {
        match Event::parse(event_name, payload)? {
            Event::PullRequest(event) => {
                debug!(action = %event.action, number = event.pull_request.number, "Handling pull_request event");
                let summary = self.reconcile(&event.pull_request).await?;
                Ok(Outcome::Reconciled(summary))
            }
            Event::Ignored => {
                debug!(event = %event_name, "Ignoring non-pull_request event");
                Ok(Outcome::Ignored {
                    reason: "not a pull_request event",
                })
            }
        }
    }

    /// Reconcile one pull request.
    ///
    /// Fetches the rule set and the PR's current labels, evaluates
    /// every rule, merges the outcomes over the current labels, and
    /// replaces the PR's label set in a single call. Idempotent:
    /// re-running with the same title, rules, and labels applies the
    /// same set again.
    pub async fn reconcile(&self, pr: &PullRequest) -> Result<ReconcileSummary, ReconcileError> {
        let owner = pr.owner().to_string();
        let repo = pr.repo().to_string();

        let rules = self
            .gateway
            .fetch_rule_set(&owner, &repo)
            .await
            .map_err(|source| ReconcileError::FetchRuleSet {
                owner: owner.clone(),
                repo: repo.clone(),
                source,
            })?;

        let updates = rule_outcomes(pr, &rules);

        let current = self
            .gateway
            .current_labels(&owner, &repo, pr.number)
            .await
            .map_err(|source| ReconcileError::FetchLabels {
                owner: owner.clone(),
                repo: repo.clone(),
                number: pr.number,
                source,
            })?;

        // intentions(label) tells whether `label` should be set on the
        // PR: current labels stay unless a rule says otherwise
        let mut intentions: BTreeMap<String, bool> =
            current.into_iter().map(|label| (label, true)).collect();
        for (label, desired) in updates {
            intentions.insert(label, desired);
        }

        let desired_labels: Vec<String> = intentions
            .into_iter()
            .filter_map(|(label, keep)| keep.then_some(label))
            .collect();

        info!(
            owner = %owner,
            repo = %repo,
            number = pr.number,
            labels = ?desired_labels,
            "Applying desired labels"
        );

        self.gateway
            .replace_labels(&owner, &repo, pr.number, &desired_labels)
            .await
            .map_err(|source| ReconcileError::ReplaceLabels {
                owner: owner.clone(),
                repo: repo.clone(),
                number: pr.number,
                source,
            })?;

        Ok(ReconcileSummary {
            owner,
            repo,
            number: pr.number,
            desired_labels,
        })
    }
}

/// Evaluate every configured rule against the pull request.
///
/// Returns the desired presence per rule-governed label. Rules that
/// fail to evaluate are skipped and contribute nothing, so the label
/// falls through to its pre-existing state.
fn rule_outcomes(pr: &PullRequest, rules: &RuleSet) -> BTreeMap<String, bool> {
    let mut outcomes = BTreeMap::new();

    for (label, rule) in rules {
        let matcher = rule.matcher();
        match conditions::evaluate(pr, &matcher) {
            Ok(matched) => {
                if matched {
                    info!(label = %label, "Rule matched");
                }
                outcomes.insert(label.clone(), matched);
            }
            Err(err @ EvalError::Inapplicable { .. }) => {
                debug!(label = %label, error = %err, "Rule skipped");
            }
            Err(err) => {
                warn!(label = %label, error = %err, "Rule skipped");
            }
        }
    }

    outcomes
}
