//! Label reconciliation engine for pull requests.
//!
//! This crate provides:
//! - Webhook payload types and event filtering
//! - The declarative rule model (`RuleSet`, `Matcher`)
//! - Condition evaluation (one evaluator per matcher kind)
//! - The reconciler that merges rule outcomes with a PR's current
//!   labels and applies the result through an injected SCM gateway

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Gateway-backed methods can fail for many reasons

pub mod conditions;
pub mod error;
pub mod events;
pub mod gateway;
pub mod reconcile;
pub mod rules;

pub use error::{EvalError, ReconcileError};
pub use events::{Event, PullRequest, PullRequestEvent};
pub use gateway::ScmGateway;
pub use reconcile::{Outcome, ReconcileSummary, Reconciler};
pub use rules::{LabelMatcher, Matcher, MatcherKind, RuleSet};
