//! Declarative label rule model.
//!
//! A repository configures labeling with a mapping from label name to
//! matcher, e.g.:
//!
//! ```yaml
//! needs-docs:
//!   title: "docs"
//! wip:
//!   title: "^WIP\\b"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-repository rule configuration: label name to matcher.
///
/// Fetched fresh for every event; never cached by the reconciler.
pub type RuleSet = BTreeMap<String, LabelMatcher>;

/// A single label rule as it appears in the configuration file.
///
/// Every field is optional on the wire; the fields that are present
/// determine which [`Matcher`] the rule resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMatcher {
    /// Regex matched against the pull request title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LabelMatcher {
    /// Resolve the wire shape into the tagged matcher.
    ///
    /// A missing `title` resolves to an empty pattern, which the
    /// evaluator reports as inapplicable rather than failing here.
    #[must_use]
    pub fn matcher(&self) -> Matcher {
        Matcher::TitleRegex {
            pattern: self.title.clone().unwrap_or_default(),
        }
    }
}

/// A tagged matcher rule.
///
/// Adding a rule kind means adding a variant here plus an evaluator
/// in [`crate::conditions`]; the reconciler itself never branches on
/// the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches when the PR title contains the pattern (unanchored).
    TitleRegex {
        /// Regex pattern applied to the title.
        pattern: String,
    },
}

impl Matcher {
    /// The discriminator used to look up this matcher's evaluator.
    #[must_use]
    pub fn kind(&self) -> MatcherKind {
        match self {
            Self::TitleRegex { .. } => MatcherKind::TitleRegex,
        }
    }
}

/// Discriminator for [`Matcher`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    /// Title regex matcher.
    TitleRegex,
}
