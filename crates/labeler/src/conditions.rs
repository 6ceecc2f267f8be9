//! Condition evaluators, one per matcher kind.
//!
//! Conditions are registered in a static table keyed by
//! [`MatcherKind`], so the reconciler can evaluate and log any rule
//! uniformly without inspecting the matcher variant.

use tracing::debug;

use crate::error::EvalError;
use crate::events::PullRequest;
use crate::rules::{Matcher, MatcherKind};

/// A named evaluator for one matcher kind.
pub struct Condition {
    /// Matcher kind this condition evaluates.
    pub kind: MatcherKind,
    /// Human-readable name, used in skip/error logs.
    pub name: &'static str,
    /// Evaluator function.
    pub evaluate: fn(&PullRequest, &Matcher) -> Result<bool, EvalError>,
}

static TITLE_CONDITION: Condition = Condition {
    kind: MatcherKind::TitleRegex,
    name: "title matches regex",
    evaluate: evaluate_title,
};

/// Look up the condition registered for a matcher kind.
///
/// The registry is closed: every [`MatcherKind`] has exactly one
/// condition, checked exhaustively here.
#[must_use]
pub fn condition_for(kind: MatcherKind) -> &'static Condition {
    match kind {
        MatcherKind::TitleRegex => &TITLE_CONDITION,
    }
}

/// Evaluate a matcher against a pull request.
pub fn evaluate(pr: &PullRequest, matcher: &Matcher) -> Result<bool, EvalError> {
    let condition = condition_for(matcher.kind());
    (condition.evaluate)(pr, matcher)
}

fn evaluate_title(pr: &PullRequest, matcher: &Matcher) -> Result<bool, EvalError> {
    let Matcher::TitleRegex { pattern } = matcher;

    if pattern.is_empty() {
        return Err(EvalError::Inapplicable {
            condition: TITLE_CONDITION.name,
            reason: "no title pattern configured",
        });
    }

    debug!(pattern = %pattern, title = %pr.title, "Matching pattern against PR title");

    // Unanchored: the pattern may match anywhere in the title
    let regex = regex::Regex::new(pattern).map_err(|source| EvalError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;
    Ok(regex.is_match(&pr.title))
}
