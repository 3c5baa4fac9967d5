//! Results produced by rule checkers and side conditions.

use serde::{Deserialize, Serialize};

/// The result of checking a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The premises and conclusion instantiate the rule.
    Success {
        /// Name of the rule that matched.
        rule: String,
        /// Optional message supplied by a side condition.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// No alignment of premises matched, or every match was rejected by the
    /// side condition.
    NoMatch {
        /// Name of the rule that was checked.
        rule: String,
    },
}

impl RuleOutcome {
    /// Generic success for `rule`.
    pub fn success(rule: impl Into<String>) -> Self {
        RuleOutcome::Success {
            rule: rule.into(),
            message: None,
        }
    }

    /// Success for `rule` carrying a message.
    pub fn success_with(rule: impl Into<String>, message: impl Into<String>) -> Self {
        RuleOutcome::Success {
            rule: rule.into(),
            message: Some(message.into()),
        }
    }

    pub fn no_match(rule: impl Into<String>) -> Self {
        RuleOutcome::NoMatch { rule: rule.into() }
    }

    /// Returns `true` for [`RuleOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, RuleOutcome::Success { .. })
    }

    pub fn rule(&self) -> &str {
        match self {
            RuleOutcome::Success { rule, .. } | RuleOutcome::NoMatch { rule } => rule,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RuleOutcome::Success { message, .. } => message.as_deref(),
            RuleOutcome::NoMatch { .. } => None,
        }
    }
}

/// What a side condition decided about a structurally matching instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Accept with the generic success record.
    Accept,
    /// Accept and attach a message to the success record.
    AcceptWithMessage(String),
    /// Reject this alignment; the checker moves on to the next one.
    Reject,
}

impl Verdict {
    /// Accept with a message.
    pub fn accept_with(message: impl Into<String>) -> Self {
        Verdict::AcceptWithMessage(message.into())
    }

    /// Turns this verdict into the outcome for `rule`, or `None` on rejection.
    pub fn into_outcome(self, rule: &str) -> Option<RuleOutcome> {
        match self {
            Verdict::Accept => Some(RuleOutcome::success(rule)),
            Verdict::AcceptWithMessage(msg) => Some(RuleOutcome::success_with(rule, msg)),
            Verdict::Reject => None,
        }
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}
