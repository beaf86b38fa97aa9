//! Tracking plan schema types.

use serde::Deserialize;

/// One schema entry within a tracking plan.
///
/// Rules are opaque to the build pipeline and passed through unmodified;
/// only the language generator interprets them.
pub type Rule = serde_json::Value;

/// A tracking plan loaded for one build run.
///
/// Plans are transient: loaded fresh per run and discarded afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingPlan {
    /// Tracking plan identifier.
    pub id: String,

    /// Identifier the plan carried before a workspace migration.
    #[serde(default)]
    pub legacy_id: Option<String>,

    /// Human-readable plan name, used in status and error messages.
    pub name: String,

    /// Event rules; may be absent or empty for a plan with no events.
    #[serde(default)]
    pub rules: Option<Vec<Rule>>,
}

impl TrackingPlan {
    /// Whether the plan has any rules to generate from.
    pub fn has_rules(&self) -> bool {
        self.rules.as_ref().is_some_and(|rules| !rules.is_empty())
    }
}
