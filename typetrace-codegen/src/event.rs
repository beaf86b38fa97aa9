//! The event shape language generators decode rules into.
//!
//! The build pipeline never looks inside a rule; generators decode each one
//! into [`EventRule`] before rendering.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::Rule;

/// An event rule as generators understand it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRule {
    /// Event name as tracked (e.g. "Order Completed").
    pub name: String,

    /// Human-readable event description.
    #[serde(default)]
    pub description: Option<String>,

    /// Event properties keyed by payload name, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, PropertySchema>,
}

/// Schema of a single event property.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    /// Property type: string, number, integer, boolean, array or object.
    /// Absent means untyped.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Human-readable property description.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the property must be present on every tracked event.
    #[serde(default)]
    pub required: bool,
}

impl EventRule {
    /// Required property names in declaration order.
    pub fn required_properties(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, property)| property.required)
            .map(|(name, _)| name.as_str())
    }
}

/// Decode opaque rules into event shapes.
///
/// A rule that does not decode is a generation failure carrying the decode
/// detail; generators surface it unchanged.
pub fn parse_rules(rules: &[Rule]) -> eyre::Result<Vec<EventRule>> {
    rules
        .iter()
        .map(|rule| {
            serde_json::from_value(rule.clone())
                .map_err(|e| eyre::eyre!("invalid event rule: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_event_rule() {
        let events = parse_rules(&[json!({
            "name": "Order Completed",
            "description": "An order went through checkout.",
            "properties": {
                "orderId": { "type": "string", "required": true },
                "coupon": { "type": "string", "description": "Coupon code, if any." }
            }
        })])
        .unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.name, "Order Completed");
        assert_eq!(event.properties.len(), 2);
        assert_eq!(event.properties["orderId"].kind.as_deref(), Some("string"));
        assert!(event.properties["orderId"].required);
        assert!(!event.properties["coupon"].required);
        assert_eq!(event.required_properties().collect::<Vec<_>>(), ["orderId"]);
    }

    #[test]
    fn test_rule_without_properties() {
        let events = parse_rules(&[json!({ "name": "App Opened" })]).unwrap();

        assert!(events[0].properties.is_empty());
        assert_eq!(events[0].required_properties().count(), 0);
    }

    #[test]
    fn test_malformed_rule_is_an_error() {
        let err = parse_rules(&[json!(42)]).unwrap_err();
        assert!(err.to_string().contains("invalid event rule"));
    }
}
