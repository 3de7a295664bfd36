//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. Both maps keep the order
//! in which they were authored, so state listings are stable.

use super::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outgoing transitions of a single state, keyed by event.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateDef;
///
/// let off = StateDef::new().on("switchOn", "on");
/// assert_eq!(off.target("switchOn"), Some("on"));
/// assert_eq!(off.target("switchOff"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    transitions: IndexMap<String, String>,
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken when `event` fires in this state.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    pub(crate) fn insert(&mut self, event: String, target: String) {
        self.transitions.insert(event, target);
    }

    /// The state `event` leads to, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    pub fn transitions(&self) -> &IndexMap<String, String> {
        &self.transitions
    }
}

/// Complete machine description: initial state plus state definitions.
///
/// The serialized shape is `{ "initial": .., "states": { id: { "transitions": { event: id } } } }`.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Configuration, StateDef};
///
/// let config = Configuration::new("off")
///     .with_state("off", StateDef::new().on("switchOn", "on"))
///     .with_state("on", StateDef::new().on("switchOff", "off"));
///
/// assert_eq!(config.initial(), "off");
/// assert!(config.contains("on"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    initial: String,
    #[serde(default)]
    states: IndexMap<String, StateDef>,
}

impl Configuration {
    /// Start a configuration with the given initial state and no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add (or replace) a state definition.
    pub fn with_state(mut self, id: impl Into<String>, def: StateDef) -> Self {
        self.states.insert(id.into(), def);
        self
    }

    /// Parse a configuration from a JSON value.
    ///
    /// `null` means no configuration was supplied at all.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Err(ConfigError::Missing);
        }
        serde_json::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Parse a configuration from JSON text. Blank input counts as missing.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Err(ConfigError::Missing);
        }
        let value: Value =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    pub(crate) fn from_parts(initial: String, states: IndexMap<String, StateDef>) -> Self {
        Self { initial, states }
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn states(&self) -> &IndexMap<String, StateDef> {
        &self.states
    }

    /// Definition of a state, if configured.
    pub fn state(&self, id: &str) -> Option<&StateDef> {
        self.states.get(id)
    }

    /// Whether `id` names a usable state. The empty identifier never does.
    pub fn contains(&self, id: &str) -> bool {
        !id.is_empty() && self.states.contains_key(id)
    }

    /// Resolve where `event` leads from `from`, if anywhere.
    pub fn resolve(&self, from: &str, event: &str) -> Option<&str> {
        self.state(from).and_then(|def| def.target(event))
    }

    /// State identifiers in authored order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// State identifiers that define a transition for `event`, in authored order.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Check that the initial state is configured.
    ///
    /// Machines do not call this on construction; an unknown initial state
    /// only surfaces when a transition or reset targets it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contains(&self.initial) {
            Ok(())
        } else {
            Err(ConfigError::UnknownInitialState(self.initial.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn switch() -> Configuration {
        Configuration::new("off")
            .with_state("off", StateDef::new().on("switchOn", "on"))
            .with_state("on", StateDef::new().on("switchOff", "off"))
    }

    #[test]
    fn state_ids_keep_authored_order() {
        let config = Configuration::new("c")
            .with_state("c", StateDef::new())
            .with_state("a", StateDef::new())
            .with_state("b", StateDef::new());

        let ids: Vec<_> = config.state_ids().collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let config = switch();
        assert_eq!(config.states_handling("switchOn"), vec!["off"]);
        assert!(config.states_handling("explode").is_empty());
    }

    #[test]
    fn resolve_follows_rules() {
        let config = switch();
        assert_eq!(config.resolve("off", "switchOn"), Some("on"));
        assert_eq!(config.resolve("off", "switchOff"), None);
        assert_eq!(config.resolve("missing", "switchOn"), None);
    }

    #[test]
    fn empty_identifier_is_never_a_state() {
        let config = Configuration::new("").with_state("", StateDef::new());
        assert!(!config.contains(""));
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownInitialState(String::new()))
        );
    }

    #[test]
    fn validate_rejects_unknown_initial() {
        let config = Configuration::new("nowhere").with_state("off", StateDef::new());
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownInitialState("nowhere".to_string()))
        );
        assert!(switch().validate().is_ok());
    }

    #[test]
    fn deserializes_documented_shape() {
        let config = Configuration::from_value(json!({
            "initial": "off",
            "states": {
                "off": { "transitions": { "switchOn": "on" } },
                "on": { "transitions": { "switchOff": "off" } }
            }
        }))
        .unwrap();

        assert_eq!(config, switch());
    }

    #[test]
    fn missing_transitions_field_means_no_rules() {
        let config = Configuration::from_json(r#"{"initial":"idle","states":{"idle":{}}}"#).unwrap();
        assert!(config.state("idle").unwrap().transitions().is_empty());
    }

    #[test]
    fn null_and_blank_input_are_missing() {
        assert_eq!(Configuration::from_value(Value::Null), Err(ConfigError::Missing));
        assert_eq!(Configuration::from_json("null"), Err(ConfigError::Missing));
        assert_eq!(Configuration::from_json("   "), Err(ConfigError::Missing));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let result = Configuration::from_json(r#"{"states":{}}"#);
        assert!(matches!(result, Err(ConfigError::Malformed(_))));

        let result = Configuration::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn serializes_with_field_names_intact() {
        let value = serde_json::to_value(switch()).unwrap();
        assert_eq!(value["initial"], "off");
        assert_eq!(value["states"]["off"]["transitions"]["switchOn"], "on");
    }
}
