//! Capability metadata advertised by a language server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Capabilities a language server returned from its `initialize` handshake.
///
/// The raw JSON object is retained so that capabilities added by newer
/// protocol revisions are preserved without code changes. Lookups are
/// truthy: `true` or any structured options value (object or array) counts
/// as advertised, everything else (including absence) does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerCapabilities(Map<String, Value>);

impl ServerCapabilities {
    /// Creates an empty capability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds capabilities from the `capabilities` member of an
    /// `initialize` result.
    ///
    /// Non-object values yield an empty capability set.
    #[must_use]
    pub fn from_initialize_result(result: &Value) -> Self {
        result
            .get("capabilities")
            .and_then(Value::as_object)
            .cloned()
            .map_or_else(Self::default, Self)
    }

    /// Sets a capability to an explicit value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Marks a capability as advertised.
    #[must_use]
    pub fn with_flag(self, name: impl Into<String>) -> Self {
        self.with(name, Value::Bool(true))
    }

    /// Returns whether the named capability is advertised.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(enabled)) => *enabled,
            Some(Value::Object(_) | Value::Array(_)) => true,
            _ => false,
        }
    }

    /// Returns the raw value for a capability, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}
