//! Navigation state attached to the current history entry.
//!
//! The browser keeps this value out of the URL. It is treated as an opaque
//! JSON object that is only ever merged key by key, never replaced wholesale.

#[cfg(test)]
#[path = "route_state_test.rs"]
mod route_state_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteState(Map<String, Value>);

impl RouteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read history state from any JSON value. Non-objects read as empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Parse serialized history state. Invalid JSON reads as empty.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<Value>(raw)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Copy every key of `other` over this state.
    pub fn merge(&mut self, other: &RouteState) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    #[must_use]
    pub fn merged(mut self, other: &RouteState) -> Self {
        self.merge(other);
        self
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RouteState {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
