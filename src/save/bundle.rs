//! Key/value bundle for transient screen state
//!
//! Holds typed values under string keys. It never touches the disk; it can be
//! flattened to JSON so it survives the screen being dropped and rebuilt.

use super::types::StateError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceState {
    values: BTreeMap<String, Value>,
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl InstanceState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), Value::from(value));
    }

    pub fn put_long(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), Value::from(value));
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::from(value));
    }

    pub fn get_int(&self, key: &str) -> Result<i32, StateError> {
        let value = self.get_long(key)?;
        i32::try_from(value).map_err(|_| StateError::OutOfRange {
            key: key.to_string(),
            value,
        })
    }

    pub fn get_long(&self, key: &str) -> Result<i64, StateError> {
        let value = self.get(key)?;
        value.as_i64().ok_or_else(|| StateError::WrongType {
            key: key.to_string(),
            expected: "integer",
            found: type_name(value),
        })
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, StateError> {
        let value = self.get(key)?;
        value.as_bool().ok_or_else(|| StateError::WrongType {
            key: key.to_string(),
            expected: "bool",
            found: type_name(value),
        })
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    fn get(&self, key: &str) -> Result<&Value, StateError> {
        self.values
            .get(key)
            .ok_or_else(|| StateError::MissingKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_values() {
        let mut state = InstanceState::new();
        state.put_int("score", 42);
        state.put_long("time", 37_450);
        state.put_bool("started", true);

        assert_eq!(state.get_int("score").unwrap(), 42);
        assert_eq!(state.get_long("time").unwrap(), 37_450);
        assert!(state.get_bool("started").unwrap());
    }

    #[test]
    fn test_missing_key() {
        let state = InstanceState::new();
        assert!(state.is_empty());
        assert!(matches!(
            state.get_int("score"),
            Err(StateError::MissingKey(key)) if key == "score"
        ));
    }

    #[test]
    fn test_wrong_type() {
        let mut state = InstanceState::new();
        state.put_bool("score", true);
        assert!(matches!(
            state.get_int("score"),
            Err(StateError::WrongType { found: "bool", .. })
        ));
    }

    #[test]
    fn test_long_does_not_fit_int() {
        let mut state = InstanceState::new();
        state.put_long("big", i64::from(i32::MAX) + 1);
        assert!(matches!(
            state.get_int("big"),
            Err(StateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_survives_json() {
        let mut state = InstanceState::new();
        state.put_int("score", 7);
        state.put_bool("started", false);

        let json = state.to_json().unwrap();
        let restored = InstanceState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_garbage_json() {
        assert!(matches!(
            InstanceState::from_json("[1, 2"),
            Err(StateError::Serialization(_))
        ));
    }
}
