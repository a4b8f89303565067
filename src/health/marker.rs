// src/health/marker.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque per-invocation value supplied by the trigger (usually the
/// scheduled event's `time`). Never interpreted, only logged and echoed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationMarker(Value);

impl InvocationMarker {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for InvocationMarker {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for InvocationMarker {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

// Strings are printed bare, everything else as compact JSON.
impl fmt::Display for InvocationMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_marker_displays_without_quotes() {
        let marker = InvocationMarker::from("2024-01-01T00:00:00Z");
        assert_eq!(marker.to_string(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_structured_marker_displays_as_json() {
        let marker = InvocationMarker::new(json!({"tick": 3}));
        assert_eq!(marker.to_string(), r#"{"tick":3}"#);
    }

    #[test]
    fn test_marker_serializes_transparently() {
        let marker: InvocationMarker = serde_json::from_str("1700000000").unwrap();
        assert_eq!(serde_json::to_value(&marker).unwrap(), json!(1700000000));
    }
}
