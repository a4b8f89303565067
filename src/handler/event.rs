// src/handler/event.rs
use crate::health::InvocationMarker;
use serde::Deserialize;

/// Payload of a scheduled invocation. Only `time` is read; the rest of the
/// EventBridge envelope is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEvent {
    pub time: InvocationMarker,
}
