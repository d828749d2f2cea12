//! Alarm event types for streaming monitoring.

use serde::{Deserialize, Serialize};

/// Alarm event severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmSeverity {
    Warning,
    Critical,
}

/// An alarm raised while monitoring a sample stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmEvent {
    pub timestamp: u64,
    pub rule: String,
    pub value: f64,
    pub severity: AlarmSeverity,
    pub message: String,
}
