//! Alarm event creation.

use std::time::{SystemTime, UNIX_EPOCH};

use alarm_spi::{AlarmEvent, AlarmSeverity};

/// Create a new event for a raised alarm.
pub fn create_event(rule: &str, value: f64) -> AlarmEvent {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let message = format!("Alarm raised by {}: value={:.4}", rule, value);

    AlarmEvent {
        timestamp,
        rule: rule.to_string(),
        value,
        severity: AlarmSeverity::Warning,
        message,
    }
}

/// Event builder for custom alarm events.
#[derive(Debug, Clone)]
pub struct AlarmEventBuilder {
    rule: String,
    value: f64,
    severity: Option<AlarmSeverity>,
    message: Option<String>,
}

impl AlarmEventBuilder {
    /// Create a new event builder.
    pub fn new(rule: impl Into<String>, value: f64) -> Self {
        Self {
            rule: rule.into(),
            value,
            severity: None,
            message: None,
        }
    }

    /// Set custom severity.
    pub fn severity(mut self, severity: AlarmSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the event.
    pub fn build(self) -> AlarmEvent {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let severity = self.severity.unwrap_or(AlarmSeverity::Warning);

        let message = self.message.unwrap_or_else(|| {
            format!("Alarm raised by {}: value={:.4}", self.rule, self.value)
        });

        AlarmEvent {
            timestamp,
            rule: self.rule,
            value: self.value,
            severity,
            message,
        }
    }
}
