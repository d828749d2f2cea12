//! Streaming alarm monitoring.

use alarm_api::MonitorConfig;
use alarm_spi::{AlarmEvent, AlarmRule, AlarmStream, Result};

use super::alerting::create_event;

/// Streaming monitor that evaluates an alarm rule over a sliding buffer.
pub struct AlarmMonitor<R: AlarmRule> {
    rule: R,
    buffer: Vec<f64>,
    buffer_size: usize,
}

impl<R: AlarmRule> AlarmMonitor<R> {
    /// Create a new monitor with the given rule and buffer size.
    pub fn new(rule: R, buffer_size: usize) -> Self {
        Self {
            rule,
            buffer: Vec::with_capacity(buffer_size),
            buffer_size,
        }
    }

    /// Create from configuration.
    pub fn from_config(rule: R, config: MonitorConfig) -> Self {
        Self::new(rule, config.buffer_size)
    }

    /// Get the underlying rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Get mutable reference to the rule.
    pub fn rule_mut(&mut self) -> &mut R {
        &mut self.rule
    }
}

impl<R: AlarmRule> AlarmStream<R> for AlarmMonitor<R> {
    fn push(&mut self, value: f64) -> Result<Option<AlarmEvent>> {
        self.buffer.push(value);
        if self.buffer.len() > self.buffer_size {
            self.buffer.remove(0);
        }

        if self.buffer.len() >= self.buffer_size {
            let signal = self.rule.evaluate(&self.buffer)?;
            if signal.latest() {
                return Ok(Some(create_event(self.rule.name(), value)));
            }
        }
        Ok(None)
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}
