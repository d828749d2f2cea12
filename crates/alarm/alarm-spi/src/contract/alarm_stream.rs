//! Streaming alarm monitoring trait definition.

use crate::contract::AlarmRule;
use crate::error::Result;
use crate::model::AlarmEvent;

/// Streaming alarm monitoring trait.
///
/// Implementations buffer incoming samples and evaluate an [`AlarmRule`]
/// over the buffer as new samples arrive.
pub trait AlarmStream<R: AlarmRule>: Send + Sync {
    /// Push a new sample and check for an alarm.
    fn push(&mut self, value: f64) -> Result<Option<AlarmEvent>>;

    /// Current buffer contents.
    fn buffer(&self) -> &[f64];

    /// Reset the stream state.
    fn reset(&mut self);
}
