//! Alarm rule trait definition.

use crate::error::Result;
use crate::model::AlarmSignal;

/// Alarm rule trait.
///
/// Implementations evaluate one univariate series against fixed,
/// caller-supplied parameters and produce an alarm signal. Rules hold no
/// mutable state: evaluation is a pure function of the rule parameters and
/// the series, so repeated calls on the same input yield the same output.
pub trait AlarmRule: Send + Sync {
    /// Rule name, used in alarm event messages.
    fn name(&self) -> &str;

    /// Evaluate the series and produce an alarm signal.
    fn evaluate(&self, series: &[f64]) -> Result<AlarmSignal>;
}
