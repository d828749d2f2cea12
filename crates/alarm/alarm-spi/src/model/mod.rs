//! Model module containing alarm engine data structures.
//!
//! - [`AlarmSignal`] - Result of a rule evaluation (pointwise or aggregate)
//! - [`AlarmEvent`] - An alarm raised during streaming monitoring
//! - [`AlarmSeverity`] - Event severity levels

mod alarm_event;
mod alarm_signal;

pub use alarm_event::{AlarmEvent, AlarmSeverity};
pub use alarm_signal::AlarmSignal;
