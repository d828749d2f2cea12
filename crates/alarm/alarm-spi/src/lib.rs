//! Alarm Engine Service Provider Interface
//!
//! Defines traits and types for process-monitoring alarm rules:
//! - Rule evaluation over univariate series
//! - Streaming alarm monitoring
//! - Alarm signals and events

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AlarmRule, AlarmStream};
pub use error::{AlarmError, Result};
pub use model::{AlarmEvent, AlarmSeverity, AlarmSignal};
