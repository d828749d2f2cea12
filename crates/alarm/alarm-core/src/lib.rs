//! Alarm Engine Core
//!
//! Rule implementations, streaming monitoring, and alarm events.

mod alerting;
mod monitoring;
mod rules;

pub use alerting::*;
pub use monitoring::*;
pub use rules::*;
