//! Contract module containing alarm engine traits.
//!
//! - [`AlarmRule`] - Rule evaluation over a univariate series
//! - [`AlarmStream`] - Streaming alarm monitoring

mod alarm_rule;
mod alarm_stream;

pub use alarm_rule::AlarmRule;
pub use alarm_stream::AlarmStream;
