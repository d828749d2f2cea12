//! Error module containing alarm engine error types.

mod alarm_error;

pub use alarm_error::{AlarmError, Result};
