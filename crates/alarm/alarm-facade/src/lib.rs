//! Alarm Facade
//!
//! Unified re-exports for the alarm module.
//!
//! This facade provides a single entry point to all alarm functionality:
//! - `AlarmRule` and `AlarmStream` traits plus signal/event models from SPI
//! - Configuration types from API
//! - Rule implementations (`OutlierRule`, `DriftRule`, `BiasRule`,
//!   `NelsonRule1`, `NelsonRule2`) from Core
//! - Monitoring and alerting from Core
//!
//! # Example
//!
//! ```ignore
//! use alarm_facade::prelude::*;
//!
//! let rule = DriftRule::new(3, 2.0)?;
//! let series: Vec<f64> = (1..=10).map(|v| v as f64).collect();
//! let signal = rule.evaluate(&series)?;
//! println!("Drift alarm: {}", signal.is_alarmed());
//! ```

// Re-export everything from SPI
pub use alarm_spi::*;

// Re-export everything from API
pub use alarm_api::*;

// Re-export everything from Core
pub use alarm_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use alarm_spi::{AlarmRule, AlarmStream};

    // Models and errors
    pub use alarm_spi::{AlarmError, AlarmEvent, AlarmSeverity, AlarmSignal, Result};

    // Configuration types
    pub use alarm_api::{BiasConfig, DriftConfig, MonitorConfig, NelsonConfig, OutlierConfig};

    // Implementations
    pub use alarm_core::{
        create_event, AlarmEventBuilder, AlarmMonitor, BiasRule, DriftRule, NelsonRule1,
        NelsonRule2, OutlierRule,
    };
}
