//! Alarm Engine API
//!
//! Configuration types for alarm rules and streaming monitoring.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use alarm_spi::{AlarmError, AlarmEvent, AlarmSeverity, AlarmSignal, Result};

// ============================================================================
// Rule Configuration
// ============================================================================

/// Outlier rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Alarm limit; samples strictly above it are outliers.
    pub limit: f64,
    /// Produce a single aggregate flag instead of per-sample flags.
    pub aggregate: bool,
    /// Outlier count that must be strictly exceeded in aggregate mode (default: 1).
    pub count_limit: usize,
}

impl OutlierConfig {
    /// Pointwise configuration with the default count limit.
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            aggregate: false,
            count_limit: 1,
        }
    }

    /// Aggregate configuration with the given count limit.
    pub fn aggregate(limit: f64, count_limit: usize) -> Self {
        Self {
            limit,
            aggregate: true,
            count_limit,
        }
    }
}

/// Drift rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Samples per rolling window.
    pub window_size: usize,
    /// Alarm threshold on the absolute difference of adjacent window means.
    pub threshold: f64,
}

impl DriftConfig {
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
        }
    }
}

/// Bias rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasConfig {
    /// Expected (setpoint) mean of the series.
    pub expected_mean: f64,
    /// Alarm threshold on the absolute offset from the expected mean.
    pub threshold: f64,
}

impl BiasConfig {
    pub fn new(expected_mean: f64, threshold: f64) -> Self {
        Self {
            expected_mean,
            threshold,
        }
    }
}

/// Nelson rule configuration.
///
/// Shared by both Nelson rules; rule 2 only uses the reference mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NelsonConfig {
    /// Reference mean of the baseline distribution.
    pub mean: f64,
    /// Reference standard deviation of the baseline distribution.
    pub std_dev: f64,
}

impl NelsonConfig {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

// ============================================================================
// Monitor Configuration
// ============================================================================

/// Streaming monitor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Buffer size for streaming evaluation.
    pub buffer_size: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { buffer_size: 100 }
    }
}

impl MonitorConfig {
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }
}
