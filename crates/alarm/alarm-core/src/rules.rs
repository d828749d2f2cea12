//! Alarm rule implementations.
//!
//! Five independent, stateless evaluators over a univariate series:
//! outlier, drift, bias, and Nelson control-chart rules 1 and 2. Each rule
//! holds its caller-supplied parameters and evaluates as a pure function of
//! (parameters, series).

use alarm_api::{BiasConfig, DriftConfig, NelsonConfig, OutlierConfig};
use alarm_spi::{AlarmError, AlarmRule, AlarmSignal, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// NaN samples are treated as 0 in outlier evaluation.
fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Arithmetic mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// ============================================================================
// Outlier Rule
// ============================================================================

/// Outlier rule.
///
/// Flags samples strictly above a fixed limit; a sample equal to the limit
/// is not an alarm. NaN samples are replaced by 0 before the comparison.
/// In aggregate mode the rule instead reports whether the outlier count
/// strictly exceeds `count_limit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierRule {
    limit: f64,
    aggregate: bool,
    count_limit: usize,
}

impl OutlierRule {
    /// Create a pointwise outlier rule with the default count limit of 1.
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            aggregate: false,
            count_limit: 1,
        }
    }

    /// Create an aggregate outlier rule with the given count limit.
    pub fn aggregate(limit: f64, count_limit: usize) -> Self {
        Self {
            limit,
            aggregate: true,
            count_limit,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: OutlierConfig) -> Self {
        Self {
            limit: config.limit,
            aggregate: config.aggregate,
            count_limit: config.count_limit,
        }
    }

    /// Get the limit.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Whether this rule evaluates in aggregate mode.
    pub fn is_aggregate(&self) -> bool {
        self.aggregate
    }

    /// Get the count limit.
    pub fn count_limit(&self) -> usize {
        self.count_limit
    }

    /// Per-sample outlier flags, aligned to the input series.
    pub fn flags(&self, series: &[f64]) -> Vec<bool> {
        series.iter().map(|&v| nan_to_zero(v) > self.limit).collect()
    }

    /// True iff the number of outliers strictly exceeds the count limit.
    pub fn exceeds_count(&self, series: &[f64]) -> bool {
        let count = series
            .iter()
            .filter(|&&v| nan_to_zero(v) > self.limit)
            .count();
        count > self.count_limit
    }
}

impl AlarmRule for OutlierRule {
    fn name(&self) -> &str {
        "outlier"
    }

    fn evaluate(&self, series: &[f64]) -> Result<AlarmSignal> {
        if self.aggregate {
            Ok(AlarmSignal::Aggregate(self.exceeds_count(series)))
        } else {
            Ok(AlarmSignal::Pointwise(self.flags(series)))
        }
    }
}

// ============================================================================
// Drift Rule
// ============================================================================

/// Drift rule.
///
/// Slides an index over the series, comparing the mean of the window ending
/// at the index against the mean of the window starting at it. Alarms on
/// the first pair whose means differ by more than the threshold. The
/// trailing window truncates near the end of the series and its mean is
/// taken over the remaining samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftRule {
    window_size: usize,
    threshold: f64,
}

impl DriftRule {
    /// Create a drift rule.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `window_size` is 0.
    pub fn new(window_size: usize, threshold: f64) -> Result<Self> {
        if window_size == 0 {
            return Err(AlarmError::InvalidParameter {
                name: "window_size".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(Self {
            window_size,
            threshold,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: DriftConfig) -> Result<Self> {
        Self::new(config.window_size, config.threshold)
    }

    /// Get the window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Detect drift; the earliest triggering index wins and the scan stops.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if the series is shorter than twice the window
    /// size.
    pub fn detect(&self, series: &[f64]) -> Result<bool> {
        let required = 2 * self.window_size;
        if series.len() < required {
            return Err(AlarmError::InsufficientData {
                required,
                got: series.len(),
            });
        }

        for i in self.window_size..series.len() {
            let prev = mean(&series[i - self.window_size..i]);
            // The trailing window truncates at the end of the series.
            let end = series.len().min(i + self.window_size);
            let curr = mean(&series[i..end]);
            if (curr - prev).abs() > self.threshold {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl AlarmRule for DriftRule {
    fn name(&self) -> &str {
        "drift"
    }

    fn evaluate(&self, series: &[f64]) -> Result<AlarmSignal> {
        Ok(AlarmSignal::Aggregate(self.detect(series)?))
    }
}

// ============================================================================
// Bias Rule
// ============================================================================

/// Bias rule.
///
/// Alarms when the series mean is offset from an expected (setpoint) mean
/// by more than the threshold. Strict comparison: an offset equal to the
/// threshold is not a bias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasRule {
    expected_mean: f64,
    threshold: f64,
}

impl BiasRule {
    /// Create a bias rule.
    pub fn new(expected_mean: f64, threshold: f64) -> Self {
        Self {
            expected_mean,
            threshold,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: BiasConfig) -> Self {
        Self::new(config.expected_mean, config.threshold)
    }

    /// Get the expected mean.
    pub fn expected_mean(&self) -> f64 {
        self.expected_mean
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Detect bias over the whole series.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if the series is empty.
    pub fn detect(&self, series: &[f64]) -> Result<bool> {
        if series.is_empty() {
            return Err(AlarmError::InsufficientData {
                required: 1,
                got: 0,
            });
        }
        Ok((mean(series) - self.expected_mean).abs() > self.threshold)
    }
}

impl AlarmRule for BiasRule {
    fn name(&self) -> &str {
        "bias"
    }

    fn evaluate(&self, series: &[f64]) -> Result<AlarmSignal> {
        Ok(AlarmSignal::Aggregate(self.detect(series)?))
    }
}

// ============================================================================
// Nelson Rule 1
// ============================================================================

/// Nelson rule 1: single excursion beyond three standard deviations.
///
/// The reference mean and standard deviation are caller-supplied and never
/// recomputed from the series, so a baseline distribution distinct from the
/// scanned window can be used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NelsonRule1 {
    mean: f64,
    std_dev: f64,
}

impl NelsonRule1 {
    /// Create the rule with a reference mean and standard deviation.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Create from configuration.
    pub fn from_config(config: NelsonConfig) -> Self {
        Self::new(config.mean, config.std_dev)
    }

    /// Get the reference mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the reference standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Scan in order; alarm on the first sample farther than three standard
    /// deviations from the reference mean.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if the series is empty.
    pub fn detect(&self, series: &[f64]) -> Result<bool> {
        if series.is_empty() {
            return Err(AlarmError::InsufficientData {
                required: 1,
                got: 0,
            });
        }
        let excursion = 3.0 * self.std_dev;
        for &value in series {
            if (value - self.mean).abs() > excursion {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl AlarmRule for NelsonRule1 {
    fn name(&self) -> &str {
        "nelson_rule_1"
    }

    fn evaluate(&self, series: &[f64]) -> Result<AlarmSignal> {
        Ok(AlarmSignal::Aggregate(self.detect(series)?))
    }
}

// ============================================================================
// Nelson Rule 2
// ============================================================================

/// Run length that triggers Nelson rule 2.
const NELSON_RUN: usize = 9;

/// Nelson rule 2: sustained run above the reference mean.
///
/// Counts consecutive samples strictly above the mean; a sample at or below
/// the mean resets the run. One-sided as implemented: runs below the mean
/// never alarm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NelsonRule2 {
    mean: f64,
}

impl NelsonRule2 {
    /// Create the rule with a reference mean.
    pub fn new(mean: f64) -> Self {
        Self { mean }
    }

    /// Create from configuration. The standard deviation is unused here.
    pub fn from_config(config: NelsonConfig) -> Self {
        Self::new(config.mean)
    }

    /// Get the reference mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Alarm as soon as 9 consecutive samples are strictly above the mean.
    ///
    /// # Errors
    ///
    /// `InsufficientData` if the series is empty.
    pub fn detect(&self, series: &[f64]) -> Result<bool> {
        if series.is_empty() {
            return Err(AlarmError::InsufficientData {
                required: 1,
                got: 0,
            });
        }
        let mut run = 0_usize;
        for &value in series {
            if value > self.mean {
                run += 1;
            } else {
                run = 0;
            }
            if run >= NELSON_RUN {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl AlarmRule for NelsonRule2 {
    fn name(&self) -> &str {
        "nelson_rule_2"
    }

    fn evaluate(&self, series: &[f64]) -> Result<AlarmSignal> {
        Ok(AlarmSignal::Aggregate(self.detect(series)?))
    }
}
