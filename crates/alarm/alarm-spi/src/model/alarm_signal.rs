//! Alarm signal types.

use serde::{Deserialize, Serialize};

/// Result of evaluating an alarm rule over a series.
///
/// Rules produce either one flag per input sample (pointwise) or a single
/// flag summarizing the whole series (aggregate). Which mode a rule
/// produces is fixed by the rule itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlarmSignal {
    /// One flag per sample, aligned to the input series.
    Pointwise(Vec<bool>),
    /// One flag for the whole series.
    Aggregate(bool),
}

impl AlarmSignal {
    /// True if any sample is alarmed (pointwise) or the flag is set (aggregate).
    pub fn is_alarmed(&self) -> bool {
        match self {
            AlarmSignal::Pointwise(flags) => flags.iter().any(|&f| f),
            AlarmSignal::Aggregate(flag) => *flag,
        }
    }

    /// Flag for the newest sample (pointwise) or the whole series (aggregate).
    ///
    /// An empty pointwise signal has no newest sample and yields false.
    pub fn latest(&self) -> bool {
        match self {
            AlarmSignal::Pointwise(flags) => flags.last().copied().unwrap_or(false),
            AlarmSignal::Aggregate(flag) => *flag,
        }
    }

    /// Per-sample flags, if this is a pointwise signal.
    pub fn flags(&self) -> Option<&[bool]> {
        match self {
            AlarmSignal::Pointwise(flags) => Some(flags),
            AlarmSignal::Aggregate(_) => None,
        }
    }

    /// Indices of alarmed samples. Empty for aggregate signals.
    pub fn alarm_indices(&self) -> Vec<usize> {
        match self {
            AlarmSignal::Pointwise(flags) => flags
                .iter()
                .enumerate()
                .filter_map(|(i, &f)| if f { Some(i) } else { None })
                .collect(),
            AlarmSignal::Aggregate(_) => Vec::new(),
        }
    }

    /// Count of alarmed samples. 0 or 1 for aggregate signals.
    pub fn alarm_count(&self) -> usize {
        match self {
            AlarmSignal::Pointwise(flags) => flags.iter().filter(|&&f| f).count(),
            AlarmSignal::Aggregate(flag) => usize::from(*flag),
        }
    }
}
