//! Conduct Advisor
//!
//! Maps an estimated pre-test probability to one of three clinical-action
//! tiers. Total function over [0, 100]: every probability lands in exactly
//! one tier, with 15 and 85 belonging to the tier they open.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold (%) below which conservative follow-up is advised
const LOW_THRESHOLD: f64 = 15.0;
/// Threshold (%) at and above which invasive evaluation is advised
const HIGH_THRESHOLD: f64 = 85.0;

/// Recommended clinical conduct for an estimated probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Probability below 15%: follow-up and preventive measures
    Conservative,
    /// Probability in [15%, 85%): additional non-invasive testing
    NonInvasiveTesting,
    /// Probability at or above 85%: invasive evaluation
    InvasiveEvaluation,
}

impl Recommendation {
    /// User-facing conduct text for this tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Conservative => {
                "Conduct: clinical follow-up and preventive measures. \
                 Preventive measures: healthy diet, regular exercise, weight \
                 control, smoking cessation, blood pressure and glucose control."
            }
            Self::NonInvasiveTesting => {
                "Conduct: additional testing such as an exercise stress test \
                 or myocardial scintigraphy."
            }
            Self::InvasiveEvaluation => {
                "Conduct: invasive evaluation with cardiac catheterization."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Advise a clinical conduct for the given probability (%)
///
/// First match over the ordered, non-overlapping tiers. Exactly 15 maps
/// to non-invasive testing and exactly 85 to invasive evaluation; the
/// thresholds are clinically meaningful and must not drift.
#[must_use]
pub fn advise(probability: f64) -> Recommendation {
    if probability < LOW_THRESHOLD {
        Recommendation::Conservative
    } else if probability < HIGH_THRESHOLD {
        Recommendation::NonInvasiveTesting
    } else {
        Recommendation::InvasiveEvaluation
    }
}
