//! Combined assessment result
//!
//! Pairs the estimated probability with the advised conduct so callers can
//! render both together. The `Display` impl produces the text block shown
//! to the user: the probability line followed by the conduct line.

use crate::algorithm::conduct::Recommendation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one complete assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Estimated pre-test probability (%), rounded to two decimals
    pub probability: f64,
    /// Advised clinical conduct for that probability
    pub recommendation: Recommendation,
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated pre-test probability of CAD: {}%", self.probability)?;
        write!(f, "{}", self.recommendation)
    }
}
