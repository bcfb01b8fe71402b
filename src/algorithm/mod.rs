//! Scoring algorithms for the pre-test probability engine
//!
//! Two components used in strict sequence: the Risk Estimator turns a
//! patient query into a probability, and the Conduct Advisor turns that
//! probability into a clinical-action tier. Both are pure functions over
//! an immutable static table.

pub mod conduct;
pub mod estimate;
pub mod table;

pub use conduct::{Recommendation, advise};
pub use estimate::{estimate, estimate_query};

use crate::error::Result;
use crate::models::assessment::RiskAssessment;
use crate::models::patient::PatientQuery;

/// Run both components for one query: estimate, then advise
///
/// # Errors
/// Same as [`estimate`]; the advisor itself cannot fail.
pub fn assess(query: &PatientQuery) -> Result<RiskAssessment> {
    let probability = estimate_query(query)?;
    Ok(RiskAssessment {
        probability,
        recommendation: advise(probability),
    })
}
