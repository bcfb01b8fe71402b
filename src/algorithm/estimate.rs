//! Risk Estimator
//!
//! Computes the pre-test probability of coronary artery disease for one
//! patient query: base probability from the static table, adjusted upward
//! by 10% per distinct risk factor, clamped to 100 and rounded to two
//! decimal places. A pure function of its inputs; no state survives the
//! call.

use crate::algorithm::table::base_probability;
use crate::error::{Result, RiskError};
use crate::models::patient::PatientQuery;
use crate::models::types::{RiskFactor, Sex, SymptomCategory};
use rustc_hash::FxHashSet;

/// Relative increase per distinct risk factor present
const FACTOR_WEIGHT: f64 = 0.1;

/// Estimate the pre-test probability (%) of coronary artery disease
///
/// # Arguments
/// * `age` - Age in whole years; must fall in the tabulated range [30, 69]
/// * `sex` - Sex of the patient
/// * `symptom` - Chest pain presentation
/// * `risk_factors` - Distinct risk factors present
///
/// # Returns
/// A probability in [0, 100] rounded to two decimal places (half away
/// from zero).
///
/// # Errors
/// `RiskError::AgeOutOfRange` when `age` is below 30 or above 69. No
/// default is substituted; the table simply does not cover those ages.
pub fn estimate(
    age: u32,
    sex: Sex,
    symptom: SymptomCategory,
    risk_factors: &FxHashSet<RiskFactor>,
) -> Result<f64> {
    let base = base_probability(sex, age, symptom).ok_or(RiskError::AgeOutOfRange(age))?;

    let multiplier = FACTOR_WEIGHT.mul_add(risk_factors.len() as f64, 1.0);
    let raw = f64::from(base) * multiplier;

    Ok(round2(raw.min(100.0)))
}

/// Estimate the probability for a complete patient query
///
/// # Errors
/// Same as [`estimate`].
pub fn estimate_query(query: &PatientQuery) -> Result<f64> {
    estimate(query.age, query.sex, query.symptom, &query.risk_factors)
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
