//! Patient query model
//!
//! A transient value object holding the four validated inputs of a single
//! estimation: age, sex, symptom category and the set of risk factors
//! present. Queries are created per invocation and discarded once the
//! result is consumed; no state is retained between calls.

use crate::error::{Result, RiskError};
use crate::models::types::{RiskFactor, Sex, SymptomCategory};
use rustc_hash::FxHashSet;

/// Inputs for one pre-test probability estimation
#[derive(Debug, Clone)]
pub struct PatientQuery {
    /// Age in whole years
    pub age: u32,
    /// Sex of the patient
    pub sex: Sex,
    /// Chest pain presentation
    pub symptom: SymptomCategory,
    /// Distinct risk factors present (set semantics; only the count of
    /// distinct factors affects the estimate)
    pub risk_factors: FxHashSet<RiskFactor>,
}

impl PatientQuery {
    /// Create a query with no risk factors
    #[must_use]
    pub fn new(age: u32, sex: Sex, symptom: SymptomCategory) -> Self {
        Self {
            age,
            sex,
            symptom,
            risk_factors: FxHashSet::default(),
        }
    }

    /// Add a risk factor, returning the updated query
    ///
    /// Adding a factor already present is a no-op.
    #[must_use]
    pub fn with_risk_factor(mut self, factor: RiskFactor) -> Self {
        self.risk_factors.insert(factor);
        self
    }

    /// Add several risk factors at once, deduplicating
    #[must_use]
    pub fn with_risk_factors(mut self, factors: impl IntoIterator<Item = RiskFactor>) -> Self {
        self.risk_factors.extend(factors);
        self
    }

    /// Number of distinct risk factors present
    #[must_use]
    pub fn risk_factor_count(&self) -> usize {
        self.risk_factors.len()
    }

    /// Build a query from raw text inputs, validating at the boundary
    ///
    /// # Arguments
    /// * `age` - Age as text; must parse as a non-negative integer
    /// * `sex` - One of the sex vocabulary ("male", "female")
    /// * `symptom` - One of the symptom vocabulary
    /// * `risk_factors` - Risk factor names; duplicates are collapsed
    ///
    /// # Errors
    /// Returns `RiskError::InvalidInput` for any value outside its closed
    /// vocabulary or an unparseable age. Range checking of the age itself
    /// belongs to the estimator, not to this constructor.
    pub fn from_raw<S: AsRef<str>>(
        age: &str,
        sex: &str,
        symptom: &str,
        risk_factors: &[S],
    ) -> Result<Self> {
        let age: u32 = age
            .trim()
            .parse()
            .map_err(|_| RiskError::InvalidInput(format!("age '{age}' is not a valid integer")))?;
        let sex: Sex = sex.parse()?;
        let symptom: SymptomCategory = symptom.parse()?;

        let mut factors = FxHashSet::default();
        for factor in risk_factors {
            factors.insert(factor.as_ref().parse::<RiskFactor>()?);
        }

        Ok(Self {
            age,
            sex,
            symptom,
            risk_factors: factors,
        })
    }
}
