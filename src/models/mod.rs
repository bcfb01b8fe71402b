//! Domain models for the pre-test probability engine
//!
//! Closed vocabularies (sex, symptom category, risk factors), the transient
//! patient query and the combined assessment result.

pub mod assessment;
pub mod patient;
pub mod types;

// Re-export commonly used types
pub use assessment::RiskAssessment;
pub use patient::PatientQuery;
pub use types::{RiskFactor, Sex, SymptomCategory};
