//! A Rust library for estimating the pre-test probability of coronary
//! artery disease (CAD) from age, sex, symptom category and risk factors,
//! with a threshold-based clinical conduct recommendation.

pub mod algorithm;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use error::{Result, RiskError};
pub use models::{PatientQuery, RiskAssessment, RiskFactor, Sex, SymptomCategory};

// Scoring operations
pub use algorithm::{Recommendation, advise, assess, estimate, estimate_query};
