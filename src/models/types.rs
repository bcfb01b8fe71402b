//! Common domain type definitions
//!
//! This module contains the closed vocabularies used by the risk estimator:
//! patient sex, anginal symptom category and cardiovascular risk factors.
//! Parsing from text is fallible; values outside a vocabulary are rejected
//! at the boundary and never reach the table lookup.

use crate::error::RiskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex of the patient, as keyed by the risk table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male patient
    Male,
    /// Female patient
    Female,
}

impl Sex {
    /// Get a descriptive name for this sex
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(RiskError::InvalidInput(format!("unknown sex '{other}'"))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Chest pain presentation category
///
/// The four categories of the published pre-test probability table, ordered
/// from most to least suggestive of coronary artery disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    /// Typical (definite) angina
    TypicalAngina = 0,
    /// Atypical (probable) angina
    AtypicalAngina = 1,
    /// Non-anginal chest pain
    NonAnginal = 2,
    /// No chest pain symptoms
    Asymptomatic = 3,
}

impl SymptomCategory {
    /// All categories, in table column order
    pub const ALL: [Self; 4] = [
        Self::TypicalAngina,
        Self::AtypicalAngina,
        Self::NonAnginal,
        Self::Asymptomatic,
    ];

    /// Column index of this category in a risk table row
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize
    }

    /// Get a descriptive name for this category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TypicalAngina => "typical angina",
            Self::AtypicalAngina => "atypical angina",
            Self::NonAnginal => "non-anginal chest pain",
            Self::Asymptomatic => "asymptomatic",
        }
    }
}

impl FromStr for SymptomCategory {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "typical" | "typical_angina" => Ok(Self::TypicalAngina),
            "atypical" | "atypical_angina" => Ok(Self::AtypicalAngina),
            "non_anginal" | "nonanginal" => Ok(Self::NonAnginal),
            "asymptomatic" => Ok(Self::Asymptomatic),
            other => Err(RiskError::InvalidInput(format!(
                "unknown symptom category '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Cardiovascular risk factor
///
/// Each distinct factor present adds a flat 10% relative increase to the
/// base probability. Factors form a set; duplicates carry no extra weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Diabetes mellitus
    Diabetes,
    /// Arterial hypertension
    Hypertension,
    /// Current smoking
    Smoking,
    /// Dyslipidemia
    Dyslipidemia,
    /// Family history of premature coronary disease
    FamilyHistory,
}

impl RiskFactor {
    /// All factors in the fixed vocabulary
    pub const ALL: [Self; 5] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::Smoking,
        Self::Dyslipidemia,
        Self::FamilyHistory,
    ];

    /// Get a descriptive name for this risk factor
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::Smoking => "smoking",
            Self::Dyslipidemia => "dyslipidemia",
            Self::FamilyHistory => "family history",
        }
    }
}

impl FromStr for RiskFactor {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diabetes" => Ok(Self::Diabetes),
            "hypertension" => Ok(Self::Hypertension),
            "smoking" => Ok(Self::Smoking),
            "dyslipidemia" => Ok(Self::Dyslipidemia),
            "family_history" | "family-history" => Ok(Self::FamilyHistory),
            other => Err(RiskError::InvalidInput(format!(
                "unknown risk factor '{other}'"
            ))),
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
