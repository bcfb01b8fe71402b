//! Static pre-test probability table
//!
//! The published table of base probabilities keyed by sex, decade-wide age
//! band and symptom category. The table is a compile-time constant, never
//! mutated at runtime, so any number of lookups may run concurrently
//! without coordination.
//!
//! Combinations the source literature does not tabulate are stored as 0;
//! the lookup treats them as a defined fallback, not an error.

use crate::models::types::{Sex, SymptomCategory};

/// Closed age interval covered by one row of the risk table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBand {
    /// Lower bound in years, inclusive
    pub lower: u32,
    /// Upper bound in years, inclusive
    pub upper: u32,
}

impl AgeBand {
    /// Whether this band contains the given age
    #[must_use]
    pub const fn contains(self, age: u32) -> bool {
        self.lower <= age && age <= self.upper
    }
}

/// One row of the table: an age band and its base probabilities per
/// symptom category, in `SymptomCategory` column order
#[derive(Debug, Clone, Copy)]
pub struct BandRow {
    /// Age band this row covers
    pub band: AgeBand,
    /// Base probability (%) per symptom column
    pub base: [u8; 4],
}

const fn row(lower: u32, upper: u32, base: [u8; 4]) -> BandRow {
    BandRow {
        band: AgeBand { lower, upper },
        base,
    }
}

/// Base probabilities for men, columns: typical, atypical, non-anginal,
/// asymptomatic
static MALE_ROWS: [BandRow; 4] = [
    row(30, 39, [12, 3, 0, 0]),
    row(40, 49, [22, 10, 3, 1]),
    row(50, 59, [32, 17, 8, 3]),
    row(60, 69, [44, 26, 13, 6]),
];

/// Base probabilities for women, same column order
static FEMALE_ROWS: [BandRow; 4] = [
    row(30, 39, [1, 0, 0, 0]),
    row(40, 49, [4, 2, 1, 0]),
    row(50, 59, [13, 6, 2, 1]),
    row(60, 69, [32, 12, 3, 2]),
];

/// Rows of the table for the given sex, in ascending band order
#[must_use]
pub fn rows_for(sex: Sex) -> &'static [BandRow; 4] {
    match sex {
        Sex::Male => &MALE_ROWS,
        Sex::Female => &FEMALE_ROWS,
    }
}

/// Look up the base probability for (sex, age, symptom)
///
/// Scans the four bands for the given sex and returns the tabulated value
/// for the band containing `age`, or `None` when the age falls outside the
/// tabulated range [30, 69].
#[must_use]
pub fn base_probability(sex: Sex, age: u32, symptom: SymptomCategory) -> Option<u8> {
    rows_for(sex)
        .iter()
        .find(|r| r.band.contains(age))
        .map(|r| r.base[symptom.column()])
}
