//! Built-in 2024 US bracket tables
//!
//! Thresholds are taxable income after deductions. Callers pick a table;
//! the evaluator itself knows nothing about filing status.

use serde::{Deserialize, Serialize};

use super::brackets::BracketTable;
use crate::error::Result;

/// IRS filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    HeadOfHousehold,
}

impl FilingStatus {
    /// 2024 standard deduction
    pub fn standard_deduction_2024(&self) -> f64 {
        match self {
            FilingStatus::Single => 14_600.0,
            FilingStatus::MarriedFilingJointly => 29_200.0,
            FilingStatus::HeadOfHousehold => 21_900.0,
        }
    }
}

const FEDERAL_2024_SINGLE: [(f64, f64); 7] = [
    (0.0, 0.10),
    (11_600.0, 0.12),
    (47_150.0, 0.22),
    (100_525.0, 0.24),
    (191_950.0, 0.32),
    (243_725.0, 0.35),
    (609_350.0, 0.37),
];

const FEDERAL_2024_MARRIED_JOINT: [(f64, f64); 7] = [
    (0.0, 0.10),
    (23_200.0, 0.12),
    (94_300.0, 0.22),
    (201_050.0, 0.24),
    (383_900.0, 0.32),
    (487_450.0, 0.35),
    (731_200.0, 0.37),
];

const FEDERAL_2024_HEAD_OF_HOUSEHOLD: [(f64, f64); 7] = [
    (0.0, 0.10),
    (16_550.0, 0.12),
    (63_100.0, 0.22),
    (100_500.0, 0.24),
    (191_950.0, 0.32),
    (243_700.0, 0.35),
    (609_350.0, 0.37),
];

const LTCG_2024_SINGLE: [(f64, f64); 3] = [(0.0, 0.0), (47_025.0, 0.15), (518_900.0, 0.20)];

const LTCG_2024_MARRIED_JOINT: [(f64, f64); 3] = [(0.0, 0.0), (94_050.0, 0.15), (583_750.0, 0.20)];

const LTCG_2024_HEAD_OF_HOUSEHOLD: [(f64, f64); 3] = [(0.0, 0.0), (63_000.0, 0.15), (551_350.0, 0.20)];

/// 2024 federal ordinary income brackets
pub fn federal_2024(status: FilingStatus) -> Result<BracketTable> {
    BracketTable::from_pairs(match status {
        FilingStatus::Single => &FEDERAL_2024_SINGLE,
        FilingStatus::MarriedFilingJointly => &FEDERAL_2024_MARRIED_JOINT,
        FilingStatus::HeadOfHousehold => &FEDERAL_2024_HEAD_OF_HOUSEHOLD,
    })
}

/// 2024 long-term capital gains brackets
pub fn long_term_capital_gains_2024(status: FilingStatus) -> Result<BracketTable> {
    BracketTable::from_pairs(match status {
        FilingStatus::Single => &LTCG_2024_SINGLE,
        FilingStatus::MarriedFilingJointly => &LTCG_2024_MARRIED_JOINT,
        FilingStatus::HeadOfHousehold => &LTCG_2024_HEAD_OF_HOUSEHOLD,
    })
}
