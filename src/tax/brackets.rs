//! Marginal-rate tax over an ordered bracket table

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::numeric::safe_ratio;

/// Lower bound of an income band and the rate applied inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income at which this bracket starts
    pub threshold: f64,
    /// Marginal rate as a decimal in [0, 1]
    pub rate: f64,
}

impl TaxBracket {
    pub fn new(threshold: f64, rate: f64) -> Self {
        Self { threshold, rate }
    }
}

/// Brackets sorted by strictly ascending threshold
///
/// Rates are expected to be non-decreasing for a progressive system; the
/// evaluator does not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBracketTable")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

#[derive(Deserialize)]
struct RawBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TryFrom<RawBracketTable> for BracketTable {
    type Error = CalcError;

    fn try_from(raw: RawBracketTable) -> Result<Self> {
        Self::new(raw.brackets)
    }
}

impl BracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        if brackets.is_empty() {
            return Err(CalcError::EmptyBracketTable);
        }

        for bracket in &brackets {
            if !bracket.threshold.is_finite() || bracket.threshold < 0.0 {
                return Err(CalcError::UnorderedBracketTable {
                    previous: 0.0,
                    threshold: bracket.threshold,
                });
            }
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(CalcError::InvalidRate(bracket.rate));
            }
        }

        for pair in brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(CalcError::UnorderedBracketTable {
                    previous: pair[0].threshold,
                    threshold: pair[1].threshold,
                });
            }
        }

        Ok(Self { brackets })
    }

    /// Build from `(threshold, rate)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().map(|&(t, r)| TaxBracket::new(t, r)).collect())
    }

    /// Single bracket from zero, for flat-rate taxes
    pub fn flat(rate: f64) -> Result<Self> {
        Self::new(vec![TaxBracket::new(0.0, rate)])
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Rate applied to the next dollar above `income`
    pub fn marginal_rate(&self, income: f64) -> f64 {
        self.brackets
            .iter()
            .take_while(|b| b.threshold <= income)
            .last()
            .map(|b| b.rate)
            .unwrap_or(0.0)
    }
}

/// Tax owed on `taxable_income` under `table`
///
/// Each dollar is taxed once, at the rate of the band it falls into.
pub fn evaluate_progressive_tax(taxable_income: f64, table: &BracketTable) -> f64 {
    if taxable_income.is_nan() || taxable_income <= 0.0 {
        return 0.0;
    }

    let brackets = table.brackets();
    let mut tax = 0.0;

    for (idx, bracket) in brackets.iter().enumerate() {
        if taxable_income <= bracket.threshold {
            break;
        }
        let upper = brackets
            .get(idx + 1)
            .map(|next| next.threshold)
            .unwrap_or(f64::INFINITY);
        let in_band = taxable_income.min(upper) - bracket.threshold;
        tax += in_band * bracket.rate;
    }

    tax
}

/// Average rate paid: `tax_owed / taxable_income`, 0 for zero income
pub fn effective_rate(tax_owed: f64, taxable_income: f64) -> f64 {
    safe_ratio(tax_owed, taxable_income)
}

/// Tax, average rate and marginal rate for one income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub taxable_income: f64,
    pub tax_owed: f64,
    pub effective_rate: f64,
    pub marginal_rate: f64,
}

/// Evaluate `table` at `taxable_income` and collect the headline figures
pub fn summarize(taxable_income: f64, table: &BracketTable) -> TaxSummary {
    let tax_owed = evaluate_progressive_tax(taxable_income, table);
    TaxSummary {
        taxable_income,
        tax_owed,
        effective_rate: effective_rate(tax_owed, taxable_income),
        marginal_rate: table.marginal_rate(taxable_income),
    }
}
