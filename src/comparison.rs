//! Side-by-side comparison of scenario totals
//!
//! Any engine result that reduces to a single figure (total cost, final
//! value) can be compared here. Ties are reported as [`Outcome::Equal`].
//!
//! # Example
//! ```ignore
//! let result = compare(
//!     &[Scenario::new("Keep card", 6_210.0), Scenario::new("Transfer", 5_150.0)],
//!     Direction::LowerIsBetter,
//! )?;
//! assert_eq!(result.outcome, Outcome::Winner("Transfer".into()));
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amortization::{monthly_payment, LoanTerms};
use crate::error::{CalcError, Result};
use crate::growth::{future_value, GrowthParameters};
use crate::payoff::PayoffResult;

/// Which way the totals are ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Costs: the smallest total wins
    LowerIsBetter,
    /// Values: the largest total wins
    HigherIsBetter,
}

/// A labeled figure to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub total: f64,
}

impl Scenario {
    pub fn new(label: impl Into<String>, total: f64) -> Self {
        Self {
            label: label.into(),
            total,
        }
    }

    /// Total cost of a simulated payoff plus any upfront cost
    ///
    /// `None` unless the debt was actually paid off: a capped or
    /// non-convergent run has no comparable total.
    pub fn from_payoff(label: impl Into<String>, payoff: &PayoffResult, upfront_cost: f64) -> Option<Self> {
        payoff
            .is_paid_off()
            .then(|| Self::new(label, payoff.total_paid + upfront_cost))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(String),
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub scenarios: Vec<Scenario>,
    pub outcome: Outcome,
    /// Gap between the best and second-best totals, never negative
    pub advantage: f64,
}

impl ComparisonResult {
    pub fn winner(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Winner(label) => Some(label.as_str()),
            Outcome::Equal => None,
        }
    }
}

/// Rank `scenarios` and report the winner and its margin over the runner-up
pub fn compare(scenarios: &[Scenario], direction: Direction) -> Result<ComparisonResult> {
    if scenarios.len() < 2 {
        return Err(CalcError::NotEnoughScenarios(scenarios.len()));
    }
    if let Some(bad) = scenarios.iter().find(|s| !s.total.is_finite()) {
        return Err(CalcError::NonFiniteTotal {
            label: bad.label.clone(),
        });
    }

    let mut ranked: Vec<&Scenario> = scenarios.iter().collect();
    ranked.sort_by(|a, b| match direction {
        Direction::LowerIsBetter => a.total.total_cmp(&b.total),
        Direction::HigherIsBetter => b.total.total_cmp(&a.total),
    });

    let best = ranked[0];
    let second = ranked[1];

    let (outcome, advantage) = if best.total == second.total {
        (Outcome::Equal, 0.0)
    } else {
        (Outcome::Winner(best.label.clone()), (best.total - second.total).abs())
    };

    Ok(ComparisonResult {
        scenarios: scenarios.to_vec(),
        outcome,
        advantage,
    })
}

/// Run many independent comparisons in parallel
pub fn compare_batch(batches: &[Vec<Scenario>], direction: Direction) -> Vec<Result<ComparisonResult>> {
    batches
        .par_iter()
        .map(|scenarios| compare(scenarios, direction))
        .collect()
}

/// Compare loan offers by total of scheduled payments
pub fn compare_loan_offers(offers: &[(String, LoanTerms)]) -> Result<ComparisonResult> {
    let scenarios = offers
        .iter()
        .map(|(label, loan)| -> Result<Scenario> {
            let payment = monthly_payment(loan)?;
            Ok(Scenario::new(label.clone(), payment * loan.term_months as f64))
        })
        .collect::<Result<Vec<_>>>()?;

    compare(&scenarios, Direction::LowerIsBetter)
}

/// Compare growth plans by final balance
pub fn compare_growth(plans: &[(String, GrowthParameters)]) -> Result<ComparisonResult> {
    let scenarios: Vec<Scenario> = plans
        .iter()
        .map(|(label, params)| Scenario::new(label.clone(), future_value(params)))
        .collect();

    compare(&scenarios, Direction::HigherIsBetter)
}
