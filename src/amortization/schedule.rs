//! Month-by-month amortization tables

use serde::{Deserialize, Serialize};

use super::types::{LoanTerms, PaymentPlan};
use crate::error::Result;
use crate::numeric::{accrue_interest, PAYOFF_EPSILON};

/// A single row of the amortization table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Payment number (1-indexed)
    pub month: u32,
    pub beginning_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub ending_balance: f64,
}

/// Complete amortization table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    pub fn months(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Balance left after the last row, nonzero only when the cap was hit
    pub fn remaining_balance(&self) -> f64 {
        self.rows.last().map(|r| r.ending_balance).unwrap_or(0.0)
    }

    /// Sum principal and interest by 12-month block
    pub fn yearly_totals(&self) -> Vec<YearTotals> {
        self.rows
            .chunks(12)
            .enumerate()
            .map(|(idx, chunk)| YearTotals {
                year: idx as u32 + 1,
                principal: chunk.iter().map(|r| r.principal).sum(),
                interest: chunk.iter().map(|r| r.interest).sum(),
                ending_balance: chunk.last().map(|r| r.ending_balance).unwrap_or(0.0),
            })
            .collect()
    }
}

/// Principal and interest paid in one loan year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearTotals {
    pub year: u32,
    pub principal: f64,
    pub interest: f64,
    pub ending_balance: f64,
}

/// Build the amortization table for `loan` paid under `plan`
///
/// The final payment is shortened to whatever clears the balance. The table
/// stops at `max_months` even if a balance remains.
pub fn schedule(loan: &LoanTerms, plan: &PaymentPlan, max_months: u32) -> Result<AmortizationSchedule> {
    plan.validate_against(loan.principal, loan.annual_rate_percent)?;

    let rate = loan.monthly_rate();
    let scheduled = plan.total_payment();
    let mut balance = loan.principal;
    let mut rows = Vec::new();

    for month in 1..=max_months {
        let interest = accrue_interest(balance, rate);
        let payment = scheduled.min(balance + interest);
        let principal = payment - interest;
        let mut ending_balance = balance - principal;
        if ending_balance < PAYOFF_EPSILON {
            ending_balance = 0.0;
        }

        rows.push(ScheduleRow {
            month,
            beginning_balance: balance,
            payment,
            interest,
            principal,
            ending_balance,
        });

        balance = ending_balance;
        if balance <= 0.0 {
            break;
        }
    }

    Ok(AmortizationSchedule { rows })
}
