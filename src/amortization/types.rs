//! Value types for fixed-rate loan math

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::numeric::{accrue_interest, monthly_rate};

/// Terms of a fixed-rate installment loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage (6.5 means 6.5%)
    pub annual_rate_percent: f64,

    /// Number of monthly payments
    pub term_months: u32,
}

impl LoanTerms {
    /// Create validated loan terms
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Result<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(CalcError::InvalidPrincipal(principal));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(CalcError::InvalidRate(annual_rate_percent));
        }
        if term_months == 0 {
            return Err(CalcError::InvalidTerm(0));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            term_months,
        })
    }

    /// Convenience constructor for terms quoted in years (mortgages, auto loans)
    pub fn from_years(principal: f64, annual_rate_percent: f64, years: u32) -> Result<Self> {
        Self::new(principal, annual_rate_percent, years.saturating_mul(12))
    }

    /// Monthly decimal rate
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }

    /// Interest accrued in the first month on the full principal
    pub fn first_month_interest(&self) -> f64 {
        accrue_interest(self.principal, self.monthly_rate())
    }
}

/// Monthly payment commitment, optionally with an extra amount on top
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub monthly_payment: f64,
    pub extra_monthly_payment: f64,
}

impl PaymentPlan {
    pub fn new(monthly_payment: f64, extra_monthly_payment: f64) -> Self {
        Self {
            monthly_payment,
            extra_monthly_payment: extra_monthly_payment.max(0.0),
        }
    }

    /// Scheduled payment only
    pub fn fixed(monthly_payment: f64) -> Self {
        Self::new(monthly_payment, 0.0)
    }

    /// Combined amount paid each month
    pub fn total_payment(&self) -> f64 {
        self.monthly_payment + self.extra_monthly_payment
    }

    /// Reject a plan that cannot shrink `balance` at `annual_rate_percent`
    pub fn validate_against(&self, balance: f64, annual_rate_percent: f64) -> Result<()> {
        let interest = accrue_interest(balance, monthly_rate(annual_rate_percent));
        let payment = self.total_payment();
        if payment.is_nan() || payment <= 0.0 {
            return Err(CalcError::NonPositivePayment(payment));
        }
        if payment <= interest {
            return Err(CalcError::PaymentBelowInterest { payment, interest });
        }
        Ok(())
    }
}

/// Time to retire a balance
///
/// `Never` is a normal outcome: the payment does not exceed the interest
/// accruing on the balance, so the debt never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Payoff {
    /// Fractional number of months from the closed-form solution
    Months(f64),
    Never,
}

impl Payoff {
    pub fn is_never(&self) -> bool {
        matches!(self, Payoff::Never)
    }

    /// Fractional months, or `None` for the never sentinel
    pub fn months(&self) -> Option<f64> {
        match self {
            Payoff::Months(m) => Some(*m),
            Payoff::Never => None,
        }
    }

    /// Number of payments needed, counting a final partial payment as a month
    pub fn whole_months(&self) -> Option<u32> {
        self.months().map(|m| {
            // Absorb float residue so that an exact 60.0000000001 stays 60
            let rounded = m.round();
            if (m - rounded).abs() < 1e-6 {
                rounded as u32
            } else {
                m.ceil() as u32
            }
        })
    }
}

/// Totals for a level payment held for a number of months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Outcome of one amortization engine call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub months_to_payoff: Payoff,

    /// `None` when the balance never pays off
    pub total_paid: Option<f64>,

    /// `None` when the balance never pays off
    pub total_interest: Option<f64>,
}

impl AmortizationResult {
    /// Attach totals to a payoff time, leaving them empty for `Payoff::Never`
    pub fn from_payoff(principal: f64, monthly_payment: f64, payoff: Payoff) -> Self {
        match payoff {
            Payoff::Months(months) => {
                let totals = super::total_paid_and_interest(principal, monthly_payment, months);
                Self {
                    months_to_payoff: payoff,
                    total_paid: Some(totals.total_paid),
                    total_interest: Some(totals.total_interest),
                }
            }
            Payoff::Never => Self {
                months_to_payoff: Payoff::Never,
                total_paid: None,
                total_interest: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_terms_validation() {
        assert!(LoanTerms::new(10_000.0, 5.0, 60).is_ok());
        assert!(matches!(
            LoanTerms::new(0.0, 5.0, 60),
            Err(CalcError::InvalidPrincipal(_))
        ));
        assert!(matches!(
            LoanTerms::new(10_000.0, -1.0, 60),
            Err(CalcError::InvalidRate(_))
        ));
        assert!(matches!(
            LoanTerms::new(10_000.0, 5.0, 0),
            Err(CalcError::InvalidTerm(0))
        ));
        assert!(matches!(
            LoanTerms::new(f64::NAN, 5.0, 12),
            Err(CalcError::InvalidPrincipal(_))
        ));
    }

    #[test]
    fn test_from_years() {
        let loan = LoanTerms::from_years(300_000.0, 6.5, 30).unwrap();
        assert_eq!(loan.term_months, 360);
    }

    #[test]
    fn test_plan_rejects_payment_at_or_below_interest() {
        // $10,000 at 18% accrues $150 in month one
        let plan = PaymentPlan::fixed(150.0);
        assert!(matches!(
            plan.validate_against(10_000.0, 18.0),
            Err(CalcError::PaymentBelowInterest { .. })
        ));

        let plan = PaymentPlan::new(140.0, 20.0);
        assert!(plan.validate_against(10_000.0, 18.0).is_ok());
    }

    #[test]
    fn test_negative_extra_is_floored() {
        let plan = PaymentPlan::new(400.0, -50.0);
        assert_eq!(plan.total_payment(), 400.0);
    }

    #[test]
    fn test_whole_months() {
        assert_eq!(Payoff::Months(31.57).whole_months(), Some(32));
        assert_eq!(Payoff::Months(60.000_000_01).whole_months(), Some(60));
        assert_eq!(Payoff::Never.whole_months(), None);
    }
}
