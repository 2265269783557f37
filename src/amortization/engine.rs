//! Closed-form fixed-rate loan formulas

use chrono::{Months, NaiveDate};

use super::types::{AmortizationResult, LoanTerms, Payoff, PaymentPlan, PaymentTotals};
use crate::error::{CalcError, Result};
use crate::numeric::monthly_rate;

/// Level monthly payment that retires `loan` over its term
///
/// Uses the annuity formula `P * i / (1 - (1 + i)^-n)`, or `P / n` when the
/// rate is zero.
pub fn monthly_payment(loan: &LoanTerms) -> Result<f64> {
    if loan.term_months == 0 {
        return Err(CalcError::InvalidTerm(0));
    }
    let n = loan.term_months as f64;
    let i = loan.monthly_rate();

    if i == 0.0 {
        return Ok(loan.principal / n);
    }

    Ok(loan.principal * i / (1.0 - (1.0 + i).powf(-n)))
}

/// Months needed for `monthly_payment` to retire `principal`
///
/// Returns `Payoff::Never` when the payment does not exceed the first
/// month's interest. At a zero rate the payoff is a plain division and a
/// non-positive payment is rejected.
pub fn months_to_payoff(principal: f64, annual_rate_percent: f64, monthly_payment: f64) -> Result<Payoff> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(CalcError::InvalidPrincipal(principal));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(CalcError::InvalidRate(annual_rate_percent));
    }
    if monthly_payment.is_nan() {
        return Err(CalcError::NonPositivePayment(monthly_payment));
    }

    let i = monthly_rate(annual_rate_percent);

    if i == 0.0 {
        if monthly_payment <= 0.0 {
            return Err(CalcError::NonPositivePayment(monthly_payment));
        }
        return Ok(Payoff::Months(principal / monthly_payment));
    }

    if monthly_payment <= principal * i {
        return Ok(Payoff::Never);
    }

    let months = (monthly_payment / (monthly_payment - principal * i)).ln() / (1.0 + i).ln();
    Ok(Payoff::Months(months))
}

/// Totals for paying `monthly_payment` for `months` months
///
/// Only meaningful for a finite payoff; callers branch on `Payoff::Never`
/// before reaching this.
pub fn total_paid_and_interest(principal: f64, monthly_payment: f64, months: f64) -> PaymentTotals {
    let total_paid = monthly_payment * months;
    PaymentTotals {
        total_paid,
        total_interest: total_paid - principal,
    }
}

/// Payoff time and totals for a loan under a payment plan
///
/// The plan is validated first, so a payment that cannot cover the first
/// month's interest is an error here rather than a `Never` result.
pub fn amortize(loan: &LoanTerms, plan: &PaymentPlan) -> Result<AmortizationResult> {
    plan.validate_against(loan.principal, loan.annual_rate_percent)?;

    let payment = plan.total_payment();
    let payoff = months_to_payoff(loan.principal, loan.annual_rate_percent, payment)?;
    Ok(AmortizationResult::from_payoff(loan.principal, payment, payoff))
}

/// Standard payment for `loan` plus `extra_monthly_payment`, amortized
pub fn amortize_with_extra(loan: &LoanTerms, extra_monthly_payment: f64) -> Result<AmortizationResult> {
    let plan = PaymentPlan::new(monthly_payment(loan)?, extra_monthly_payment);
    amortize(loan, &plan)
}

/// Calendar date of the final payment counted from `start`
pub fn payoff_date(start: NaiveDate, payoff: Payoff) -> Option<NaiveDate> {
    let months = payoff.whole_months()?;
    start.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_monthly_payment_standard_mortgage() {
        // $200,000 over 30 years at 6% is the textbook $1,199.10
        let loan = LoanTerms::from_years(200_000.0, 6.0, 30).unwrap();
        let payment = monthly_payment(&loan).unwrap();
        assert_abs_diff_eq!(payment, 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        let loan = LoanTerms::new(12_000.0, 0.0, 48).unwrap();
        assert_eq!(monthly_payment(&loan).unwrap(), 250.0);
    }

    #[test]
    fn test_monthly_payment_rejects_zero_term() {
        // Bypass the constructor the way a deserialized value could
        let loan = LoanTerms {
            principal: 1000.0,
            annual_rate_percent: 5.0,
            term_months: 0,
        };
        assert!(matches!(monthly_payment(&loan), Err(CalcError::InvalidTerm(0))));
    }

    #[test]
    fn test_months_to_payoff_never() {
        // Interest is exactly $150/month
        assert_eq!(months_to_payoff(10_000.0, 18.0, 150.0).unwrap(), Payoff::Never);
        assert_eq!(months_to_payoff(10_000.0, 18.0, 100.0).unwrap(), Payoff::Never);
    }

    #[test]
    fn test_months_to_payoff_zero_rate() {
        assert_eq!(months_to_payoff(1200.0, 0.0, 100.0).unwrap(), Payoff::Months(12.0));
        assert!(matches!(
            months_to_payoff(1200.0, 0.0, 0.0),
            Err(CalcError::NonPositivePayment(_))
        ));
    }

    #[test]
    fn test_payment_and_payoff_round_trip() {
        let loan = LoanTerms::new(25_000.0, 7.25, 72).unwrap();
        let payment = monthly_payment(&loan).unwrap();
        let months = months_to_payoff(loan.principal, loan.annual_rate_percent, payment)
            .unwrap()
            .months()
            .unwrap();
        assert_relative_eq!(months, 72.0, epsilon = 1e-6);
    }

    #[test]
    fn test_amortize_rejects_low_plan() {
        let loan = LoanTerms::new(10_000.0, 18.0, 36).unwrap();
        let result = amortize(&loan, &PaymentPlan::fixed(120.0));
        assert!(matches!(result, Err(CalcError::PaymentBelowInterest { .. })));
    }

    #[test]
    fn test_extra_payment_shortens_loan() {
        let loan = LoanTerms::new(10_000.0, 18.0, 36).unwrap();
        let base = amortize_with_extra(&loan, 0.0).unwrap();
        let extra = amortize_with_extra(&loan, 100.0).unwrap();

        let base_months = base.months_to_payoff.months().unwrap();
        let extra_months = extra.months_to_payoff.months().unwrap();
        assert_relative_eq!(base_months, 36.0, epsilon = 1e-6);
        assert!(extra_months < base_months);
        assert!(extra.total_interest.unwrap() < base.total_interest.unwrap());
    }

    #[test]
    fn test_payoff_date() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let date = payoff_date(start, Payoff::Months(12.0)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        // Month-end clamps rather than overflowing
        let date = payoff_date(start, Payoff::Months(0.5)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert!(payoff_date(start, Payoff::Never).is_none());
    }
}
