//! Reference scenarios and cross-engine properties

use approx::{assert_abs_diff_eq, assert_relative_eq};

use fincalc::amortization::{
    amortize, monthly_payment, months_to_payoff, total_paid_and_interest, LoanTerms, PaymentPlan, Payoff,
};
use fincalc::comparison::{compare, Direction, Outcome, Scenario};
use fincalc::growth::{future_value, future_value_series, GrowthParameters};
use fincalc::payoff::{
    balance_transfer_payoff, extra_payment_payoff, BalanceTransfer, PayoffConfig, PayoffStatus,
};
use fincalc::tax::{effective_rate, evaluate_progressive_tax, federal_2024, FilingStatus};

#[test]
fn test_credit_card_400_per_month() {
    // $10,000 at 18% paying $400/month: roughly 31-32 months
    let payoff = months_to_payoff(10_000.0, 18.0, 400.0).unwrap();
    let months = payoff.months().unwrap();
    assert!((31.0..32.0).contains(&months), "got {} months", months);
    assert_eq!(payoff.whole_months(), Some(32));

    let totals = total_paid_and_interest(10_000.0, 400.0, months);
    assert_abs_diff_eq!(totals.total_paid, 400.0 * months, epsilon = 1e-9);
    assert_abs_diff_eq!(totals.total_paid, 12_400.0, epsilon = 400.0);
    assert_abs_diff_eq!(totals.total_interest, totals.total_paid - 10_000.0, epsilon = 1e-9);
}

#[test]
fn test_credit_card_with_extra_100() {
    let loan = LoanTerms::new(10_000.0, 18.0, 36).unwrap();
    let base = amortize(&loan, &PaymentPlan::fixed(400.0)).unwrap();
    let extra = amortize(&loan, &PaymentPlan::new(400.0, 100.0)).unwrap();

    let months = extra.months_to_payoff.months().unwrap();
    assert!((22.0..25.0).contains(&months), "got {} months", months);
    assert_abs_diff_eq!(extra.total_paid.unwrap(), 11_000.0, epsilon = 1_000.0);
    assert!(extra.total_interest.unwrap() < base.total_interest.unwrap());

    // The month-by-month simulation lands on the same payoff month
    let simulated = extra_payment_payoff(10_000.0, 18.0, 400.0, 100.0, &PayoffConfig::default()).unwrap();
    assert_eq!(simulated.status, PayoffStatus::PaidOff);
    assert_eq!(Some(simulated.months_elapsed), extra.months_to_payoff.whole_months());
}

#[test]
fn test_balance_transfer_promo_then_standard_rate() {
    let transfer = BalanceTransfer {
        balance: 5_000.0,
        promo_rate_percent: 0.0,
        promo_months: 12,
        post_promo_rate_percent: 20.0,
        transfer_fee_percent: 3.0,
        monthly_payment: 200.0,
    };
    let config = PayoffConfig {
        record_rows: true,
        ..Default::default()
    };
    let result = balance_transfer_payoff(&transfer, &config).unwrap();
    let rows = &result.payoff.rows;

    assert_eq!(result.payoff.status, PayoffStatus::PaidOff);
    assert!(rows[..12].iter().all(|r| r.interest == 0.0 && r.annual_rate_percent == 0.0));
    assert_abs_diff_eq!(rows[11].ending_balance, 2_600.0, epsilon = 1e-9);
    assert_eq!(rows[12].annual_rate_percent, 20.0);
    assert_abs_diff_eq!(rows[12].interest, 2_600.0 * 0.20 / 12.0, epsilon = 1e-9);

    assert_abs_diff_eq!(result.transfer_fee, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.total_cost, result.payoff.total_paid + 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        result.payoff.total_paid - result.payoff.total_interest,
        5_000.0,
        epsilon = 0.01
    );
}

#[test]
fn test_growth_paths_agree_ten_years() {
    let params = GrowthParameters::monthly_from_annual(1_000.0, 100.0, 5.0, 10);
    assert_eq!(params.number_of_periods, 120);

    let stepped = future_value_series(&params).final_balance();
    let closed = future_value(&params);
    assert_relative_eq!(stepped, closed, max_relative = 1e-6);
    assert_abs_diff_eq!(closed, 17_175.24, epsilon = 1.0);
}

#[test]
fn test_federal_tax_single_50k() {
    let table = federal_2024(FilingStatus::Single).unwrap();
    let tax = evaluate_progressive_tax(50_000.0, &table);

    let manual = 11_600.0 * 0.10 + (47_150.0 - 11_600.0) * 0.12 + (50_000.0 - 47_150.0) * 0.22;
    assert_abs_diff_eq!(tax, manual, epsilon = 1e-6);
    assert_abs_diff_eq!(tax, 6_053.0, epsilon = 1e-6);
    assert_abs_diff_eq!(effective_rate(tax, 50_000.0), 0.12106, epsilon = 1e-6);
}

#[test]
fn test_amortization_consistency_across_loans() {
    for &(principal, rate, term) in &[
        (5_000.0, 3.0, 12),
        (25_000.0, 9.9, 60),
        (350_000.0, 6.75, 360),
        (1_500.0, 29.99, 18),
    ] {
        let loan = LoanTerms::new(principal, rate, term).unwrap();
        let payment = monthly_payment(&loan).unwrap();
        let months = months_to_payoff(principal, rate, payment).unwrap().months().unwrap();
        assert_relative_eq!(months, term as f64, max_relative = 1e-6);
    }
}

#[test]
fn test_zero_rate_loan_has_no_interest() {
    let loan = LoanTerms::new(9_000.0, 0.0, 36).unwrap();
    let payment = monthly_payment(&loan).unwrap();
    assert_eq!(payment, 9_000.0 / 36.0);

    let result = amortize(&loan, &PaymentPlan::fixed(payment)).unwrap();
    assert_abs_diff_eq!(result.total_interest.unwrap(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_payment_at_or_below_interest_never_pays_off() {
    for &(principal, rate) in &[(10_000.0, 18.0), (250_000.0, 7.0), (800.0, 24.0)] {
        let interest = principal * rate / 100.0 / 12.0;
        for payment in [0.0, interest * 0.5, interest] {
            assert_eq!(months_to_payoff(principal, rate, payment).unwrap(), Payoff::Never);
        }
    }
}

#[test]
fn test_higher_payment_never_takes_longer() {
    let mut previous = f64::INFINITY;
    let mut payment = 151.0;
    while payment < 2_000.0 {
        let months = months_to_payoff(10_000.0, 18.0, payment).unwrap().months().unwrap();
        assert!(months <= previous);
        previous = months;
        payment += 37.5;
    }
}

#[test]
fn test_tax_is_non_negative_and_non_decreasing() {
    let table = federal_2024(FilingStatus::MarriedFilingJointly).unwrap();
    let mut previous = 0.0;
    let mut income = 0.0;
    while income <= 1_000_000.0 {
        let tax = evaluate_progressive_tax(income, &table);
        assert!(tax >= 0.0);
        assert!(tax >= previous);
        previous = tax;
        income += 7_321.0;
    }
}

#[test]
fn test_equal_totals_compare_equal() {
    let result = compare(
        &[Scenario::new("Loan A", 12_345.67), Scenario::new("Loan B", 12_345.67)],
        Direction::LowerIsBetter,
    )
    .unwrap();
    assert_eq!(result.outcome, Outcome::Equal);
    assert_eq!(result.advantage, 0.0);
}
