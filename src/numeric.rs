//! Shared numeric helpers used across the engines
//!
//! Rates enter the core as annual percentages (18.0 means 18%) and are
//! converted here to the monthly decimal rate the engines work with.

/// Balance residue below which a debt is considered paid off
pub const PAYOFF_EPSILON: f64 = 0.01;

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Interest accrued on `balance` for one period at `periodic_rate`
///
/// This is the balance-update primitive shared by the amortization
/// schedule and the payoff simulator.
pub fn accrue_interest(balance: f64, periodic_rate: f64) -> f64 {
    balance * periodic_rate
}

/// Floor an amount at zero, mapping NaN to zero
pub fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Use `default` when a rate is NaN or negative
pub fn rate_or_default(rate: f64, default: f64) -> f64 {
    if rate.is_nan() || rate < 0.0 {
        default
    } else {
        rate
    }
}

/// Relative comparison with an absolute floor near zero
pub fn approx_eq(a: f64, b: f64, relative_tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= relative_tolerance * scale
}

/// Ratio with a zero-denominator guard
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || denominator.is_nan() {
        0.0
    } else {
        numerator / denominator
    }
}
