//! Compound growth of a lump sum plus level periodic contributions
//!
//! Two paths produce the same final balance:
//! - [`future_value_series`] steps period by period and keeps the series for charting
//! - [`future_value`] is the closed form for single-figure projections
//!
//! Contributions are made at the end of each period.

use serde::{Deserialize, Serialize};

use crate::numeric::non_negative;

/// Inputs for a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameters {
    pub initial_amount: f64,
    pub periodic_contribution: f64,
    /// Rate per period as a percentage
    pub periodic_rate_percent: f64,
    pub number_of_periods: u32,
}

impl GrowthParameters {
    /// Monthly compounding from an annual rate and a horizon in years
    pub fn monthly_from_annual(
        initial_amount: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_amount,
            periodic_contribution: monthly_contribution,
            periodic_rate_percent: annual_rate_percent / 12.0,
            number_of_periods: years.saturating_mul(12),
        }
    }

    /// Inputs with negative or NaN values floored at zero
    fn sanitized(&self) -> (f64, f64, f64) {
        (
            non_negative(self.initial_amount),
            non_negative(self.periodic_contribution),
            non_negative(self.periodic_rate_percent) / 100.0,
        )
    }

    /// Total deposited over the horizon
    pub fn total_contributed(&self) -> f64 {
        let (initial, contribution, _) = self.sanitized();
        initial + contribution * self.number_of_periods as f64
    }
}

/// Balance at the end of one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Period number (0 is the starting balance)
    pub period: u32,
    pub balance: f64,
    pub total_contributed: f64,
    pub total_earnings: f64,
}

/// Period-by-period growth path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub fn final_balance(&self) -> f64 {
        self.points.last().map(|p| p.balance).unwrap_or(0.0)
    }

    pub fn total_earnings(&self) -> f64 {
        self.points.last().map(|p| p.total_earnings).unwrap_or(0.0)
    }
}

/// Step the balance forward one period at a time
pub fn future_value_series(params: &GrowthParameters) -> GrowthSeries {
    let (initial, contribution, rate) = params.sanitized();
    let mut balance = initial;
    let mut contributed = initial;

    let mut points = Vec::with_capacity(params.number_of_periods as usize + 1);
    points.push(GrowthPoint {
        period: 0,
        balance,
        total_contributed: contributed,
        total_earnings: 0.0,
    });

    for period in 1..=params.number_of_periods {
        balance = balance * (1.0 + rate) + contribution;
        contributed += contribution;
        points.push(GrowthPoint {
            period,
            balance,
            total_contributed: contributed,
            total_earnings: balance - contributed,
        });
    }

    GrowthSeries { points }
}

/// Closed-form future value: `P(1+r)^n + PMT((1+r)^n - 1)/r`
pub fn future_value(params: &GrowthParameters) -> f64 {
    let (initial, contribution, rate) = params.sanitized();
    let n = params.number_of_periods as f64;

    if rate == 0.0 {
        return initial + contribution * n;
    }

    let growth = (1.0 + rate).powf(n);
    initial * growth + contribution * (growth - 1.0) / rate
}

/// Level contribution per period needed to reach `target`
///
/// Returns 0 when the initial amount alone gets there. A zero-period horizon
/// cannot be helped by contributions, so it also returns 0.
pub fn contribution_for_target(
    target: f64,
    initial_amount: f64,
    periodic_rate_percent: f64,
    number_of_periods: u32,
) -> f64 {
    if number_of_periods == 0 {
        return 0.0;
    }
    let rate = non_negative(periodic_rate_percent) / 100.0;
    let n = number_of_periods as f64;
    let initial = non_negative(initial_amount);

    let (grown_initial, annuity_factor) = if rate == 0.0 {
        (initial, n)
    } else {
        let growth = (1.0 + rate).powf(n);
        (initial * growth, (growth - 1.0) / rate)
    };

    non_negative((target - grown_initial) / annuity_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_zero_rate() {
        let params = GrowthParameters {
            initial_amount: 1000.0,
            periodic_contribution: 50.0,
            periodic_rate_percent: 0.0,
            number_of_periods: 10,
        };
        assert_eq!(future_value(&params), 1500.0);
        assert_eq!(future_value_series(&params).final_balance(), 1500.0);
    }

    #[test]
    fn test_lump_sum_only() {
        // $1,000 at 1% per period for 12 periods
        let params = GrowthParameters {
            initial_amount: 1000.0,
            periodic_contribution: 0.0,
            periodic_rate_percent: 1.0,
            number_of_periods: 12,
        };
        assert_abs_diff_eq!(future_value(&params), 1126.825, epsilon = 1e-3);
    }

    #[test]
    fn test_paths_agree() {
        let params = GrowthParameters::monthly_from_annual(25_000.0, 750.0, 7.0, 30);
        let stepped = future_value_series(&params).final_balance();
        let closed = future_value(&params);
        assert_relative_eq!(stepped, closed, max_relative = 1e-6);
    }

    #[test]
    fn test_series_shape() {
        let params = GrowthParameters::monthly_from_annual(1000.0, 100.0, 6.0, 1);
        let series = future_value_series(&params);

        assert_eq!(series.points.len(), 13);
        assert_eq!(series.points[0].balance, 1000.0);
        assert_abs_diff_eq!(series.points[12].total_contributed, 2200.0, epsilon = 1e-9);
        assert!(series.total_earnings() > 0.0);
    }

    #[test]
    fn test_negative_inputs_floored() {
        let params = GrowthParameters {
            initial_amount: -500.0,
            periodic_contribution: 100.0,
            periodic_rate_percent: -2.0,
            number_of_periods: 3,
        };
        assert_eq!(future_value(&params), 300.0);
    }

    #[test]
    fn test_contribution_for_target_inverts_future_value() {
        let pmt = contribution_for_target(100_000.0, 5_000.0, 0.5, 120);
        let params = GrowthParameters {
            initial_amount: 5_000.0,
            periodic_contribution: pmt,
            periodic_rate_percent: 0.5,
            number_of_periods: 120,
        };
        assert_relative_eq!(future_value(&params), 100_000.0, max_relative = 1e-9);

        assert_eq!(contribution_for_target(1_000.0, 5_000.0, 0.5, 12), 0.0);
    }
}
