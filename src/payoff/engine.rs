//! Month-by-month debt payoff simulation

use serde::{Deserialize, Serialize};

use super::policy::{PaymentPolicy, RateSchedule};
use super::state::PayoffState;
use crate::numeric::{accrue_interest, monthly_rate, non_negative, PAYOFF_EPSILON};

/// Default month cap: 50 years
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Configuration for a payoff simulation
#[derive(Debug, Clone)]
pub struct PayoffConfig {
    /// Hard cap on simulated months
    pub max_months: u32,

    /// Balances below this are treated as paid off
    pub epsilon: f64,

    /// Whether to keep a row per simulated month
    pub record_rows: bool,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
            epsilon: PAYOFF_EPSILON,
            record_rows: false,
        }
    }
}

/// How a simulation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffStatus {
    /// Balance reached zero
    PaidOff,
    /// Month cap reached with a balance outstanding
    Capped,
    /// A payment failed to exceed the month's interest
    NonConvergent,
}

/// One simulated month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffRow {
    /// Month number (1-indexed)
    pub month: u32,
    pub annual_rate_percent: f64,
    pub beginning_balance: f64,
    pub interest: f64,
    pub payment: f64,
    pub ending_balance: f64,
}

/// Outcome of a payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    pub status: PayoffStatus,
    pub months_elapsed: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    /// Balance left when the simulation stopped
    pub remaining_balance: f64,
    /// Monthly detail, empty unless `record_rows` was set
    pub rows: Vec<PayoffRow>,
}

impl PayoffResult {
    pub fn is_paid_off(&self) -> bool {
        self.status == PayoffStatus::PaidOff
    }

    /// Months to payoff, or `None` if the debt was not retired
    pub fn months_to_payoff(&self) -> Option<u32> {
        self.is_paid_off().then_some(self.months_elapsed)
    }

    fn from_state(status: PayoffStatus, state: &PayoffState, rows: Vec<PayoffRow>) -> Self {
        Self {
            status,
            months_elapsed: state.months_elapsed,
            total_paid: state.total_paid,
            total_interest: state.total_interest,
            remaining_balance: state.balance,
            rows,
        }
    }
}

/// Simulate paying down `starting_balance` month by month
///
/// Each month the active rate is taken from `rates`, interest accrues on the
/// opening balance, and `payments` decides the amount paid (capped at what
/// clears the balance). The run stops when the balance reaches zero, when a
/// payment fails to cover the month's interest, or at `config.max_months`.
pub fn simulate_payoff(
    starting_balance: f64,
    rates: &RateSchedule,
    payments: &PaymentPolicy,
    config: &PayoffConfig,
) -> PayoffResult {
    let mut state = PayoffState::new(non_negative(starting_balance), rates);
    let mut rows = Vec::new();

    let status = loop {
        if state.is_paid_off() {
            break PayoffStatus::PaidOff;
        }
        if state.months_elapsed >= config.max_months {
            break PayoffStatus::Capped;
        }

        let rate_percent = state.take_rate(rates);
        let opening = state.balance;
        let interest = accrue_interest(opening, monthly_rate(rate_percent));
        let due = non_negative(payments.payment(opening, state.months_elapsed));

        if due - interest <= 0.0 {
            break PayoffStatus::NonConvergent;
        }

        let payment = due.min(opening + interest);
        state.apply_month(interest, payment, config.epsilon);

        if config.record_rows {
            rows.push(PayoffRow {
                month: state.months_elapsed,
                annual_rate_percent: rate_percent,
                beginning_balance: opening,
                interest,
                payment,
                ending_balance: state.balance,
            });
        }
    };

    log::debug!(
        "payoff simulation finished: {:?} after {} months, paid {:.2}, interest {:.2}, balance {:.2}",
        status,
        state.months_elapsed,
        state.total_paid,
        state.total_interest,
        state.balance
    );
    match status {
        PayoffStatus::Capped => log::warn!(
            "payoff simulation hit the {}-month cap with {:.2} still owed (starting balance {:.2})",
            config.max_months,
            state.balance,
            starting_balance
        ),
        PayoffStatus::NonConvergent => log::warn!(
            "payoff simulation cannot converge: payment does not cover interest in month {} (starting balance {:.2})",
            state.months_elapsed + 1,
            starting_balance
        ),
        PayoffStatus::PaidOff => {}
    }

    PayoffResult::from_state(status, &state, rows)
}
