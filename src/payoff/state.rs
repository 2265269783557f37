//! Running state of a payoff simulation

use super::policy::{PhaseDuration, RateSchedule};

/// Balance and counters at a point in the simulation
#[derive(Debug, Clone)]
pub struct PayoffState {
    /// Outstanding balance
    pub balance: f64,

    /// Months simulated so far
    pub months_elapsed: u32,

    /// Cumulative payments
    pub total_paid: f64,

    /// Cumulative interest charged
    pub total_interest: f64,

    /// Index of the active rate phase
    pub phase_index: usize,

    /// Months left in the active phase (`None` when open-ended)
    pub phase_months_remaining: Option<u32>,
}

impl PayoffState {
    /// Initial state for `starting_balance` under `schedule`
    pub fn new(starting_balance: f64, schedule: &RateSchedule) -> Self {
        Self {
            balance: starting_balance,
            months_elapsed: 0,
            total_paid: 0.0,
            total_interest: 0.0,
            phase_index: 0,
            phase_months_remaining: phase_length(schedule, 0),
        }
    }

    /// Annual rate (percent) in effect this month, then count the month
    /// against the phase and roll over to the next phase when it runs out
    pub fn take_rate(&mut self, schedule: &RateSchedule) -> f64 {
        let rate = schedule.phase(self.phase_index).rate_percent;

        if let Some(remaining) = self.phase_months_remaining {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 && self.phase_index + 1 < schedule.len() {
                self.phase_index += 1;
                self.phase_months_remaining = phase_length(schedule, self.phase_index);
            } else {
                self.phase_months_remaining = Some(remaining);
            }
        }

        rate
    }

    /// Book one month of interest and payment
    pub fn apply_month(&mut self, interest: f64, payment: f64, epsilon: f64) {
        self.balance = self.balance + interest - payment;
        if self.balance < epsilon {
            self.balance = 0.0;
        }
        self.months_elapsed += 1;
        self.total_paid += payment;
        self.total_interest += interest;
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}

fn phase_length(schedule: &RateSchedule, idx: usize) -> Option<u32> {
    match schedule.phase(idx).duration {
        PhaseDuration::Months(n) => Some(n),
        PhaseDuration::UntilPayoff => None,
    }
}
