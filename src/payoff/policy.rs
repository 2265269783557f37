//! Rate and payment rules driving the payoff simulation

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// How long a rate phase lasts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhaseDuration {
    Months(u32),
    /// Open-ended; only valid for the last phase
    UntilPayoff,
}

/// One interest-rate phase of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePhase {
    /// Annual rate as a percentage
    pub rate_percent: f64,
    pub duration: PhaseDuration,
}

impl RatePhase {
    pub fn new(rate_percent: f64, duration: PhaseDuration) -> Self {
        Self { rate_percent, duration }
    }
}

/// Ordered interest-rate phases applied strictly in sequence
///
/// Every phase but the last has a positive, finite duration. If the last
/// phase is finite and runs out, its rate stays in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRateSchedule")]
pub struct RateSchedule {
    phases: Vec<RatePhase>,
}

/// Wire shape of a schedule before validation
#[derive(Deserialize)]
struct RawRateSchedule {
    phases: Vec<RatePhase>,
}

impl TryFrom<RawRateSchedule> for RateSchedule {
    type Error = CalcError;

    fn try_from(raw: RawRateSchedule) -> Result<Self> {
        Self::new(raw.phases)
    }
}

impl RateSchedule {
    /// Build a schedule, rejecting empty, open-ended-in-the-middle, or
    /// zero-length phases
    pub fn new(phases: Vec<RatePhase>) -> Result<Self> {
        if phases.is_empty() {
            return Err(CalcError::InvalidRateSchedule {
                message: "schedule has no phases".to_string(),
            });
        }

        let last = phases.len() - 1;
        for (idx, phase) in phases.iter().enumerate() {
            if !phase.rate_percent.is_finite() || phase.rate_percent < 0.0 {
                return Err(CalcError::InvalidRate(phase.rate_percent));
            }
            match phase.duration {
                PhaseDuration::Months(0) => {
                    return Err(CalcError::InvalidRateSchedule {
                        message: format!("phase {} has zero duration", idx + 1),
                    });
                }
                PhaseDuration::UntilPayoff if idx != last => {
                    return Err(CalcError::InvalidRateSchedule {
                        message: format!("open-ended phase {} is not the last phase", idx + 1),
                    });
                }
                _ => {}
            }
        }

        Ok(Self { phases })
    }

    /// Single rate for the life of the balance
    pub fn fixed(rate_percent: f64) -> Result<Self> {
        Self::new(vec![RatePhase::new(rate_percent, PhaseDuration::UntilPayoff)])
    }

    /// Promotional rate for `promo_months`, then `standard_rate_percent`
    pub fn promotional(promo_rate_percent: f64, promo_months: u32, standard_rate_percent: f64) -> Result<Self> {
        Self::new(vec![
            RatePhase::new(promo_rate_percent, PhaseDuration::Months(promo_months)),
            RatePhase::new(standard_rate_percent, PhaseDuration::UntilPayoff),
        ])
    }

    pub fn phases(&self) -> &[RatePhase] {
        &self.phases
    }

    /// Phase at `idx`, clamped to the last phase
    pub fn phase(&self, idx: usize) -> &RatePhase {
        let idx = idx.min(self.phases.len() - 1);
        &self.phases[idx]
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// Payment callback: `(beginning balance, zero-based month index) -> payment`
pub type PaymentFn = Arc<dyn Fn(f64, u32) -> f64 + Send + Sync>;

/// Rule for the amount paid each month
#[derive(Clone)]
pub enum PaymentPolicy {
    /// Same payment every month
    Fixed(f64),
    /// Required minimum plus a voluntary extra, both constant
    FixedPlusExtra { payment: f64, extra: f64 },
    /// Percentage of the current balance with an absolute floor
    PercentOfBalance { percent: f64, floor: f64 },
    /// Arbitrary rule supplied by the caller
    Custom(PaymentFn),
}

impl PaymentPolicy {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64, u32) -> f64 + Send + Sync + 'static,
    {
        PaymentPolicy::Custom(Arc::new(f))
    }

    /// Payment due for a month starting at `balance`
    pub fn payment(&self, balance: f64, month_index: u32) -> f64 {
        match self {
            PaymentPolicy::Fixed(payment) => *payment,
            PaymentPolicy::FixedPlusExtra { payment, extra } => payment + extra.max(0.0),
            PaymentPolicy::PercentOfBalance { percent, floor } => {
                (balance * percent / 100.0).max(*floor)
            }
            PaymentPolicy::Custom(f) => f(balance, month_index),
        }
    }
}

impl fmt::Debug for PaymentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentPolicy::Fixed(payment) => f.debug_tuple("Fixed").field(payment).finish(),
            PaymentPolicy::FixedPlusExtra { payment, extra } => f
                .debug_struct("FixedPlusExtra")
                .field("payment", payment)
                .field("extra", extra)
                .finish(),
            PaymentPolicy::PercentOfBalance { percent, floor } => f
                .debug_struct("PercentOfBalance")
                .field("percent", percent)
                .field("floor", floor)
                .finish(),
            PaymentPolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
