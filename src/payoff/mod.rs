//! Iterative payoff simulator for variable payment and rate regimes

mod state;
mod policy;
mod engine;
mod scenarios;

pub use state::PayoffState;
pub use policy::{PaymentFn, PaymentPolicy, PhaseDuration, RatePhase, RateSchedule};
pub use engine::{simulate_payoff, PayoffConfig, PayoffResult, PayoffRow, PayoffStatus, DEFAULT_MAX_MONTHS};
pub use scenarios::{
    balance_transfer_payoff, extra_payment_payoff, minimum_payment_payoff, BalanceTransfer,
    BalanceTransferResult,
};
