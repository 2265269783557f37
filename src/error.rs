//! Error taxonomy for the calculation core
//!
//! Only malformed inputs are errors. A payment that never retires a debt,
//! or a simulation that hits its month cap, is reported through the result
//! types (`Payoff::Never`, `PayoffStatus`) instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("principal must be positive, got {0}")]
    InvalidPrincipal(f64),

    #[error("annual rate must be a non-negative percentage, got {0}")]
    InvalidRate(f64),

    #[error("term must be at least one month, got {0}")]
    InvalidTerm(i64),

    #[error("monthly payment must be positive, got {0}")]
    NonPositivePayment(f64),

    #[error("payment of {payment:.2} does not exceed first-month interest of {interest:.2}")]
    PaymentBelowInterest { payment: f64, interest: f64 },

    #[error("invalid rate schedule: {message}")]
    InvalidRateSchedule { message: String },

    #[error("bracket table has no brackets")]
    EmptyBracketTable,

    #[error("bracket thresholds must be strictly ascending (threshold {threshold} follows {previous})")]
    UnorderedBracketTable { previous: f64, threshold: f64 },

    #[error("comparison needs at least two scenarios, got {0}")]
    NotEnoughScenarios(usize),

    #[error("scenario '{label}' has a non-finite total")]
    NonFiniteTotal { label: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
