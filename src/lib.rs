//! fincalc - calculation core for personal-finance calculators
//!
//! This library provides:
//! - Fixed-rate loan amortization (payment, payoff time, totals, schedules)
//! - Month-by-month debt payoff under variable payment and rate rules
//! - Compound growth projections (stepped series and closed form)
//! - Progressive tax bracket evaluation
//! - Scenario comparison with explicit tie handling
//!
//! Every function is pure: inputs in, a fresh result out, no shared state.

pub mod error;
pub mod numeric;
pub mod amortization;
pub mod payoff;
pub mod growth;
pub mod tax;
pub mod rates;
pub mod comparison;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use amortization::{LoanTerms, PaymentPlan, Payoff, AmortizationResult};
pub use payoff::{simulate_payoff, PaymentPolicy, PayoffConfig, PayoffResult, PayoffStatus, RateSchedule};
pub use growth::GrowthParameters;
pub use tax::{BracketTable, TaxBracket};
pub use comparison::{compare, ComparisonResult, Direction, Outcome, Scenario};
