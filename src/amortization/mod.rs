//! Fixed-rate loan amortization: level payments, payoff time, totals and tables

mod types;
mod engine;
mod schedule;

pub use types::{AmortizationResult, LoanTerms, Payoff, PaymentPlan, PaymentTotals};
pub use engine::{
    amortize, amortize_with_extra, monthly_payment, months_to_payoff, payoff_date,
    total_paid_and_interest,
};
pub use schedule::{schedule, AmortizationSchedule, ScheduleRow, YearTotals};
