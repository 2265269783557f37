//! Ready-made payoff scenarios used by the debt calculators
//!
//! Each helper wires a rate schedule and a payment rule into
//! [`simulate_payoff`]:
//! - extra payment on top of a fixed minimum
//! - minimum payment as a percentage of the balance with a floor
//! - balance transfer with a promotional rate and an upfront fee

use serde::{Deserialize, Serialize};

use super::engine::{simulate_payoff, PayoffConfig, PayoffResult};
use super::policy::{PaymentPolicy, RateSchedule};
use crate::error::Result;
use crate::numeric::non_negative;

/// Fixed minimum plus a constant extra payment at a single rate
pub fn extra_payment_payoff(
    balance: f64,
    annual_rate_percent: f64,
    minimum_payment: f64,
    extra_payment: f64,
    config: &PayoffConfig,
) -> Result<PayoffResult> {
    let rates = RateSchedule::fixed(annual_rate_percent)?;
    let payments = PaymentPolicy::FixedPlusExtra {
        payment: minimum_payment,
        extra: extra_payment,
    };
    Ok(simulate_payoff(balance, &rates, &payments, config))
}

/// Minimum payment recomputed monthly as `max(percent of balance, floor)`
pub fn minimum_payment_payoff(
    balance: f64,
    annual_rate_percent: f64,
    minimum_percent: f64,
    minimum_floor: f64,
    config: &PayoffConfig,
) -> Result<PayoffResult> {
    let rates = RateSchedule::fixed(annual_rate_percent)?;
    let payments = PaymentPolicy::PercentOfBalance {
        percent: non_negative(minimum_percent),
        floor: non_negative(minimum_floor),
    };
    Ok(simulate_payoff(balance, &rates, &payments, config))
}

/// Terms of a balance transfer offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalanceTransfer {
    /// Balance moved to the new card
    pub balance: f64,
    pub promo_rate_percent: f64,
    pub promo_months: u32,
    pub post_promo_rate_percent: f64,
    /// One-time fee as a percentage of the transferred balance
    pub transfer_fee_percent: f64,
    pub monthly_payment: f64,
}

impl BalanceTransfer {
    /// Upfront fee charged on the transferred balance
    pub fn transfer_fee(&self) -> f64 {
        non_negative(self.balance) * non_negative(self.transfer_fee_percent) / 100.0
    }
}

/// Simulated payoff of a transferred balance plus its fee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTransferResult {
    pub payoff: PayoffResult,
    pub transfer_fee: f64,
    /// Payments plus the upfront fee
    pub total_cost: f64,
}

/// Simulate a balance transfer
///
/// The fee is paid upfront: it is added to the reported total cost but does
/// not accrue interest as part of the simulated balance.
pub fn balance_transfer_payoff(transfer: &BalanceTransfer, config: &PayoffConfig) -> Result<BalanceTransferResult> {
    let rates = if transfer.promo_months == 0 {
        RateSchedule::fixed(transfer.post_promo_rate_percent)?
    } else {
        RateSchedule::promotional(
            transfer.promo_rate_percent,
            transfer.promo_months,
            transfer.post_promo_rate_percent,
        )?
    };

    let payoff = simulate_payoff(
        transfer.balance,
        &rates,
        &PaymentPolicy::Fixed(transfer.monthly_payment),
        config,
    );
    let transfer_fee = transfer.transfer_fee();

    Ok(BalanceTransferResult {
        total_cost: payoff.total_paid + transfer_fee,
        payoff,
        transfer_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::PayoffStatus;

    #[test]
    fn test_extra_payment_pays_off_sooner() {
        let config = PayoffConfig::default();
        let base = extra_payment_payoff(10_000.0, 18.0, 400.0, 0.0, &config).unwrap();
        let extra = extra_payment_payoff(10_000.0, 18.0, 400.0, 100.0, &config).unwrap();

        assert!(base.is_paid_off() && extra.is_paid_off());
        assert!(extra.months_elapsed < base.months_elapsed);
        assert!(extra.total_interest < base.total_interest);
    }

    #[test]
    fn test_minimum_payment_floor_takes_over() {
        let config = PayoffConfig {
            record_rows: true,
            ..Default::default()
        };
        let result = minimum_payment_payoff(5_000.0, 18.0, 2.0, 25.0, &config).unwrap();

        assert_eq!(result.status, PayoffStatus::PaidOff);
        assert_eq!(result.rows[0].payment, 100.0);
        assert!(result.rows.iter().any(|r| r.payment == 25.0));
    }

    #[test]
    fn test_minimum_below_interest_is_non_convergent() {
        // 1% of balance never covers 1.5% monthly interest, and the floor is too low
        let result = minimum_payment_payoff(5_000.0, 18.0, 1.0, 10.0, &PayoffConfig::default()).unwrap();
        assert_eq!(result.status, PayoffStatus::NonConvergent);
    }

    #[test]
    fn test_transfer_without_promo_uses_standard_rate() {
        let transfer = BalanceTransfer {
            balance: 1_000.0,
            promo_rate_percent: 0.0,
            promo_months: 0,
            post_promo_rate_percent: 12.0,
            transfer_fee_percent: 0.0,
            monthly_payment: 100.0,
        };
        let result = balance_transfer_payoff(&transfer, &PayoffConfig::default()).unwrap();
        assert!(result.payoff.total_interest > 0.0);
        assert_eq!(result.transfer_fee, 0.0);
    }
}
