//! fincalc CLI
//!
//! Command-line driver for running the calculators by hand

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use fincalc::amortization::{self, LoanTerms, PaymentPlan, Payoff};
use fincalc::comparison::{compare, Direction, Scenario};
use fincalc::growth::{future_value, future_value_series, GrowthParameters};
use fincalc::payoff::{
    balance_transfer_payoff, extra_payment_payoff, minimum_payment_payoff, BalanceTransfer,
    PayoffConfig, PayoffResult, PayoffStatus,
};
use fincalc::tax::{self, FilingStatus};

#[derive(Parser, Debug)]
#[command(name = "fincalc", version, about = "Loan, payoff, growth and tax calculators")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fixed-rate loan payment, payoff time and totals
    Loan {
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
        /// Extra amount paid on top of the scheduled payment
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        /// First payment date (YYYY-MM-DD), used to report the payoff date
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Print the first N rows of the amortization table
        #[arg(long, default_value_t = 0)]
        rows: usize,
    },
    /// Simulate paying down a balance month by month
    Payoff {
        #[arg(long)]
        balance: f64,
        #[arg(long)]
        rate: f64,
        /// Fixed monthly payment
        #[arg(long, conflicts_with = "min_percent")]
        payment: Option<f64>,
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        /// Minimum payment as a percentage of the balance
        #[arg(long)]
        min_percent: Option<f64>,
        /// Absolute floor for the percentage minimum
        #[arg(long, default_value_t = 25.0)]
        min_floor: f64,
        #[arg(long, default_value_t = fincalc::payoff::DEFAULT_MAX_MONTHS)]
        max_months: u32,
    },
    /// Compare keeping a card against a balance transfer
    Transfer {
        #[arg(long)]
        balance: f64,
        /// Current card rate in percent
        #[arg(long)]
        current_rate: f64,
        #[arg(long, default_value_t = 0.0)]
        promo_rate: f64,
        #[arg(long)]
        promo_months: u32,
        #[arg(long)]
        post_rate: f64,
        /// Transfer fee in percent of the balance
        #[arg(long, default_value_t = 3.0)]
        fee: f64,
        #[arg(long)]
        payment: f64,
    },
    /// Future value of a lump sum plus monthly contributions
    Growth {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Federal income tax on taxable income
    Tax {
        #[arg(long)]
        income: f64,
        #[arg(long, value_enum, default_value_t = StatusArg::Single)]
        status: StatusArg,
        /// Subtract the standard deduction from income first
        #[arg(long)]
        standard_deduction: bool,
        /// Bracket table CSV (threshold,rate) instead of the built-in 2024 table
        #[arg(long)]
        brackets: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StatusArg {
    Single,
    Joint,
    Head,
}

impl From<StatusArg> for FilingStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Single => FilingStatus::Single,
            StatusArg::Joint => FilingStatus::MarriedFilingJointly,
            StatusArg::Head => FilingStatus::HeadOfHousehold,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Loan { principal, rate, months, extra, start, rows } => {
            run_loan(cli.json, principal, rate, months, extra, start, rows)
        }
        Command::Payoff { balance, rate, payment, extra, min_percent, min_floor, max_months } => {
            let config = PayoffConfig {
                max_months,
                ..Default::default()
            };
            let result = match (payment, min_percent) {
                (Some(payment), _) => extra_payment_payoff(balance, rate, payment, extra, &config)?,
                (None, Some(percent)) => minimum_payment_payoff(balance, rate, percent, min_floor, &config)?,
                (None, None) => bail!("either --payment or --min-percent is required"),
            };
            if cli.json {
                print_json(&result)
            } else {
                print_payoff("Payoff", &result);
                Ok(())
            }
        }
        Command::Transfer { balance, current_rate, promo_rate, promo_months, post_rate, fee, payment } => {
            let config = PayoffConfig::default();
            let keep = extra_payment_payoff(balance, current_rate, payment, 0.0, &config)?;
            let transfer = balance_transfer_payoff(
                &BalanceTransfer {
                    balance,
                    promo_rate_percent: promo_rate,
                    promo_months,
                    post_promo_rate_percent: post_rate,
                    transfer_fee_percent: fee,
                    monthly_payment: payment,
                },
                &config,
            )?;

            let scenarios: Vec<Scenario> = [
                Scenario::from_payoff("Keep current card", &keep, 0.0),
                Scenario::from_payoff("Balance transfer", &transfer.payoff, transfer.transfer_fee),
            ]
            .into_iter()
            .flatten()
            .collect();

            if cli.json {
                return print_json(&serde_json::json!({
                    "keep": keep,
                    "transfer": transfer,
                    "comparison": compare(&scenarios, Direction::LowerIsBetter).ok(),
                }));
            }

            print_payoff("Keep current card", &keep);
            print_payoff("Balance transfer", &transfer.payoff);
            println!("  Transfer fee: ${:.2}", transfer.transfer_fee);
            println!("  Total cost: ${:.2}", transfer.total_cost);
            match compare(&scenarios, Direction::LowerIsBetter) {
                Ok(result) => match result.winner() {
                    Some(label) => println!("\n{} saves ${:.2}", label, result.advantage),
                    None => println!("\nBoth options cost the same"),
                },
                Err(_) => println!("\nAt least one option never pays off; no cost comparison"),
            }
            Ok(())
        }
        Command::Growth { initial, monthly, rate, years } => {
            let params = GrowthParameters::monthly_from_annual(initial, monthly, rate, years);
            let series = future_value_series(&params);
            if cli.json {
                return print_json(&series);
            }
            println!("Final balance: ${:.2}", future_value(&params));
            println!("Contributed:   ${:.2}", params.total_contributed());
            println!("Earnings:      ${:.2}", series.total_earnings());
            println!("\n{:>4} {:>14}", "Year", "Balance");
            for point in series.points.iter().filter(|p| p.period > 0 && p.period % 12 == 0) {
                println!("{:>4} {:>14.2}", point.period / 12, point.balance);
            }
            Ok(())
        }
        Command::Tax { income, status, standard_deduction, brackets } => {
            let status = FilingStatus::from(status);
            let table = match brackets {
                Some(path) => tax::load_brackets(&path)
                    .with_context(|| format!("failed to load brackets from {}", path.display()))?,
                None => tax::federal_2024(status)?,
            };
            let taxable = if standard_deduction {
                (income - status.standard_deduction_2024()).max(0.0)
            } else {
                income
            };
            let summary = tax::summarize(taxable, &table);
            if cli.json {
                return print_json(&summary);
            }
            println!("Taxable income: ${:.2}", summary.taxable_income);
            println!("Tax owed:       ${:.2}", summary.tax_owed);
            println!("Effective rate: {:.2}%", summary.effective_rate * 100.0);
            println!("Marginal rate:  {:.0}%", summary.marginal_rate * 100.0);
            Ok(())
        }
    }
}

fn run_loan(
    json: bool,
    principal: f64,
    rate: f64,
    months: u32,
    extra: f64,
    start: Option<NaiveDate>,
    rows: usize,
) -> anyhow::Result<()> {
    let loan = LoanTerms::new(principal, rate, months)?;
    let payment = amortization::monthly_payment(&loan)?;
    let plan = PaymentPlan::new(payment, extra);
    let result = amortization::amortize(&loan, &plan)?;
    let table = amortization::schedule(&loan, &plan, fincalc::payoff::DEFAULT_MAX_MONTHS)?;

    if json {
        return print_json(&serde_json::json!({
            "monthlyPayment": payment,
            "result": result,
            "schedule": table,
        }));
    }

    println!("Monthly payment: ${:.2}", payment);
    if extra > 0.0 {
        println!("With extra:      ${:.2}", plan.total_payment());
    }
    match result.months_to_payoff {
        Payoff::Months(m) => println!("Months to payoff: {:.1}", m),
        Payoff::Never => println!("Months to payoff: never (payment too low)"),
    }
    if let (Some(paid), Some(interest)) = (result.total_paid, result.total_interest) {
        println!("Total paid:      ${:.2}", paid);
        println!("Total interest:  ${:.2}", interest);
    }
    if let Some(date) = start.and_then(|s| amortization::payoff_date(s, result.months_to_payoff)) {
        println!("Payoff date:     {}", date);
    }

    if rows > 0 {
        println!("\n{:>5} {:>12} {:>12} {:>12} {:>14}", "Month", "Payment", "Interest", "Principal", "Balance");
        println!("{}", "-".repeat(60));
        for row in table.rows.iter().take(rows) {
            println!(
                "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                row.month, row.payment, row.interest, row.principal, row.ending_balance
            );
        }
        if table.rows.len() > rows {
            println!("... ({} more months)", table.rows.len() - rows);
        }
    }
    Ok(())
}

fn print_payoff(title: &str, result: &PayoffResult) {
    println!("{}:", title);
    match result.status {
        PayoffStatus::PaidOff => println!("  Paid off in {} months", result.months_elapsed),
        PayoffStatus::Capped => println!(
            "  Not paid off after {} months (balance ${:.2})",
            result.months_elapsed, result.remaining_balance
        ),
        PayoffStatus::NonConvergent => println!("  Never (payment does not cover interest)"),
    }
    println!("  Total paid: ${:.2}", result.total_paid);
    println!("  Total interest: ${:.2}", result.total_interest);
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
