use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use amortization_core::amortization::input::validate_terms;
use amortization_core::time_value::{monthly_rate, payment};
use amortization_core::types::round_display;

/// Arguments for a level payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan amount
    #[arg(long, alias = "principal")]
    pub amount: Decimal,

    /// Annual interest rate in percent (6 = 6%)
    #[arg(long)]
    pub rate: Decimal,

    /// Loan duration in months
    #[arg(long, alias = "months")]
    pub term: u32,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    validate_terms(args.amount, args.rate, args.term)?;

    let rate = monthly_rate(args.rate);
    let monthly_payment = payment(args.amount, rate, args.term)?;

    Ok(json!({
        "result": {
            "monthly_payment": round_display(monthly_payment).to_string(),
            "monthly_rate": rate.to_string(),
            "term_months": args.term,
        }
    }))
}
