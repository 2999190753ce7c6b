use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::calendar::{add_months, is_adjusted, MonthEndPolicy};
use super::input::LoanInput;
use crate::error::AmortizationError;
use crate::time_value::{monthly_rate, payment};
use crate::types::*;
use crate::AmortizationResult;

/// Values of a period rounded for display. Never fed back into the recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodDisplay {
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

/// A single month in the repayment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRow {
    /// 1-based period number
    pub period: u32,
    pub date: NaiveDate,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
    pub display: PeriodDisplay,
}

/// Output of a loan amortization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_rate: Rate,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payable: Money,
    pub schedule: Vec<PeriodRow>,
}

impl LoanResult {
    /// Sum of the principal portions across the schedule.
    pub fn principal_repaid(&self) -> Money {
        self.schedule.iter().map(|p| p.principal_portion).sum()
    }

    /// Balance left after the final period.
    pub fn final_balance(&self) -> Money {
        self.schedule
            .last()
            .map(|p| p.remaining_balance)
            .unwrap_or(Decimal::ZERO)
    }
}

fn overflow(context: &str) -> AmortizationError {
    AmortizationError::Overflow {
        context: context.to_string(),
    }
}

/// Compute the level monthly payment and month-by-month schedule of a loan.
pub fn compute_loan(input: &LoanInput) -> AmortizationResult<LoanResult> {
    input.validate()?;

    let rate = monthly_rate(input.annual_rate_percent);
    let monthly_payment = payment(input.principal, rate, input.term_months)?;

    debug!(
        principal = %input.principal,
        monthly_rate = %rate,
        term_months = input.term_months,
        monthly_payment = %monthly_payment,
        "computing amortization schedule"
    );

    let term = Decimal::from(input.term_months);
    let total_paid = monthly_payment
        .checked_mul(term)
        .ok_or_else(|| overflow("total of payments"))?;
    let total_interest = total_paid
        .checked_sub(input.principal)
        .ok_or_else(|| overflow("total interest"))?;
    let total_payable = total_interest
        .checked_add(input.principal)
        .ok_or_else(|| overflow("total payable"))?;

    // term_months is bounded by validate()
    let mut schedule = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;

    for i in 0..input.term_months {
        let date = add_months(input.start_date, i, input.month_end)?;
        let interest = balance
            .checked_mul(rate)
            .ok_or_else(|| overflow("period interest"))?;
        let principal_portion = monthly_payment - interest;
        balance -= principal_portion;

        schedule.push(PeriodRow {
            period: i + 1,
            date,
            principal_portion,
            interest_portion: interest,
            remaining_balance: balance,
            display: PeriodDisplay {
                principal_portion: round_display(principal_portion),
                interest_portion: round_display(interest),
                remaining_balance: round_display(balance),
            },
        });
    }

    Ok(LoanResult {
        monthly_rate: rate,
        monthly_payment,
        total_interest,
        total_payable,
        schedule,
    })
}

/// Run [`compute_loan`] and wrap it in the standard output envelope.
pub fn amortize(input: &LoanInput) -> AmortizationResult<ComputationOutput<LoanResult>> {
    let start = Instant::now();
    let result = compute_loan(input)?;

    let mut warnings: Vec<String> = Vec::new();

    if input.annual_rate_percent.is_zero() {
        warnings.push("Zero interest rate: payment is principal divided by term".into());
    }

    let adjusted = result
        .schedule
        .iter()
        .filter(|p| is_adjusted(input.start_date, p.date))
        .count();
    if adjusted > 0 {
        let verb = match input.month_end {
            MonthEndPolicy::Clamp => "clamped to month end",
            MonthEndPolicy::Rollover => "rolled into the following month",
        };
        warnings.push(format!("{adjusted} payment date(s) {verb}"));
    }

    for w in &warnings {
        warn!("{w}");
    }

    let elapsed = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    Ok(with_metadata(
        "Fixed-Rate Level-Payment Amortization",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "monthly_rate": result.monthly_rate.to_string(),
            "term_months": input.term_months,
            "start_date": input.start_date.to_string(),
            "month_end": input.month_end,
        }),
        warnings,
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_input() -> LoanInput {
        LoanInput::new(dec!(120000), dec!(6), 12, date(2024, 1, 1))
    }

    #[test]
    fn test_first_period_split() {
        let result = compute_loan(&sample_input()).unwrap();
        let first = &result.schedule[0];

        // Interest on 120k at 0.5% = 600
        assert_eq!(first.interest_portion, dec!(600));
        assert_eq!(first.display.interest_portion.to_string(), "600.00");
        assert_eq!(first.display.principal_portion, dec!(9727.97));
        assert_eq!(first.display.remaining_balance, dec!(110272.03));
    }

    #[test]
    fn test_running_balance_is_unrounded() {
        let result = compute_loan(&sample_input()).unwrap();
        let first = &result.schedule[0];
        let second = &result.schedule[1];

        assert_ne!(first.remaining_balance, first.display.remaining_balance);
        assert_eq!(second.interest_portion, first.remaining_balance * dec!(0.005));
    }

    #[test]
    fn test_zero_term_error() {
        let mut input = sample_input();
        input.term_months = 0;
        assert!(matches!(
            compute_loan(&input),
            Err(AmortizationError::InvalidTerm(_))
        ));
    }

    #[test]
    fn test_envelope_warns_on_zero_rate() {
        let mut input = sample_input();
        input.annual_rate_percent = Decimal::ZERO;
        let output = amortize(&input).unwrap();
        assert_eq!(output.result.monthly_payment, dec!(10000));
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains("Zero interest rate"));
    }

    #[test]
    fn test_envelope_warns_on_clamped_dates() {
        let mut input = sample_input();
        input.start_date = date(2024, 1, 31);
        let output = amortize(&input).unwrap();
        // Feb, Apr, Jun, Sep, Nov have fewer than 31 days
        assert!(output.warnings.iter().any(|w| w == "5 payment date(s) clamped to month end"));
        assert_eq!(output.methodology, "Fixed-Rate Level-Payment Amortization");
        assert_eq!(output.assumptions["term_months"], 12);
        assert_eq!(output.assumptions["month_end"], "clamp");
    }

    #[test]
    fn test_envelope_no_warnings_for_plain_loan() {
        let output = amortize(&sample_input()).unwrap();
        assert!(output.warnings.is_empty());
    }
}
