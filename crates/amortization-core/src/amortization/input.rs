use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::{add_months, MonthEndPolicy};
use crate::error::AmortizationError;
use crate::types::Money;
use crate::AmortizationResult;

/// Longest supported loan: 100 years of monthly payments.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// ISO-8601 calendar date format accepted for the start date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input for a fixed-rate amortizing loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual rate as a percentage (6 = 6%)
    pub annual_rate_percent: Decimal,
    pub term_months: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub month_end: MonthEndPolicy,
}

impl LoanInput {
    pub fn new(
        principal: Money,
        annual_rate_percent: Decimal,
        term_months: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
            start_date,
            month_end: MonthEndPolicy::default(),
        }
    }

    pub fn with_month_end(mut self, policy: MonthEndPolicy) -> Self {
        self.month_end = policy;
        self
    }

    /// Reject inputs the amortization formula cannot represent.
    pub fn validate(&self) -> AmortizationResult<()> {
        validate_terms(self.principal, self.annual_rate_percent, self.term_months)?;
        add_months(self.start_date, self.term_months - 1, self.month_end).map_err(|_| {
            AmortizationError::InvalidTerm(format!(
                "Last payment of a {}-month loan starting {} is past the supported calendar",
                self.term_months, self.start_date
            ))
        })?;
        Ok(())
    }
}

/// Check amount, rate and term independent of any start date.
pub fn validate_terms(
    principal: Money,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> AmortizationResult<()> {
    if principal <= Decimal::ZERO {
        return Err(AmortizationError::InvalidAmount(format!(
            "Loan amount must be positive, got {principal}"
        )));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(AmortizationError::InvalidRate(format!(
            "Annual rate cannot be negative, got {annual_rate_percent}%"
        )));
    }
    if term_months == 0 {
        return Err(AmortizationError::InvalidTerm(
            "Loan duration must be at least 1 month".into(),
        ));
    }
    if term_months > MAX_TERM_MONTHS {
        return Err(AmortizationError::InvalidTerm(format!(
            "Loan duration cannot exceed {MAX_TERM_MONTHS} months, got {term_months}"
        )));
    }
    Ok(())
}

/// Parse a start date in `YYYY-MM-DD` form.
pub fn parse_start_date(raw: &str) -> AmortizationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        AmortizationError::InvalidDate(format!("'{raw}' is not a YYYY-MM-DD date ({e})"))
    })
}
