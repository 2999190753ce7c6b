use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::AmortizationResult;

/// How a payment date is resolved when the start day does not exist in the
/// target month (e.g. the 31st advanced into February).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthEndPolicy {
    /// Pin to the last day of the target month (Jan 31 -> Feb 29 -> Mar 31)
    #[default]
    Clamp,
    /// Spill the excess days into the following month (Jan 31 -> Mar 2)
    Rollover,
}

/// Advance `start` by `months` whole calendar months.
pub fn add_months(
    start: NaiveDate,
    months: u32,
    policy: MonthEndPolicy,
) -> AmortizationResult<NaiveDate> {
    let shifted = match policy {
        MonthEndPolicy::Clamp => start.checked_add_months(Months::new(months)),
        MonthEndPolicy::Rollover => start
            .with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(months)))
            .and_then(|first| first.checked_add_days(Days::new(u64::from(start.day() - 1)))),
    };

    shifted.ok_or_else(|| {
        AmortizationError::InvalidDate(format!(
            "{start} advanced by {months} months is out of range"
        ))
    })
}

/// True when `date` did not land on the start's day of month.
pub fn is_adjusted(start: NaiveDate, date: NaiveDate) -> bool {
    start.day() != date.day()
}
