use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::AmortizationError;
use crate::types::{Money, Rate};
use crate::AmortizationResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Convert an annual percentage rate (6 = 6%) into a fractional monthly rate.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / PERCENT / MONTHS_PER_YEAR
}

/// Compound growth factor `(1 + rate)^periods`
pub fn growth_factor(rate: Rate, periods: u32) -> AmortizationResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(periods))
        .ok_or_else(|| AmortizationError::Overflow {
            context: format!("growth factor (1 + {rate})^{periods}"),
        })
}

/// Level payment that retires `principal` over `periods` at `rate` per period.
///
/// A zero rate degenerates to straight division of the principal.
pub fn payment(principal: Money, rate: Rate, periods: u32) -> AmortizationResult<Money> {
    if periods == 0 {
        return Err(AmortizationError::InvalidTerm(
            "Number of periods must be > 0".into(),
        ));
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let factor = growth_factor(rate, periods)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(AmortizationError::Overflow {
            context: "payment annuity factor".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| AmortizationError::Overflow {
            context: "level payment".into(),
        })
}
