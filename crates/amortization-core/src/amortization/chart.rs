use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::input::LoanInput;
use super::schedule::LoanResult;
use crate::types::*;

/// Fill color of the principal slice.
pub const PRINCIPAL_COLOR: &str = "#36A2EB";
/// Fill color of the interest slice.
pub const INTEREST_COLOR: &str = "#FF6384";

/// The four headline figures, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: Money,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payable: Money,
}

/// One slice of the principal-vs-interest pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Money,
    /// Fraction of the whole pie, 0..=1
    pub share: Decimal,
    pub color: String,
}

/// Two-slice pie chart data: principal first, interest second
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<ChartSlice>,
}

pub fn summarize(input: &LoanInput, result: &LoanResult) -> LoanSummary {
    LoanSummary {
        principal: round_display(input.principal),
        monthly_payment: round_display(result.monthly_payment),
        total_interest: round_display(result.total_interest),
        total_payable: round_display(result.total_payable),
    }
}

pub fn pie_chart(input: &LoanInput, result: &LoanResult) -> PieChart {
    let whole = input.principal + result.total_interest;
    let share = |value: Money| {
        if whole.is_zero() {
            Decimal::ZERO
        } else {
            value / whole
        }
    };

    PieChart {
        title: "Principal vs. Interest".into(),
        slices: vec![
            ChartSlice {
                label: "Principal".into(),
                value: round_display(input.principal),
                share: share(input.principal),
                color: PRINCIPAL_COLOR.into(),
            },
            ChartSlice {
                label: "Interest".into(),
                value: round_display(result.total_interest),
                share: share(result.total_interest),
                color: INTEREST_COLOR.into(),
            },
        ],
    }
}
