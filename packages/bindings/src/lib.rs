use napi::Result as NapiResult;
use napi_derive::napi;

use amortization_core::amortization::{self, LoanInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<LoanInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

/// Full amortization envelope: payment, totals, schedule and warnings.
#[napi]
pub fn compute_loan(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = amortization::amortize(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// The four display figures, rounded to cents.
#[napi]
pub fn loan_summary(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let result = amortization::compute_loan(&input).map_err(to_napi_error)?;
    let summary = amortization::summarize(&input, &result);
    serde_json::to_string(&summary).map_err(to_napi_error)
}

/// Principal vs. interest slices for a charting library.
#[napi]
pub fn loan_chart(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let result = amortization::compute_loan(&input).map_err(to_napi_error)?;
    let chart = amortization::pie_chart(&input, &result);
    serde_json::to_string(&chart).map_err(to_napi_error)
}
