pub mod chart;
pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use amortization_core::{present, ComputationOutput, LoanInput, LoanResult};
use serde_json::Value;
use std::io;

use crate::OutputFormat;

/// Dispatch a plain result value to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a computed loan through the presenter matching `format`.
pub fn render_loan(
    format: &OutputFormat,
    input: &LoanInput,
    envelope: &ComputationOutput<LoanResult>,
    chart_width: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let out = stdout.lock();
    let result = &envelope.result;

    match format {
        OutputFormat::Json => present(input, result, &mut json::JsonPresenter::new(out, envelope)),
        OutputFormat::Table => present(
            input,
            result,
            &mut table::TablePresenter::new(out, chart_width).with_warnings(&envelope.warnings),
        ),
        OutputFormat::Csv => present(input, result, &mut csv_out::CsvPresenter::new(out)),
        OutputFormat::Minimal => present(input, result, &mut minimal::MinimalPresenter::new(out)),
    }
}
