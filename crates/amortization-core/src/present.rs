//! Rendering boundary between the amortization engine and whatever displays it.
//!
//! The engine never writes to a display. Callers hand a [`LoanPresenter`] to
//! [`present`] (or [`calculate_and_present`]) and receive the summary, the
//! schedule and the chart data in that order.

use tracing::info;

use crate::amortization::{
    compute_loan, pie_chart, summarize, LoanInput, LoanResult, LoanSummary, PeriodRow, PieChart,
};
use crate::error::AmortizationError;

/// A display surface for a computed loan.
pub trait LoanPresenter {
    type Error: From<AmortizationError>;

    /// Write the four headline figures (amount, payment, interest, total).
    fn render_summary(&mut self, summary: &LoanSummary) -> Result<(), Self::Error>;

    /// Replace the schedule table with one row per period.
    fn render_schedule(&mut self, schedule: &[PeriodRow]) -> Result<(), Self::Error>;

    /// Draw the principal-vs-interest pie.
    fn render_pie_chart(&mut self, chart: &PieChart) -> Result<(), Self::Error>;

    /// Flush anything buffered by the render calls.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Column headers of the schedule table, in order.
pub const SCHEDULE_HEADERS: [&str; 4] = ["Date", "Principal", "Interest", "Balance"];

/// Render an already computed loan through `presenter`.
pub fn present<P: LoanPresenter>(
    input: &LoanInput,
    result: &LoanResult,
    presenter: &mut P,
) -> Result<(), P::Error> {
    presenter.render_summary(&summarize(input, result))?;
    presenter.render_schedule(&result.schedule)?;
    presenter.render_pie_chart(&pie_chart(input, result))?;
    presenter.finish()
}

/// Validate, compute and render in one pass. Nothing is rendered on failure.
pub fn calculate_and_present<P: LoanPresenter>(
    input: &LoanInput,
    presenter: &mut P,
) -> Result<LoanResult, P::Error> {
    let result = compute_loan(input)?;
    info!(
        term_months = input.term_months,
        monthly_payment = %result.monthly_payment,
        "loan computed"
    );
    present(input, &result, presenter)?;
    Ok(result)
}
