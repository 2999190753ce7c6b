pub mod calendar;
pub mod chart;
pub mod input;
pub mod schedule;

pub use calendar::MonthEndPolicy;
pub use chart::{pie_chart, summarize, ChartSlice, LoanSummary, PieChart};
pub use input::LoanInput;
pub use schedule::{amortize, compute_loan, LoanResult, PeriodDisplay, PeriodRow};
