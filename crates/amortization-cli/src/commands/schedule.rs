use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;

use amortization_core::amortization::input::parse_start_date;
use amortization_core::amortization::{amortize, LoanInput, MonthEndPolicy};

use crate::input;
use crate::output;
use crate::OutputFormat;

/// How payment dates past the end of a short month are resolved
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MonthEnd {
    /// Use the last day of the month
    Clamp,
    /// Carry the extra days into the next month
    Rollover,
}

impl From<MonthEnd> for MonthEndPolicy {
    fn from(m: MonthEnd) -> Self {
        match m {
            MonthEnd::Clamp => MonthEndPolicy::Clamp,
            MonthEnd::Rollover => MonthEndPolicy::Rollover,
        }
    }
}

/// Arguments for a full amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, alias = "principal")]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent (6 = 6%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan duration in months
    #[arg(long, alias = "months")]
    pub term: Option<u32>,

    /// First payment date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Month-end handling for payment dates
    #[arg(long, value_enum, default_value = "clamp")]
    pub month_end: MonthEnd,

    /// Width of the chart bar in table output
    #[arg(long, default_value_t = output::chart::DEFAULT_WIDTH)]
    pub chart_width: usize,
}

pub fn run_schedule(
    args: ScheduleArgs,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let chart_width = args.chart_width;
    let loan = resolve_input(args)?;
    debug!(?loan, "resolved loan input");

    let envelope = amortize(&loan)?;
    output::render_loan(format, &loan, &envelope, chart_width)
}

fn resolve_input(args: ScheduleArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_loan_input(path);
    }
    if let Some(loan) = input::stdin::read_loan_input()? {
        return Ok(loan);
    }

    let principal = args
        .amount
        .ok_or("--amount is required (or provide --input)")?;
    let rate = args
        .rate
        .ok_or("--rate is required (or provide --input)")?;
    let term = args
        .term
        .ok_or("--term is required (or provide --input)")?;
    let start_date = match args.start_date {
        Some(ref raw) => parse_start_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };

    Ok(LoanInput::new(principal, rate, term, start_date).with_month_end(args.month_end.into()))
}
