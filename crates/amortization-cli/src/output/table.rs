use amortization_core::amortization::{LoanSummary, PeriodRow, PieChart};
use amortization_core::present::SCHEDULE_HEADERS;
use amortization_core::LoanPresenter;
use serde_json::Value;
use std::io::Write;
use tabled::{builder::Builder, settings::Style, Table};

use super::chart;

/// Terminal presenter: summary and schedule as tables, chart as a colored bar.
pub struct TablePresenter<W: Write> {
    out: W,
    chart_width: usize,
    warnings: Vec<String>,
}

impl<W: Write> TablePresenter<W> {
    pub fn new(out: W, chart_width: usize) -> Self {
        Self {
            out,
            chart_width,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: &[String]) -> Self {
        self.warnings = warnings.to_vec();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LoanPresenter for TablePresenter<W> {
    type Error = Box<dyn std::error::Error>;

    fn render_summary(&mut self, summary: &LoanSummary) -> Result<(), Self::Error> {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Loan amount".to_string(), summary.principal.to_string()]);
        builder.push_record(["Monthly payment".to_string(), summary.monthly_payment.to_string()]);
        builder.push_record(["Total interest".to_string(), summary.total_interest.to_string()]);
        builder.push_record(["Total payable".to_string(), summary.total_payable.to_string()]);
        writeln!(self.out, "{}\n", builder.build().with(Style::rounded()))?;
        Ok(())
    }

    fn render_schedule(&mut self, schedule: &[PeriodRow]) -> Result<(), Self::Error> {
        let mut builder = Builder::default();
        builder.push_record(SCHEDULE_HEADERS);
        for row in schedule {
            builder.push_record([
                row.date.to_string(),
                row.display.principal_portion.to_string(),
                row.display.interest_portion.to_string(),
                row.display.remaining_balance.to_string(),
            ]);
        }
        writeln!(self.out, "{}\n", builder.build().with(Style::rounded()))?;
        Ok(())
    }

    fn render_pie_chart(&mut self, pie: &PieChart) -> Result<(), Self::Error> {
        writeln!(self.out, "{}", chart::render(pie, self.chart_width))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        if !self.warnings.is_empty() {
            writeln!(self.out, "\nWarnings:")?;
            for w in &self.warnings {
                writeln!(self.out, "  - {}", w)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Format a plain result value as a Field/Value table.
pub fn print_table(value: &Value) {
    let fields = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match fields {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.as_str(), &format_value(val)]);
            }
            println!("{}", Table::from(builder));
        }
        _ => println!("{}", format_value(fields)),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
