use amortization_core::amortization::{LoanSummary, PeriodRow, PieChart};
use amortization_core::LoanPresenter;
use serde_json::Value;
use std::io::Write;

/// Print just the key answer value from a plain result.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(val) = result_obj.get("monthly_payment") {
        println!("{}", format_minimal(val));
        return;
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Writes only the monthly payment; schedule and chart are dropped.
pub struct MinimalPresenter<W: Write> {
    out: W,
}

impl<W: Write> MinimalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LoanPresenter for MinimalPresenter<W> {
    type Error = Box<dyn std::error::Error>;

    fn render_summary(&mut self, summary: &LoanSummary) -> Result<(), Self::Error> {
        writeln!(self.out, "{}", summary.monthly_payment)?;
        Ok(())
    }

    fn render_schedule(&mut self, _schedule: &[PeriodRow]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn render_pie_chart(&mut self, _chart: &PieChart) -> Result<(), Self::Error> {
        Ok(())
    }
}
