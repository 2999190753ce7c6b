use amortization_core::amortization::{LoanSummary, PeriodRow, PieChart};
use amortization_core::{ComputationOutput, LoanPresenter, LoanResult};
use serde_json::{Map, Value};
use std::io::Write;

/// Pretty-print JSON to stdout.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Collects every render call into the envelope's `result` object and
/// writes one JSON document when finished.
pub struct JsonPresenter<W: Write> {
    out: W,
    document: Value,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W, envelope: &ComputationOutput<LoanResult>) -> Self {
        let document =
            serde_json::to_value(envelope).unwrap_or_else(|_| Value::Object(Map::new()));
        Self { out, document }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn set(&mut self, key: &str, value: Value) {
        if let Some(Value::Object(result)) = self.document.get_mut("result") {
            result.insert(key.to_string(), value);
        }
    }
}

impl<W: Write> LoanPresenter for JsonPresenter<W> {
    type Error = Box<dyn std::error::Error>;

    fn render_summary(&mut self, summary: &LoanSummary) -> Result<(), Self::Error> {
        self.set("summary", serde_json::to_value(summary)?);
        Ok(())
    }

    fn render_schedule(&mut self, schedule: &[PeriodRow]) -> Result<(), Self::Error> {
        self.set("schedule", serde_json::to_value(schedule)?);
        Ok(())
    }

    fn render_pie_chart(&mut self, chart: &PieChart) -> Result<(), Self::Error> {
        self.set("chart", serde_json::to_value(chart)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, &self.document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
