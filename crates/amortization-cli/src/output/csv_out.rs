use amortization_core::amortization::{LoanSummary, PeriodRow, PieChart};
use amortization_core::present::SCHEDULE_HEADERS;
use amortization_core::LoanPresenter;
use serde_json::Value;
use std::io::{self, Write};

/// Write a plain result value as two-column CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let fields = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match fields {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(fields)]);
        }
    }

    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// CSV presenter. Each render call appends its own header row, so the
/// output holds three sections of differing width.
pub struct CsvPresenter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> CsvPresenter<W> {
    pub fn new(out: W) -> Self {
        let wtr = csv::WriterBuilder::new().flexible(true).from_writer(out);
        Self { wtr }
    }

    pub fn into_inner(self) -> Result<W, Box<dyn std::error::Error>> {
        self.wtr.into_inner().map_err(|e| e.to_string().into())
    }
}

impl<W: Write> LoanPresenter for CsvPresenter<W> {
    type Error = Box<dyn std::error::Error>;

    fn render_summary(&mut self, summary: &LoanSummary) -> Result<(), Self::Error> {
        self.wtr.write_record(["field", "value"])?;
        self.wtr.write_record(["loan_amount".to_string(), summary.principal.to_string()])?;
        self.wtr.write_record(["monthly_payment".to_string(), summary.monthly_payment.to_string()])?;
        self.wtr.write_record(["total_interest".to_string(), summary.total_interest.to_string()])?;
        self.wtr.write_record(["total_payable".to_string(), summary.total_payable.to_string()])?;
        Ok(())
    }

    fn render_schedule(&mut self, schedule: &[PeriodRow]) -> Result<(), Self::Error> {
        self.wtr
            .write_record(SCHEDULE_HEADERS.iter().map(|h| h.to_lowercase()))?;
        for row in schedule {
            self.wtr.write_record([
                row.date.to_string(),
                row.display.principal_portion.to_string(),
                row.display.interest_portion.to_string(),
                row.display.remaining_balance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn render_pie_chart(&mut self, chart: &PieChart) -> Result<(), Self::Error> {
        self.wtr.write_record(["slice", "value", "share", "color"])?;
        for slice in &chart.slices {
            self.wtr.write_record([
                slice.label.clone(),
                slice.value.to_string(),
                slice.share.round_dp(6).to_string(),
                slice.color.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.wtr.flush()?;
        Ok(())
    }
}
