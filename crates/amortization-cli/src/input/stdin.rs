use amortization_core::LoanInput;
use std::io::{self, Read};

/// Read a loan definition piped on stdin.
/// Returns None when stdin is a terminal or carries no data.
pub fn read_loan_input() -> Result<Option<LoanInput>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let input: LoanInput = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse loan from stdin: {e}"))?;
    Ok(Some(input))
}
