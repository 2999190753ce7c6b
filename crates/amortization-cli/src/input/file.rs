use amortization_core::LoanInput;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a loan definition from a JSON file.
pub fn read_loan_input(path: &str) -> Result<LoanInput, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    let input: LoanInput = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse loan in '{}': {}", resolved.display(), e))?;
    Ok(input)
}

fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("File not found: {}", resolved.display()).into());
    }

    if !resolved.is_file() {
        return Err(format!("Not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}
