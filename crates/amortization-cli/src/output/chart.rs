use amortization_core::amortization::PieChart;
use colored::{ColoredString, Colorize};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Bar width used when none is given.
pub const DEFAULT_WIDTH: usize = 60;

const BLOCK: &str = "█";

/// Parse a `#RRGGBB` color.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: &str, color: &str) -> ColoredString {
    match parse_hex(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Split `width` cells between the slices by share. Every non-empty slice
/// gets at least one cell and the cells always add up to `width`.
pub fn cell_counts(chart: &PieChart, width: usize) -> Vec<usize> {
    let width_dec = Decimal::from(width);
    let mut counts: Vec<usize> = chart
        .slices
        .iter()
        .map(|s| {
            let cells = (s.share * width_dec).round().to_usize().unwrap_or(0);
            if cells == 0 && !s.share.is_zero() {
                1
            } else {
                cells
            }
        })
        .collect();

    let total: usize = counts.iter().sum();
    if let Some(largest) = counts.iter_mut().max() {
        if total > width {
            *largest = largest.saturating_sub(total - width);
        } else {
            *largest += width - total;
        }
    }
    counts
}

/// Draw the pie as a proportional bar followed by a legend.
pub fn render(chart: &PieChart, width: usize) -> String {
    let width = width.max(chart.slices.len());
    let counts = cell_counts(chart, width);

    let bar: String = chart
        .slices
        .iter()
        .zip(&counts)
        .map(|(slice, &n)| paint(&BLOCK.repeat(n), &slice.color).to_string())
        .collect();

    let mut lines = vec![chart.title.as_str().bold().to_string(), bar];
    for slice in &chart.slices {
        let pct = (slice.share * Decimal::ONE_HUNDRED).round_dp(1);
        lines.push(format!(
            "{} {:<10} {:>14} ({}%)",
            paint("■", &slice.color),
            slice.label,
            slice.value,
            pct
        ));
    }
    lines.join("\n")
}
