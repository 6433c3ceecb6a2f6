use std::fmt::Write;

use crate::data::model::{Dataset, Range};
use crate::metrics::Losses;

pub const DEFAULT_PRECISION: usize = 10;

/// Format a float with `precision` decimals.  Non-finite values are spelled
/// `nan`, `inf` and `-inf`.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{value:.precision$}")
    }
}

fn format_range(range: Range, precision: usize) -> String {
    format!(
        "{} to {}",
        format_value(range.min, precision),
        format_value(range.max, precision)
    )
}

/// Render the loss table followed by the descriptive statistics block.
pub fn render(
    losses: &Losses,
    reference: &Dataset,
    obtained: &Dataset,
    precision: usize,
) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Loss values:");
    for (name, value) in losses.iter() {
        let _ = writeln!(out, "{name}: {}", format_value(value, precision));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Additional Statistics:");
    let _ = writeln!(out, "Number of data points: {}", reference.len());
    let _ = writeln!(out, "X range: {}", format_range(reference.x_range(), precision));
    let _ = writeln!(
        out,
        "Y range (reference): {}",
        format_range(reference.y_range(), precision)
    );
    let _ = writeln!(
        out,
        "Y range (obtained): {}",
        format_range(obtained.y_range(), precision)
    );

    out
}
