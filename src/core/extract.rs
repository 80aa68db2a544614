use crate::core::{DataPoint, RawRow};

/// Parses one table cell as a locale-free decimal number.
///
/// Surrounding whitespace is ignored. Returns `None` for empty cells, text
/// that is not a number, and non-finite values such as `inf` or `NaN`.
#[must_use]
pub fn parse_cell(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converts raw table rows into data points, preserving row order.
///
/// Rows where either cell fails `parse_cell` are dropped without error.
#[must_use]
pub fn extract_points(rows: &[RawRow]) -> Vec<DataPoint> {
    rows.iter()
        .filter_map(|row| {
            let x = parse_cell(&row.x_text)?;
            let y = parse_cell(&row.y_text)?;
            Some(DataPoint::new(x, y))
        })
        .collect()
}
