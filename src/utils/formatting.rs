//! Formatting utilities used for CLI, GUI and export outputs.

/// Render a numeric cell without float artifacts: `1.0` → `"1"`, `2.5` → `"2.5"`.
pub fn render_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Running total as shown in the display field (`190.0`, `0.0`, `12.5`).
pub fn display_total(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 {
        format!("{:.1}", total)
    } else {
        format!("{}", total)
    }
}

/// `20240307` → `2024-03-07`; falls back to the raw number.
pub fn display_stamp(stamp: u32) -> String {
    match crate::utils::date::stamp_to_date(stamp) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => stamp.to_string(),
    }
}
