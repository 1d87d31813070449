//! Formatting utilities used for CLI and export outputs.

use crate::models::HoursMinutes;
use unicode_width::UnicodeWidthStr;

/// Pad to a display width (labels may hold wide or accented characters).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{s}", " ".repeat(width.saturating_sub(w)))
}

/// `2h 5m` style, as in the totals list.
pub fn hm(total_minutes: u64) -> String {
    let HoursMinutes { hours, minutes } = HoursMinutes::from(total_minutes);
    format!("{hours}h {minutes}m")
}

/// Horizontal bar proportional to `share` (0.0..=1.0).
pub fn bar(share: f64, width: usize) -> String {
    let cells = (share.clamp(0.0, 1.0) * width as f64).round() as usize;
    "█".repeat(cells)
}
