use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Strict `YYYY-MM-DD`, used for dates typed on the command line.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Calendar date of a stored record.
///
/// Sources normally deliver `YYYY-MM-DD`; full ISO date-times are accepted
/// too and truncated to their (local, unconverted) date part.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
