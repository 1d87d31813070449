use super::occupation::{Occupation, UNKNOWN_CATEGORY};
use crate::utils::date::parse_record_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_OCCUPATION: &str = "Unknown Occupation";

/// One logged duration against an occupation on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLogRecord {
    pub id: String,
    pub occupation_id: String,
    pub date: String, // ⇔ time_logs.date (TEXT "YYYY-MM-DD")
    pub hours: u32,
    pub minutes: u32, // not folded into hours when >= 60
    #[serde(default, rename = "occupations")]
    pub occupation: Option<Occupation>,
}

impl TimeLogRecord {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        hours: u32,
        minutes: u32,
        occupation: Option<Occupation>,
    ) -> Self {
        let occupation_id = occupation
            .as_ref()
            .map(|o| o.id.clone())
            .unwrap_or_default();
        Self {
            id: id.into(),
            occupation_id,
            date: date.into(),
            hours,
            minutes,
            occupation,
        }
    }

    pub fn duration_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date)
    }

    pub fn category_label(&self) -> &str {
        self.occupation
            .as_ref()
            .map(Occupation::category_label)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Occupation name, or the unknown bucket when the reference is
    /// dangling or the name is empty.
    pub fn occupation_label(&self) -> &str {
        self.occupation
            .as_ref()
            .map(|o| o.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_OCCUPATION)
    }

    pub fn resolved_category_id(&self) -> Option<&str> {
        self.occupation
            .as_ref()
            .and_then(Occupation::resolved_category_id)
    }
}

/// Display split of a minute total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoursMinutes {
    pub hours: u64,
    pub minutes: u64,
}

impl From<u64> for HoursMinutes {
    fn from(total: u64) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }
}
