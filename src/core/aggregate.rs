//! Per-group duration totals.
//!
//! Totals are emitted in the order their label is first met in the input;
//! nothing here sorts. Callers wanting alphabetical or
//! largest-first output sort the returned vector themselves.

use crate::core::label_totals::LabelTotals;
use crate::models::{Grouping, HoursMinutes, TimeLogRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub label: String,
    pub total_minutes: u64,
}

impl GroupTotal {
    pub fn split(&self) -> HoursMinutes {
        HoursMinutes::from(self.total_minutes)
    }
}

/// Both groupings over the same record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisTotals {
    pub by_category: Vec<GroupTotal>,
    pub by_occupation: Vec<GroupTotal>,
}

impl AnalysisTotals {
    pub fn for_grouping(&self, grouping: Grouping) -> &[GroupTotal] {
        match grouping {
            Grouping::Category => &self.by_category,
            Grouping::Occupation => &self.by_occupation,
        }
    }
}

/// Bucket label of a record, with the "Unknown …" fallbacks.
pub fn group_label(record: &TimeLogRecord, grouping: Grouping) -> &str {
    match grouping {
        Grouping::Category => record.category_label(),
        Grouping::Occupation => record.occupation_label(),
    }
}

pub(crate) fn accumulate<'a, I>(records: I, grouping: Grouping) -> LabelTotals
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    let mut totals = LabelTotals::new();
    for record in records {
        if record.occupation.is_none() {
            tracing::debug!(record = %record.id, occupation = %record.occupation_id, "unresolved occupation");
        }
        totals.add(group_label(record, grouping), record.duration_minutes());
    }
    totals
}

pub fn aggregate<'a, I>(records: I, grouping: Grouping) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    accumulate(records, grouping)
        .into_entries()
        .into_iter()
        .map(|(label, total_minutes)| GroupTotal {
            label,
            total_minutes,
        })
        .collect()
}

pub fn totals<'a, I>(records: I) -> AnalysisTotals
where
    I: IntoIterator<Item = &'a TimeLogRecord> + Clone,
{
    AnalysisTotals {
        by_category: aggregate(records.clone(), Grouping::Category),
        by_occupation: aggregate(records, Grouping::Occupation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Occupation};

    fn rec(id: &str, minutes: u32, occ: Option<(&str, &str, Option<(&str, &str)>)>) -> TimeLogRecord {
        let occupation = occ.map(|(oid, oname, cat)| {
            Occupation::new(oid, oname, cat.map(|(cid, cname)| Category::new(cid, cname)))
        });
        TimeLogRecord::new(id, "2024-05-10", 0, minutes, occupation)
    }

    #[test]
    fn same_category_collapses_into_one_row() {
        let logs = vec![
            rec("1", 90, Some(("occ-1", "Coding", Some(("cat-1", "Work"))))),
            rec("2", 30, Some(("occ-2", "Meetings", Some(("cat-1", "Work"))))),
        ];

        let by_cat = aggregate(&logs, Grouping::Category);
        assert_eq!(by_cat.len(), 1);
        assert_eq!(by_cat[0].label, "Work");
        assert_eq!(by_cat[0].split(), HoursMinutes { hours: 2, minutes: 0 });

        let by_occ = aggregate(&logs, Grouping::Occupation);
        let labels: Vec<_> = by_occ.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Coding", "Meetings"]);
        assert_eq!(by_occ[0].split(), HoursMinutes { hours: 1, minutes: 30 });
        assert_eq!(by_occ[1].split(), HoursMinutes { hours: 0, minutes: 30 });
    }

    #[test]
    fn emission_follows_first_seen_not_alphabetical_order() {
        let logs = vec![
            rec("1", 10, Some(("o-z", "Zumba", Some(("c-s", "Sport"))))),
            rec("2", 10, Some(("o-a", "Admin", Some(("c-w", "Work"))))),
            rec("3", 10, Some(("o-z", "Zumba", Some(("c-s", "Sport"))))),
            rec("4", 10, Some(("o-b", "Biking", Some(("c-s", "Sport"))))),
        ];
        let labels: Vec<_> = aggregate(&logs, Grouping::Occupation)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["Zumba", "Admin", "Biking"]);

        let cats: Vec<_> = aggregate(&logs, Grouping::Category)
            .into_iter()
            .map(|t| (t.label, t.total_minutes))
            .collect();
        assert_eq!(cats, vec![("Sport".to_string(), 30), ("Work".to_string(), 10)]);
    }

    #[test]
    fn unresolved_references_land_in_unknown_buckets() {
        let logs = vec![
            rec("1", 20, None),
            rec("2", 15, Some(("occ-1", "Reading", None))),
            rec("3", 5, None),
        ];
        let t = totals(&logs);
        assert_eq!(
            t.by_category,
            vec![GroupTotal {
                label: "Unknown Category".into(),
                total_minutes: 40
            }]
        );
        assert_eq!(
            t.by_occupation,
            vec![
                GroupTotal {
                    label: "Unknown Occupation".into(),
                    total_minutes: 25
                },
                GroupTotal {
                    label: "Reading".into(),
                    total_minutes: 15
                },
            ]
        );
    }

    #[test]
    fn empty_name_merges_with_the_unknown_bucket() {
        let logs = vec![
            rec("1", 60, Some(("occ-1", "", Some(("cat-1", ""))))),
            rec("2", 10, None),
        ];
        let t = totals(&logs);
        assert_eq!(
            t.by_occupation,
            vec![GroupTotal {
                label: "Unknown Occupation".into(),
                total_minutes: 70
            }]
        );
        assert_eq!(t.by_category[0].label, "Unknown Category");
        assert_eq!(t.by_category.len(), 1);
    }

    #[test]
    fn totals_conserve_minutes() {
        let logs = vec![
            rec("1", 61, Some(("occ-1", "Coding", Some(("cat-1", "Work"))))),
            rec("2", 7, None),
            rec("3", 130, Some(("occ-2", "Gym", Some(("cat-2", "Health"))))),
        ];
        let expected: u64 = logs.iter().map(TimeLogRecord::duration_minutes).sum();
        let t = totals(&logs);
        for g in [Grouping::Category, Grouping::Occupation] {
            let sum: u64 = t.for_grouping(g).iter().map(|r| r.total_minutes).sum();
            assert_eq!(sum, expected);
        }
    }

    #[test]
    fn empty_input_gives_no_rows() {
        let logs: Vec<TimeLogRecord> = Vec::new();
        assert_eq!(totals(&logs), AnalysisTotals::default());
    }
}
