use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rtimelens::core::aggregate::{aggregate, totals};
use rtimelens::core::chart::{distribution, stacked};
use rtimelens::core::clock::FixedClock;
use rtimelens::core::filter::{FilterState, filter};
use rtimelens::models::{Category, Grouping, Occupation, TimeLogRecord, TimeRange};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::at_date(today())
}

fn occupation_pool() -> Vec<Option<Occupation>> {
    let work = Some(Category::new("cat-work", "Work"));
    let health = Some(Category::new("cat-health", "Health"));
    vec![
        Some(Occupation::new("occ-coding", "Coding", work.clone())),
        Some(Occupation::new("occ-meet", "Meetings", work)),
        Some(Occupation::new("occ-run", "Running", health)),
        Some(Occupation::new("occ-limbo", "Limbo", None)),
        None,
    ]
}

prop_compose! {
    fn record()(
        day_offset in -70i64..5,
        malformed in prop::bool::weighted(0.05),
        hours in 0u32..6,
        minutes in 0u32..90,
        occ in 0usize..5,
        id in "[a-z0-9]{6}",
    ) -> TimeLogRecord {
        let date = if malformed {
            "not-a-date".to_string()
        } else {
            (today() + Duration::days(day_offset)).format("%Y-%m-%d").to_string()
        };
        TimeLogRecord::new(id, date, hours, minutes, occupation_pool()[occ].clone())
    }
}

fn window() -> impl Strategy<Value = TimeRange> {
    prop::sample::select(TimeRange::ALL.to_vec())
}

fn grouping() -> impl Strategy<Value = Grouping> {
    prop_oneof![Just(Grouping::Category), Just(Grouping::Occupation)]
}

proptest! {
    #[test]
    fn filtered_set_is_an_ordered_subset(
        logs in prop::collection::vec(record(), 0..40),
        w in window(),
        min in 0i64..200,
    ) {
        let state = FilterState::new(w).with_minimum_duration(min);
        let out = filter(&logs, &state, &clock()).unwrap();

        prop_assert!(out.len() <= logs.len());
        // relative order preserved
        let mut cursor = 0;
        for r in out.iter() {
            let at = logs[cursor..].iter().position(|l| std::ptr::eq(l, r));
            prop_assert!(at.is_some());
            cursor += at.unwrap() + 1;
        }
        for r in out.iter() {
            prop_assert!(r.duration_minutes() >= min as u64);
        }
    }

    #[test]
    fn filtering_twice_changes_nothing(
        logs in prop::collection::vec(record(), 0..40),
        w in window(),
        min in 0i64..200,
    ) {
        let state = FilterState::new(w)
            .with_minimum_duration(min)
            .with_categories(["cat-work"]);
        let once = filter(&logs, &state, &clock()).unwrap();
        let twice = filter(once.iter(), &state, &clock()).unwrap();

        prop_assert_eq!(&once.records, &twice.records);
    }

    #[test]
    fn today_and_yesterday_never_overlap(logs in prop::collection::vec(record(), 0..40)) {
        let t = filter(&logs, &FilterState::new(TimeRange::Today), &clock()).unwrap();
        let y = filter(&logs, &FilterState::new(TimeRange::Yesterday), &clock()).unwrap();

        for r in t.iter() {
            prop_assert!(!y.iter().any(|o| std::ptr::eq(o, r)));
        }
    }

    #[test]
    fn group_totals_conserve_minutes(
        logs in prop::collection::vec(record(), 0..40),
        g in grouping(),
    ) {
        let expected: u64 = logs.iter().map(|r| r.duration_minutes()).sum();
        let groups = aggregate(&logs, g);

        prop_assert_eq!(groups.iter().map(|t| t.total_minutes).sum::<u64>(), expected);

        let both = totals(&logs);
        prop_assert_eq!(both.by_category.iter().map(|t| t.total_minutes).sum::<u64>(), expected);
        prop_assert_eq!(both.by_occupation.iter().map(|t| t.total_minutes).sum::<u64>(), expected);

        let mut labels: Vec<&str> = groups.iter().map(|t| t.label.as_str()).collect();
        let n = labels.len();
        labels.sort_unstable();
        labels.dedup();
        prop_assert_eq!(labels.len(), n);
    }

    #[test]
    fn distribution_matches_aggregate(
        logs in prop::collection::vec(record(), 0..40),
        g in grouping(),
    ) {
        let dist = distribution(&logs, g);
        let groups = aggregate(&logs, g);

        prop_assert_eq!(dist.is_no_data(), logs.is_empty());
        prop_assert_eq!(dist.slices().len(), groups.len());
        for (s, t) in dist.slices().iter().zip(&groups) {
            prop_assert_eq!(&s.label, &t.label);
            prop_assert_eq!(s.minutes, t.total_minutes);
        }
    }

    #[test]
    fn stacked_rows_sum_to_well_dated_minutes(
        logs in prop::collection::vec(record(), 0..40),
        g in grouping(),
    ) {
        let series = stacked(&logs, g);
        let dated: Vec<&TimeLogRecord> = logs.iter().filter(|r| r.calendar_date().is_some()).collect();

        let expected: u64 = dated.iter().map(|r| r.duration_minutes()).sum();
        prop_assert_eq!(series.rows.iter().map(|r| r.total()).sum::<u64>(), expected);

        // ascending, one row per date
        for pair in series.rows.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }

        // column set is exactly the labels of the dated records
        let agg_labels: Vec<String> = aggregate(dated.iter().copied(), g)
            .into_iter()
            .map(|t| t.label)
            .collect();
        prop_assert_eq!(&series.labels, &agg_labels);
        for row in &series.rows {
            for (label, _) in row.values.iter() {
                prop_assert!(series.labels.iter().any(|l| l == label));
            }
        }
    }
}

#[test]
fn empty_snapshot_yields_empty_results_everywhere() {
    let logs: Vec<TimeLogRecord> = Vec::new();
    for w in TimeRange::ALL {
        let out = filter(&logs, &FilterState::new(w), &clock()).unwrap();
        assert!(out.is_empty());
        assert!(out.malformed.is_empty());
    }
    assert!(aggregate(&logs, Grouping::Category).is_empty());
    assert!(distribution(&logs, Grouping::Occupation).is_no_data());
    assert!(stacked(&logs, Grouping::Category).is_empty());
}
