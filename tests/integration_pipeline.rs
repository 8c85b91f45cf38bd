//! Integration tests for the full analysis pipeline.
//!
//! These run load → derive → filter → engines over the fixture exports in
//! `testdata/` and verify the end-to-end results, including the absence
//! sentinels and raw-record paging.

#![expect(clippy::unwrap_used)]

use bikeshare::config::DataSources;
use bikeshare::model::{City, DayFilter, MonthFilter, MonthName};
use bikeshare::paginate::RawDataPaginator;
use bikeshare::pipeline::analyse;
use bikeshare::report;
use bikeshare::stats::Stat;
use bikeshare::stats::user::BirthYearStats;

fn sources() -> DataSources {
    DataSources::with_data_dir("testdata")
}

#[test]
fn test_chicago_unfiltered() {
    let report = analyse(&sources(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();

    // Eight rows in the fixture, one with an unreadable timestamp.
    assert_eq!(report.row_count, 7);
    assert_eq!(report.excluded_rows, 1);
    assert!(report.view.profile.gender);
    assert!(report.view.profile.birth_year);

    assert_eq!(report.time.common_month, Stat::Value(MonthName::June));
    assert_eq!(report.time.common_weekday, Stat::Value("Monday".to_owned()));
    assert_eq!(report.time.common_hour, Stat::Value(8));

    assert_eq!(
        report.stations.common_start_station,
        Stat::Value("Canal St".to_owned())
    );
    assert_eq!(
        report.stations.common_end_station,
        Stat::Value("State St".to_owned())
    );
    assert_eq!(
        report.stations.common_route,
        Stat::Value("From Canal St to State St".to_owned())
    );

    assert_eq!(report.durations.total_seconds, Stat::Value(4150.0));
    let mean = match report.durations.mean_seconds {
        Stat::Value(m) => m,
        ref other => panic!("expected mean, got {other:?}"),
    };
    assert!((mean - 4150.0 / 7.0).abs() < 1e-9);

    assert_eq!(
        report.users.user_types,
        Stat::Value(vec![("Subscriber".to_owned(), 4), ("Customer".to_owned(), 3)])
    );
    // Male and Female tie at 3; Male appears first in the data.
    assert_eq!(
        report.users.genders,
        Stat::Value(vec![("Male".to_owned(), 3), ("Female".to_owned(), 3)])
    );
    assert_eq!(
        report.users.birth_years,
        Stat::Value(BirthYearStats {
            earliest: 1975,
            latest: 2000,
            most_common: vec![1980, 1990],
        })
    );
}

#[test]
fn test_chicago_filtered_to_june_mondays() {
    let report = analyse(
        &sources(),
        City::Chicago,
        MonthFilter::Only(MonthName::June),
        DayFilter::Only(chrono::Weekday::Mon),
    )
    .unwrap();

    assert_eq!(report.row_count, 3);
    // Filtered dimensions are inapplicable, not missing.
    assert_eq!(report.time.common_month, Stat::Inapplicable);
    assert_eq!(report.time.common_weekday, Stat::Inapplicable);
    assert_eq!(report.time.common_hour, Stat::Value(8));

    assert_eq!(report.durations.total_seconds, Stat::Value(2100.0));
    assert_eq!(report.durations.mean_seconds, Stat::Value(700.0));
}

#[test]
fn test_washington_lacks_demographic_columns() {
    let report = analyse(&sources(), City::Washington, MonthFilter::All, DayFilter::All).unwrap();

    assert!(!report.view.profile.gender);
    assert!(!report.view.profile.birth_year);
    assert_eq!(report.users.genders, Stat::FieldAbsent);
    assert_eq!(report.users.birth_years, Stat::FieldAbsent);
    assert_eq!(
        report.users.user_types,
        Stat::Value(vec![("Registered".to_owned(), 2), ("Casual".to_owned(), 1)])
    );

    let text = report::render(&report);
    assert!(text.contains("The Washington dataset does not include gender data."));
    assert!(text.contains("The Washington dataset does not include birth year data."));
}

#[test]
fn test_empty_filter_result_reports_no_data_everywhere() {
    let report = analyse(
        &sources(),
        City::Chicago,
        MonthFilter::Only(MonthName::December),
        DayFilter::All,
    )
    .unwrap();

    assert_eq!(report.row_count, 0);
    assert_eq!(report.time.common_weekday, Stat::NoData);
    assert_eq!(report.time.common_hour, Stat::NoData);
    assert_eq!(report.stations.common_start_station, Stat::NoData);
    assert_eq!(report.durations.total_seconds, Stat::NoData);
    assert_eq!(report.durations.mean_seconds, Stat::NoData);
    assert_eq!(report.users.user_types, Stat::NoData);
    // Schema still has the columns, so these are NoData, not FieldAbsent.
    assert_eq!(report.users.genders, Stat::NoData);
    assert_eq!(report.users.birth_years, Stat::NoData);

    let mut pager = RawDataPaginator::new(&report.view);
    let page = pager.next_page();
    assert!(page.is_empty());
    assert!(!page.has_more);
}

#[test]
fn test_raw_paging_over_seven_matching_records() {
    let report = analyse(&sources(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();
    let mut pager = RawDataPaginator::new(&report.view);

    let first = pager.next_page();
    assert_eq!(first.rows.height(), 5);
    assert!(first.has_more);

    let second = pager.next_page();
    assert_eq!(second.rows.height(), 2);
    assert!(!second.has_more);

    let third = pager.next_page();
    assert!(third.is_empty());
    assert!(!third.has_more);
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let report = analyse(&sources(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();
    let json = report::render_json(&report).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["city"], "chicago");
    assert_eq!(parsed["month"], "all");
    assert_eq!(parsed["row_count"], 7);
    assert_eq!(parsed["time"]["common_hour"]["status"], "value");
    assert_eq!(parsed["time"]["common_hour"]["value"], 8);
    assert_eq!(parsed["users"]["genders"]["status"], "value");
}
