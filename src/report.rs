//! Text rendering of analysis results.
//!
//! Pure string building: the interactive session and the CLI decide where
//! the text goes. Every absence sentinel gets its own wording so a reader
//! can tell "nothing matched" from "not meaningful here" from "this city
//! never recorded that".

use std::fmt::Write as _;

use crate::error::Result;
use crate::model::City;
use crate::paginate::RawPage;
use crate::pipeline::AnalysisReport;
use crate::stats::duration::DurationBreakdown;
use crate::stats::{Stat, duration, station, time, user};

const SEPARATOR_WIDTH: usize = 40;
const NO_DATA_LINE: &str = "No trips matched the selected filters.";

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn stat_line<T>(
    stat: &Stat<T>,
    value_line: impl FnOnce(&T) -> String,
    inapplicable: &str,
    field_absent: &str,
) -> String {
    match stat {
        Stat::Value(v) => value_line(v),
        Stat::NoData => NO_DATA_LINE.to_owned(),
        Stat::Inapplicable => inapplicable.to_owned(),
        Stat::FieldAbsent => field_absent.to_owned(),
        Stat::Failed(reason) => format!("Could not compute this statistic: {reason}"),
    }
}

pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Analyzing {} (month: {}, day: {})",
        report.city, report.month, report.day
    );
    let _ = writeln!(out, "{} trips matched the selection.", report.row_count);
    if report.excluded_rows > 0 {
        let _ = writeln!(
            out,
            "Note: {} records with unreadable timestamps were excluded.",
            report.excluded_rows
        );
    }
    let _ = writeln!(out, "{}", separator());

    out.push_str(&render_time(&report.time));
    out.push_str(&render_stations(&report.stations));
    out.push_str(&render_durations(&report.durations));
    out.push_str(&render_users(&report.users, report.city));

    out
}

fn render_time(stats: &time::TimeStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nThe Most Frequent Times of Travel\n");

    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.common_month,
            |m| format!("The most common month is {m}"),
            "There is no most common month, as the data is filtered to a single month.",
            "",
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.common_weekday,
            |d| format!("The most common day of week is {d}"),
            "There is no most common day, as the data is filtered to a single day.",
            "",
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.common_hour,
            |h| format!("The most common start hour is {h}:00"),
            "",
            "",
        )
    );

    let _ = writeln!(out, "\nThis took {:.4} seconds.", stats.elapsed.as_secs_f64());
    let _ = writeln!(out, "{}", separator());
    out
}

fn render_stations(stats: &station::StationStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nThe Most Popular Stations and Trip\n");

    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.common_start_station,
            |s| format!("The most commonly used start station is {s}"),
            "",
            "",
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.common_end_station,
            |s| format!("The most commonly used end station is {s}"),
            "",
            "",
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.common_route,
            |r| format!("The most frequent trip is {r}"),
            "",
            "",
        )
    );

    let _ = writeln!(out, "\nThis took {:.4} seconds.", stats.elapsed.as_secs_f64());
    let _ = writeln!(out, "{}", separator());
    out
}

fn render_durations(stats: &duration::DurationStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTrip Duration\n");

    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.total_seconds,
            |&secs| format!(
                "The total travel time is {}.",
                DurationBreakdown::from_seconds(secs)
            ),
            "",
            "",
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.mean_seconds,
            |&secs| format!(
                "The mean travel time is {}.",
                DurationBreakdown::from_seconds(secs)
            ),
            "",
            "",
        )
    );

    let _ = writeln!(out, "\nThis took {:.4} seconds.", stats.elapsed.as_secs_f64());
    let _ = writeln!(out, "{}", separator());
    out
}

fn render_users(stats: &user::UserStats, city: City) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nUser Stats\n");

    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.user_types,
            |counts| count_block("Trips by user type:", counts),
            "",
            "",
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.genders,
            |counts| count_block("Trips by gender:", counts),
            "",
            &format!("The {city} dataset does not include gender data."),
        )
    );
    let _ = writeln!(
        out,
        "{}",
        stat_line(
            &stats.birth_years,
            |years| {
                let mode = years
                    .most_common
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "The earliest year of birth is {}\nThe most recent year of birth is {}\nThe most common year(s) of birth: {}",
                    years.earliest, years.latest, mode
                )
            },
            "",
            &format!("The {city} dataset does not include birth year data."),
        )
    );

    let _ = writeln!(out, "\nThis took {:.4} seconds.", stats.elapsed.as_secs_f64());
    let _ = writeln!(out, "{}", separator());
    out
}

fn count_block(header: &str, counts: &[(String, u64)]) -> String {
    let mut out = String::from(header);
    for (value, count) in counts {
        let _ = write!(out, "\n  {value}: {count}");
    }
    out
}

/// Render one page of raw records, or the end-of-data notice.
pub fn render_page(page: &RawPage) -> String {
    if page.is_empty() {
        "There are no more rows to display.".to_owned()
    } else {
        format!("{}", page.rows)
    }
}

/// The structured report as pretty JSON (the filtered view itself is not
/// serialized).
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
