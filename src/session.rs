//! Interactive session controller.
//!
//! A small finite-state machine around the core pipeline:
//!
//! ```text
//! Running ──ok──> AwaitingMore ──done paging──> Restart ──yes──> Running
//!    │                                             │
//!    └──error──────────────> Restart               └──no──> Done
//! ```
//!
//! The core only exposes pull-based entry points (`analyse`, `next_page`);
//! all prompting lives here. A failed run is reported and the session
//! restarts cleanly — nothing from the failed run leaks into the next one.

#![expect(clippy::print_stdout)]

use anyhow::Result;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};

use crate::config::DataSources;
use crate::model::{City, DayFilter, MonthFilter, MonthName, WEEKDAYS, weekday_name};
use crate::paginate::RawDataPaginator;
use crate::pipeline::{self, AnalysisReport, FilteredView};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    AwaitingMore,
    Restart,
    Done,
}

fn state_after_analysis(succeeded: bool) -> SessionState {
    if succeeded {
        SessionState::AwaitingMore
    } else {
        SessionState::Restart
    }
}

fn state_after_restart_choice(restart: bool) -> SessionState {
    if restart {
        SessionState::Running
    } else {
        SessionState::Done
    }
}

/// Drive the interactive loop until the user declines a restart.
pub fn run(sources: &DataSources) -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!");

    let mut state = SessionState::Running;
    let mut current: Option<AnalysisReport> = None;

    while state != SessionState::Done {
        state = match state {
            SessionState::Running => {
                let outcome = run_analysis(sources);
                match outcome {
                    Ok(report) => {
                        current = Some(report);
                        state_after_analysis(true)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "analysis run failed");
                        println!("An error happened, please try again! ({e})");
                        state_after_analysis(false)
                    }
                }
            }
            SessionState::AwaitingMore => {
                if let Some(report) = current.as_ref() {
                    page_raw_data(&report.view)?;
                }
                SessionState::Restart
            }
            SessionState::Restart => {
                current = None;
                state_after_restart_choice(confirm("Would you like to restart?")?)
            }
            SessionState::Done => SessionState::Done,
        };
    }

    println!("Goodbye!");
    Ok(())
}

fn run_analysis(sources: &DataSources) -> Result<AnalysisReport> {
    let (city, month, day) = prompt_selection()?;
    let report = pipeline::analyse(sources, city, month, day)?;
    println!("{}", report::render(&report));
    Ok(report)
}

/// The paginator yields control back here between pages; declining the
/// prompt is the only way to stop early, and there is nothing to clean up.
fn page_raw_data(view: &FilteredView) -> Result<()> {
    let mut pager = RawDataPaginator::new(view);
    loop {
        if !confirm("Would you like to see the next 5 lines of raw data?")? {
            break;
        }
        let page = pager.next_page();
        println!("{}", report::render_page(&page));
        if page.is_empty() {
            break;
        }
    }
    Ok(())
}

fn prompt_selection() -> Result<(City, MonthFilter, DayFilter)> {
    let theme = ColorfulTheme::default();

    let cities: Vec<&str> = City::ALL.iter().map(|c| c.display_name()).collect();
    let city_idx = Select::with_theme(&theme)
        .with_prompt("Which city would you like to explore?")
        .items(&cities)
        .default(0)
        .interact()?;
    let city = City::ALL[city_idx];

    let mut months: Vec<&str> = vec!["all"];
    months.extend(MonthName::ALL.iter().map(|m| m.name()));
    let month_idx = Select::with_theme(&theme)
        .with_prompt("Filter by month?")
        .items(&months)
        .default(0)
        .interact()?;
    let month = if month_idx == 0 {
        MonthFilter::All
    } else {
        MonthFilter::Only(MonthName::ALL[month_idx - 1])
    };

    let mut days: Vec<&str> = vec!["all"];
    days.extend(WEEKDAYS.iter().map(|&d| weekday_name(d)));
    let day_idx = Select::with_theme(&theme)
        .with_prompt("Filter by day of week?")
        .items(&days)
        .default(0)
        .interact()?;
    let day = if day_idx == 0 {
        DayFilter::All
    } else {
        DayFilter::Only(WEEKDAYS[day_idx - 1])
    };

    Ok((city, month, day))
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}
