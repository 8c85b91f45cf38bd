//! Command-line interface for one-shot, prompt-free runs.

#![expect(clippy::print_stdout)]

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bikeshare::config::DataSources;
use bikeshare::model::{City, DayFilter, MonthFilter};
use bikeshare::paginate::RawDataPaginator;
use bikeshare::pipeline;
use bikeshare::report;

#[derive(Parser)]
#[command(name = "bikeshare", about = "Explore US bikeshare trip data", version)]
pub struct Cli {
    /// Directory containing the per-city CSV exports
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// JSON file mapping cities to export paths
    #[arg(long, value_name = "FILE", conflicts_with = "data_dir")]
    pub sources: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one analysis without prompts and print the report
    Analyze {
        /// City to analyze
        #[arg(short, long, value_enum)]
        city: City,

        /// Month filter: "all" or a full month name
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Day filter: "all" or a full weekday name
        #[arg(short, long, default_value = "all")]
        day: DayFilter,

        /// Also print the first N pages of raw records
        #[arg(long, value_name = "PAGES")]
        raw: Option<usize>,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Build the data-source configuration from the global flags.
pub fn resolve_sources(cli: &Cli) -> Result<DataSources> {
    if let Some(path) = &cli.sources {
        return Ok(DataSources::from_file(path)?);
    }
    Ok(match &cli.data_dir {
        Some(dir) => DataSources::with_data_dir(dir.clone()),
        None => DataSources::default(),
    })
}

pub fn run_command(sources: &DataSources, command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            city,
            month,
            day,
            raw,
            json,
        } => {
            let report = pipeline::analyse(sources, city, month, day)
                .with_context(|| format!("Analysis failed for {}", city.display_name()))?;

            if json {
                println!("{}", report::render_json(&report)?);
            } else {
                println!("{}", report::render(&report));
            }

            if let Some(pages) = raw {
                let mut pager = RawDataPaginator::new(&report.view);
                for _ in 0..pages {
                    let page = pager.next_page();
                    println!("{}", report::render_page(&page));
                    if page.is_empty() {
                        break;
                    }
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_args_parse() {
        let cli = Cli::parse_from([
            "bikeshare", "analyze", "--city", "chicago", "--month", "june", "--day", "monday",
        ]);
        match cli.command {
            Some(Commands::Analyze {
                city, month, day, ..
            }) => {
                assert_eq!(city, City::Chicago);
                assert_eq!(month.to_string(), "june");
                assert_eq!(day.to_string(), "monday");
            }
            _ => panic!("expected analyze subcommand"),
        }
    }
}
