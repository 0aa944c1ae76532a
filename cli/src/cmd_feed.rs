// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use furahi_core::{DateFilter, Event, FeedConditions, Furahi, Genre, Selection};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdFeed {
    pub date: DateFilter,
    pub genre: Selection<Genre>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for CmdFeed {
    fn default() -> Self {
        Self {
            date: DateFilter::All,
            genre: Selection::All,
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

impl CmdFeed {
    pub const NAME: &str = "feed";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("home")
            .about("Show events in your city")
            .long_about(
                "\
Show events in your city: featured events, events matching your interests, \
and all other events narrowed by --date and --genre.",
            )
            .arg(EventArgs::date())
            .arg(EventArgs::genre())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: EventArgs::get_date(matches),
            genre: EventArgs::get_genre(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing feed...");
        let conds = FeedConditions {
            date: self.date,
            genre: self.genre,
        };
        let feed = furahi.feed(&conds)?;

        if self.output_format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&feed)?);
            return Ok(());
        }

        let city = furahi
            .preferences()
            .map(|a| a.city.as_ref())
            .unwrap_or_default();
        println!("Events in {}", city.green().bold());
        if let Some(teaser) = furahi.weekend_teaser() {
            println!("{}", teaser.yellow());
        }

        let formatter = EventFormatter::new(furahi.today(), furahi.saved())
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        let print = |title: &str, events: &[&Event]| {
            println!();
            println!("{}", title.bold());
            print!("{}", formatter.format(events));
        };

        if !feed.promoted.is_empty() {
            print("Featured Events", &feed.promoted);
        }
        if !feed.recommended.is_empty() {
            print("Recommended for you", &feed.recommended);
        }

        let genre = match self.genre {
            Selection::All => "All Genres".to_string(),
            Selection::Only(genre) => genre.to_string(),
        };
        let title = format!("{} · {}", self.date, genre);
        if feed.general.is_empty() {
            println!();
            println!("{}", title.bold());
            println!("No events found for your selection.");
            println!("{}", "Try adjusting your filters.".dimmed());
        } else {
            print(&title, &feed.general);
        }
        Ok(())
    }
}
