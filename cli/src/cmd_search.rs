// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use furahi_core::{City, Furahi, Screen, Selection};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub query: String,
    pub city: Selection<City>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Search events by title, venue or description")
            .arg(arg!(query: <QUERY> "Text to look for, case insensitive"))
            .arg(EventArgs::city("Only search events in this city"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            query: matches
                .get_one::<String>("query")
                .cloned()
                .unwrap_or_default(),
            city: EventArgs::get_city(matches).into(),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events...");
        furahi.session_mut().navigate(Screen::Search);

        let results = furahi.search(&self.query, self.city);
        if results.is_empty() && self.output_format == OutputFormat::Table {
            println!("No results found for \"{}\"", self.query.trim());
            return Ok(());
        }

        let formatter = EventFormatter::new(furahi.today(), furahi.saved())
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        print!("{}", formatter.format(&results));
        Ok(())
    }
}
