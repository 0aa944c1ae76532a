// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use furahi_core::{Furahi, event_url};

use crate::arg::{CommonArgs, EventArgs};
use crate::util::{OutputFormat, format_date_long};

#[derive(Debug, Clone, Copy)]
pub struct CmdDetails {
    pub id: u32,
    pub output_format: OutputFormat,
}

impl CmdDetails {
    pub const NAME: &str = "details";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("show")
            .about("Show the details of an event")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event details...");
        furahi.event(self.id)?;
        furahi.session_mut().view_details(self.id);

        let event = furahi.event(self.id)?;
        if self.output_format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(event)?);
            return Ok(());
        }

        let saved = if furahi.saved().contains(event.id) {
            " (saved)".green().to_string()
        } else {
            String::new()
        };
        let title = if event.promoted {
            event.title.yellow().bold()
        } else {
            event.title.bold()
        };
        println!("{title}{saved}");
        println!("{}", format_date_long(event.date));
        println!();

        let fields = [
            ("Venue", event.venue.as_str()),
            ("City", event.city.as_ref()),
            ("Genre", event.genre.as_ref()),
            ("Cost", event.cost.as_str()),
        ];
        for (name, value) in fields {
            println!("{} {value}", format!("{:<6}", format!("{name}:")).dimmed());
        }
        println!();
        println!("{}", event.description);
        println!();
        println!("{} {}", "Map:".dimmed(), event.map_url());
        println!(
            "{} {}",
            "Link:".dimmed(),
            event_url(event, &furahi.config().app_domain)
        );
        Ok(())
    }
}
