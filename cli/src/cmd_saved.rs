// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use furahi_core::{Furahi, Screen};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdSaved {
    pub ids: Vec<u32>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdSaved {
    pub const NAME: &str = "saved";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Toggle saved events and list them by date")
            .long_about(
                "\
Toggle saved events and list them by date. Each id given flips whether that \
event is saved; saved events last for this run only.",
            )
            .arg(EventArgs::ids())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: EventArgs::get_ids(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing saved events...");
        for &id in &self.ids {
            furahi.toggle_save(id)?;
        }
        furahi.session_mut().navigate(Screen::Saved);

        let events = furahi.saved_events();
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("No saved events yet.");
            return Ok(());
        }

        let formatter = EventFormatter::new(furahi.today(), furahi.saved())
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        print!("{}", formatter.format(&events));
        Ok(())
    }
}
