// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, arg, value_parser};
use furahi_core::{EXPORT_FILE_NAME, Furahi};

use crate::arg::EventArgs;

#[derive(Debug, Clone)]
pub struct CmdExport {
    pub ids: Vec<u32>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export saved events to an iCalendar file")
            .long_about(
                "\
Export saved events to an iCalendar file. The given ids are saved first, events \
are written in the order they were saved.",
            )
            .arg(EventArgs::ids())
            .arg(
                arg!(-o --output <PATH> "Path of the calendar file")
                    .value_parser(value_parser!(PathBuf))
                    .conflicts_with("stdout"),
            )
            .arg(arg!(--stdout "Print the calendar instead of writing a file"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: EventArgs::get_ids(matches),
            output: matches.get_one("output").cloned(),
            stdout: matches.get_flag("stdout"),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting saved events...");
        for &id in &self.ids {
            if !furahi.saved().contains(id) {
                furahi.toggle_save(id)?;
            }
        }

        if self.stdout {
            print!("{}", furahi.export_calendar()?);
            return Ok(());
        }

        let path = self
            .output
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
        furahi.export_calendar_to(&path).await?;
        println!(
            "Exported {} event(s) to {}",
            furahi.saved().len(),
            path.display()
        );
        Ok(())
    }
}
