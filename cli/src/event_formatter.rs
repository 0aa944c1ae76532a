// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::NaiveDate;
use colored::Color;
use furahi_core::{Event, SavedSet};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_date};

#[derive(Debug)]
pub struct EventFormatter<'a> {
    columns: Vec<EventColumn<'a>>,
    format: OutputFormat,
}

impl<'a> EventFormatter<'a> {
    pub fn new(today: NaiveDate, saved: &'a SavedSet) -> Self {
        Self {
            columns: vec![
                EventColumn::Id,
                EventColumn::Saved(saved),
                EventColumn::Date(today),
                EventColumn::Title,
                EventColumn::Venue,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds genre, city and cost columns.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.extend([
                EventColumn::Genre,
                EventColumn::City,
                EventColumn::Cost,
            ]);
        }
        self
    }

    pub fn format<'b>(&'b self, events: &'b [&'b Event]) -> Display<'b> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a Event],
    formatter: &'a EventFormatter<'a>,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn<'a> {
    Id,
    Saved(&'a SavedSet),
    Date(NaiveDate),
    Title,
    Venue,
    Genre,
    City,
    Cost,
}

impl<'e> TableColumn<&'e Event> for EventColumn<'_> {
    fn format<'a>(&self, event: &'a &'e Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => format!("#{}", event.id).into(),
            EventColumn::Saved(saved) => if saved.contains(event.id) { "*" } else { " " }.into(),
            EventColumn::Date(today) => format_date(event.date, *today).into(),
            EventColumn::Title => event.title.as_str().into(),
            EventColumn::Venue => event.venue.as_str().into(),
            EventColumn::Genre => event.genre.as_ref().into(),
            EventColumn::City => event.city.as_ref().into(),
            EventColumn::Cost => event.cost.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, event: &&'e Event) -> Option<Color> {
        match self {
            EventColumn::Title if event.promoted => Some(Color::Yellow),
            EventColumn::Saved(_) => Some(Color::Green),
            EventColumn::Date(today) if event.date == *today => Some(Color::Cyan),
            _ => None,
        }
    }
}
