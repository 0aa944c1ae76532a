// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use furahi_core::{City, Coordinate, DateFilter, Genre, Selection};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event").value_parser(value_parser!(u32))
    }

    pub fn get_id(matches: &ArgMatches) -> u32 {
        matches.get_one("id").copied().unwrap_or_default()
    }

    /// Event ids to save for this run.
    pub fn ids() -> Arg {
        arg!(id: [ID] "The ids of the events to save")
            .value_parser(value_parser!(u32))
            .num_args(0..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<u32> {
        matches
            .get_many::<u32>("id")
            .map(|a| a.copied().collect())
            .unwrap_or_default()
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Only list events in this date range")
            .value_parser(value_parser!(DateFilter))
            .default_value("all")
    }

    pub fn get_date(matches: &ArgMatches) -> DateFilter {
        matches.get_one("date").copied().unwrap_or_default()
    }

    pub fn genre() -> Arg {
        arg!(-g --genre <GENRE> "Only list events of this genre")
            .value_parser(value_parser!(Genre))
    }

    pub fn get_genre(matches: &ArgMatches) -> Selection<Genre> {
        matches.get_one("genre").copied().into()
    }

    pub fn city(help: &'static str) -> Arg {
        arg!(--city <CITY>)
            .help(help)
            .value_parser(value_parser!(City))
    }

    pub fn get_city(matches: &ArgMatches) -> Option<City> {
        matches.get_one("city").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LocationArgs;

impl LocationArgs {
    pub fn latitude() -> Arg {
        arg!(--lat <LATITUDE> "Latitude of your position in decimal degrees")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .requires("lon")
    }

    pub fn longitude() -> Arg {
        arg!(--lon <LONGITUDE> "Longitude of your position in decimal degrees")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .requires("lat")
    }

    pub fn get_position(matches: &ArgMatches) -> Option<Coordinate> {
        match (matches.get_one("lat"), matches.get_one("lon")) {
            (Some(&latitude), Some(&longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    pub fn interests() -> Arg {
        arg!(-i --interest <GENRE> "Genre you are interested in, may be repeated")
            .value_parser(value_parser!(Genre))
            .action(ArgAction::Append)
    }

    pub fn get_interests(matches: &ArgMatches) -> Vec<Genre> {
        matches
            .get_many::<Genre>("interest")
            .map(|a| a.copied().collect())
            .unwrap_or_default()
    }
}
