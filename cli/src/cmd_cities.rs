// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use clap::{ArgMatches, Command};
use colored::Color;
use furahi_core::{CITIES, CityInfo, Coordinate, haversine_km, resolve};

use crate::arg::{CommonArgs, LocationArgs};
use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdCities {
    pub position: Option<Coordinate>,
    pub output_format: OutputFormat,
}

impl CmdCities {
    pub const NAME: &str = "cities";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List supported cities")
            .long_about(
                "\
List supported cities. With --lat and --lon the distance to each city is shown \
and the nearest one is marked.",
            )
            .arg(LocationArgs::latitude())
            .arg(LocationArgs::longitude())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            position: LocationArgs::get_position(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing cities...");
        let rows = rows(self.position);
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            OutputFormat::Table => {
                let columns = match self.position {
                    Some(_) => vec![CityColumn::Nearest, CityColumn::Name, CityColumn::Distance],
                    None => vec![CityColumn::Name, CityColumn::Coordinate],
                };
                print!("{}", Table::new(&columns, &rows));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct CityRow {
    #[serde(flatten)]
    info: CityInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    nearest: bool,
}

fn rows(position: Option<Coordinate>) -> Vec<CityRow> {
    let nearest = position
        .and_then(|p| resolve(p.latitude, p.longitude, &CITIES))
        .map(|a| a.name);

    CITIES
        .iter()
        .map(|info| CityRow {
            info: *info,
            distance_km: position
                .map(|p| haversine_km(p.latitude, p.longitude, info.latitude, info.longitude)),
            nearest: nearest == Some(info.name),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum CityColumn {
    Nearest,
    Name,
    Coordinate,
    Distance,
}

impl TableColumn<CityRow> for CityColumn {
    fn format<'a>(&self, row: &'a CityRow) -> Cow<'a, str> {
        match self {
            CityColumn::Nearest => if row.nearest { "*" } else { " " }.into(),
            CityColumn::Name => row.info.name.as_ref().into(),
            CityColumn::Coordinate => {
                format!("{:.4}, {:.4}", row.info.latitude, row.info.longitude).into()
            }
            CityColumn::Distance => match row.distance_km {
                Some(km) => format!("{km:.1} km").into(),
                None => "".into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            CityColumn::Distance => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &CityRow) -> Option<Color> {
        match self {
            CityColumn::Nearest | CityColumn::Name if row.nearest => Some(Color::Green),
            _ => None,
        }
    }
}
