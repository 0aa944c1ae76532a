// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// A city where events take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum City {
    /// Nairobi, Kenya.
    Nairobi,

    /// Kisumu, Kenya.
    Kisumu,

    /// Mombasa, Kenya.
    Mombasa,

    /// Kampala, Uganda.
    Kampala,

    /// Dar es Salaam, Tanzania.
    #[serde(rename = "Dar es Salaam")]
    DarEsSalaam,

    /// Nakuru, Kenya.
    Nakuru,
}

const CITY_NAIROBI: &str = "Nairobi";
const CITY_KISUMU: &str = "Kisumu";
const CITY_MOMBASA: &str = "Mombasa";
const CITY_KAMPALA: &str = "Kampala";
const CITY_DAR_ES_SALAAM: &str = "Dar es Salaam";
const CITY_NAKURU: &str = "Nakuru";

impl City {
    /// All cities, in the order they are offered to the user.
    pub const ALL: [City; 6] = [
        City::Nairobi,
        City::Kisumu,
        City::Mombasa,
        City::Kampala,
        City::DarEsSalaam,
        City::Nakuru,
    ];
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        match self {
            City::Nairobi => CITY_NAIROBI,
            City::Kisumu => CITY_KISUMU,
            City::Mombasa => CITY_MOMBASA,
            City::Kampala => CITY_KAMPALA,
            City::DarEsSalaam => CITY_DAR_ES_SALAAM,
            City::Nakuru => CITY_NAKURU,
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for City {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CITY_NAIROBI => Ok(City::Nairobi),
            CITY_KISUMU => Ok(City::Kisumu),
            CITY_MOMBASA => Ok(City::Mombasa),
            CITY_KAMPALA => Ok(City::Kampala),
            CITY_DAR_ES_SALAAM => Ok(City::DarEsSalaam),
            CITY_NAKURU => Ok(City::Nakuru),
            _ => Err(()),
        }
    }
}

/// A genre of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Genre {
    Mugithi,

    #[serde(rename = "Hip Hop")]
    HipHop,

    Outdoor,

    #[serde(rename = "Wine & Beer")]
    WineBeer,

    Ohangla,

    #[serde(rename = "Live Band")]
    LiveBand,

    #[serde(rename = "Car Show")]
    CarShow,

    Cultural,
}

const GENRE_MUGITHI: &str = "Mugithi";
const GENRE_HIP_HOP: &str = "Hip Hop";
const GENRE_OUTDOOR: &str = "Outdoor";
const GENRE_WINE_BEER: &str = "Wine & Beer";
const GENRE_OHANGLA: &str = "Ohangla";
const GENRE_LIVE_BAND: &str = "Live Band";
const GENRE_CAR_SHOW: &str = "Car Show";
const GENRE_CULTURAL: &str = "Cultural";

impl Genre {
    /// All genres, offered as interests during onboarding.
    pub const ALL: [Genre; 8] = [
        Genre::Mugithi,
        Genre::HipHop,
        Genre::Outdoor,
        Genre::WineBeer,
        Genre::Ohangla,
        Genre::LiveBand,
        Genre::CarShow,
        Genre::Cultural,
    ];

    /// Genres offered as quick filters on the home feed.
    pub const FEED_FILTERS: [Genre; 5] = [
        Genre::Mugithi,
        Genre::HipHop,
        Genre::LiveBand,
        Genre::Outdoor,
        Genre::WineBeer,
    ];
}

impl AsRef<str> for Genre {
    fn as_ref(&self) -> &str {
        match self {
            Genre::Mugithi => GENRE_MUGITHI,
            Genre::HipHop => GENRE_HIP_HOP,
            Genre::Outdoor => GENRE_OUTDOOR,
            Genre::WineBeer => GENRE_WINE_BEER,
            Genre::Ohangla => GENRE_OHANGLA,
            Genre::LiveBand => GENRE_LIVE_BAND,
            Genre::CarShow => GENRE_CAR_SHOW,
            Genre::Cultural => GENRE_CULTURAL,
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Genre {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            GENRE_MUGITHI => Ok(Genre::Mugithi),
            GENRE_HIP_HOP => Ok(Genre::HipHop),
            GENRE_OUTDOOR => Ok(Genre::Outdoor),
            GENRE_WINE_BEER => Ok(Genre::WineBeer),
            GENRE_OHANGLA => Ok(Genre::Ohangla),
            GENRE_LIVE_BAND => Ok(Genre::LiveBand),
            GENRE_CAR_SHOW => Ok(Genre::CarShow),
            GENRE_CULTURAL => Ok(Genre::Cultural),
            _ => Err(()),
        }
    }
}

/// Either every value, or exactly one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// No restriction.
    #[default]
    All,

    /// Restrict to a single value.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether the value passes this selection.
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::All,
        }
    }
}
