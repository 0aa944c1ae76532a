// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reference coordinates of the supported cities and the nearest-city lookup
//! used during onboarding.

use crate::City;

/// Mean radius of the earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A city with the reference coordinate used for distance comparison.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CityInfo {
    pub name: City,
    pub latitude: f64,
    pub longitude: f64,
}

/// The supported cities, in the order they are offered to the user.
pub static CITIES: [CityInfo; 6] = [
    CityInfo {
        name: City::Nairobi,
        latitude: -1.286389,
        longitude: 36.817223,
    },
    CityInfo {
        name: City::Kisumu,
        latitude: -0.091702,
        longitude: 34.767956,
    },
    CityInfo {
        name: City::Mombasa,
        latitude: -4.043477,
        longitude: 39.668206,
    },
    CityInfo {
        name: City::Kampala,
        latitude: 0.347596,
        longitude: 32.582520,
    },
    CityInfo {
        name: City::DarEsSalaam,
        latitude: -6.792354,
        longitude: 39.208328,
    },
    CityInfo {
        name: City::Nakuru,
        latitude: -0.303099,
        longitude: 36.080026,
    },
];

/// Great-circle distance in kilometers between two coordinates given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns the city closest to the given coordinate.
///
/// Equidistant cities resolve to the one listed first. Returns `None` only when
/// `cities` is empty.
pub fn resolve(latitude: f64, longitude: f64, cities: &[CityInfo]) -> Option<&CityInfo> {
    let mut ranked: Vec<(f64, &CityInfo)> = cities
        .iter()
        .map(|c| (haversine_km(latitude, longitude, c.latitude, c.longitude), c))
        .collect();

    // stable: ties keep input order
    ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    ranked.first().map(|(distance, city)| {
        tracing::debug!(city = %city.name, distance, "resolved nearest city");
        *city
    })
}

/// Looks up the reference coordinate of a city.
pub fn city_info(city: City) -> &'static CityInfo {
    // CITIES covers every variant
    CITIES
        .iter()
        .find(|c| c.name == city)
        .unwrap_or(&CITIES[0])
}
