// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use crate::city::{CITIES, CityInfo, resolve};
use crate::{City, Genre, UserPreferences};

/// Why a device position could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("location access denied")]
    Denied,

    #[error("location unavailable")]
    Unavailable,
}

/// A device position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Errors that block finishing onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("choose a city and at least one interest")]
    EmptySelection,
}

/// Steps of the onboarding flow.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum OnboardingStep {
    /// Greeting before asking for anything.
    #[default]
    Welcome,

    /// Picking the city.
    City(CityStep),

    /// Picking interests.
    Interests,
}

/// Sub-states of the city step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CityStep {
    /// Waiting for the device position.
    Detecting,

    /// Asking the user to confirm the nearest city.
    Confirming(CityInfo),

    /// Choosing from the list of cities.
    Selecting,
}

/// State of an onboarding run.
#[derive(Debug, Default, Clone)]
pub struct Onboarding {
    step: OnboardingStep,
    city: Option<City>,
    interests: BTreeSet<Genre>,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn city(&self) -> Option<City> {
        self.city
    }

    pub fn interests(&self) -> &BTreeSet<Genre> {
        &self.interests
    }

    /// Leaves the welcome step and starts detecting the city.
    pub fn start(&mut self) {
        self.step = OnboardingStep::City(CityStep::Detecting);
    }

    /// Consumes the single geolocation result.
    ///
    /// A position moves to confirming the nearest city, a failure falls back to
    /// manual selection without surfacing an error.
    pub fn located(&mut self, position: Result<Coordinate, GeolocationError>) {
        if self.step != OnboardingStep::City(CityStep::Detecting) {
            tracing::debug!(step = ?self.step, "ignoring geolocation result");
            return;
        }

        let next = match position {
            Ok(Coordinate {
                latitude,
                longitude,
            }) => match resolve(latitude, longitude, &CITIES) {
                Some(city) => CityStep::Confirming(*city),
                None => CityStep::Selecting,
            },
            Err(err) => {
                tracing::info!(%err, "geolocation failed, falling back to manual selection");
                CityStep::Selecting
            }
        };
        self.step = OnboardingStep::City(next);
    }

    /// Accepts the detected city.
    pub fn confirm_detected(&mut self) {
        if let OnboardingStep::City(CityStep::Confirming(info)) = self.step {
            self.select_city(info.name);
        }
    }

    /// Rejects the detected city and shows the list instead.
    pub fn reject_detected(&mut self) {
        if let OnboardingStep::City(CityStep::Confirming(_)) = self.step {
            self.step = OnboardingStep::City(CityStep::Selecting);
        }
    }

    /// Chooses a city and moves on to interests.
    pub fn select_city(&mut self, city: City) {
        self.city = Some(city);
        self.step = OnboardingStep::Interests;
    }

    /// Flips whether `genre` is selected, returns whether it is selected afterwards.
    pub fn toggle_interest(&mut self, genre: Genre) -> bool {
        if self.interests.remove(&genre) {
            false
        } else {
            self.interests.insert(genre);
            true
        }
    }

    /// Finishes onboarding with the chosen city and interests.
    pub fn finish(&self) -> Result<UserPreferences, OnboardingError> {
        match self.city {
            Some(city) if !self.interests.is_empty() => Ok(UserPreferences {
                city,
                interests: self.interests.clone(),
            }),
            _ => Err(OnboardingError::EmptySelection),
        }
    }
}
