// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use furahi_core::{
    City, CityStep, Coordinate, Furahi, Genre, GeolocationError, Onboarding, OnboardingStep,
};

use crate::arg::{EventArgs, LocationArgs};

#[derive(Debug, Clone)]
pub struct CmdOnboard {
    pub position: Option<Coordinate>,
    pub city: Option<City>,
    pub interests: Vec<Genre>,
}

impl CmdOnboard {
    pub const NAME: &str = "onboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Choose your city and interests")
            .long_about(
                "\
Choose your city and interests. With --lat and --lon the nearest city is detected, \
--city picks one explicitly and wins over the detected city.",
            )
            .arg(LocationArgs::latitude())
            .arg(LocationArgs::longitude())
            .arg(EventArgs::city("Your city"))
            .arg(LocationArgs::interests())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            position: LocationArgs::get_position(matches),
            city: EventArgs::get_city(matches),
            interests: LocationArgs::get_interests(matches),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "onboarding...");
        let onboarding = self.walk()?;
        let prefs = onboarding.finish()?;

        let city = prefs.city;
        let interests = prefs
            .interests
            .iter()
            .map(|a| a.as_ref())
            .collect::<Vec<&str>>()
            .join(", ");
        furahi.complete_onboarding(prefs).await?;

        println!("{} {}", "Welcome to FurahiDay!".bold(), "Karibu!".green());
        println!("Showing events in {} for: {interests}", city.as_ref().green());
        Ok(())
    }

    /// Drives the onboarding steps with the command-line choices.
    fn walk(&self) -> Result<Onboarding, Box<dyn Error>> {
        let mut onboarding = Onboarding::new();
        onboarding.start();
        onboarding.located(self.position.ok_or(GeolocationError::Unavailable));

        match (onboarding.step(), self.city) {
            (OnboardingStep::City(CityStep::Confirming(info)), Some(city)) if city != info.name => {
                tracing::debug!(detected = %info.name, %city, "detected city rejected");
                onboarding.reject_detected();
                onboarding.select_city(city);
            }
            (OnboardingStep::City(CityStep::Confirming(info)), _) => {
                println!("Detected city: {}", info.name.as_ref().green());
                onboarding.confirm_detected();
            }
            (OnboardingStep::City(CityStep::Selecting), Some(city)) => onboarding.select_city(city),
            (OnboardingStep::City(CityStep::Selecting), None) => {
                return Err("Location unavailable, choose a city with --city".into());
            }
            (step, _) => return Err(format!("Unexpected onboarding step: {step:?}").into()),
        }

        for &genre in &self.interests {
            if !onboarding.interests().contains(&genre) {
                onboarding.toggle_interest(genre);
            }
        }
        Ok(onboarding)
    }
}
