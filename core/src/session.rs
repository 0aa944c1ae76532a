// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::prefs::{PreferenceStore, load_preferences, save_preferences};
use crate::share::{ShareFeedback, ShareTarget, share_event};
use crate::{City, Event, SavedSet, UserPreferences};

/// Top-level screens of the app.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Saved,
    Search,
    Details,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Saved => "saved",
            Screen::Search => "search",
            Screen::Details => "details",
        };
        write!(f, "{name}")
    }
}

/// State of one app session.
///
/// Nothing but the preferences outlives the session.
#[derive(Debug, Default, Clone)]
pub struct Session {
    prefs: Option<UserPreferences>,
    screen: Screen,
    selected: Option<u32>,
    saved: SavedSet,
    feedback: Option<ShareFeedback>,
}

impl Session {
    pub fn new(prefs: Option<UserPreferences>) -> Self {
        Self {
            prefs,
            ..Default::default()
        }
    }

    /// Starts a session with whatever preferences the store holds.
    pub fn restore(store: &impl PreferenceStore) -> Self {
        Self::new(load_preferences(store))
    }

    pub fn preferences(&self) -> Option<&UserPreferences> {
        self.prefs.as_ref()
    }

    pub fn needs_onboarding(&self) -> bool {
        self.prefs.is_none()
    }

    /// Stores the onboarding result and lands on the home screen.
    pub fn complete_onboarding(&mut self, store: &mut impl PreferenceStore, prefs: UserPreferences) {
        save_preferences(store, &prefs);
        tracing::info!(city = %prefs.city, interests = prefs.interests.len(), "onboarding complete");
        self.prefs = Some(prefs);
        self.screen = Screen::Home;
    }

    /// The screen to render. Details without a selected event renders home.
    pub fn screen(&self) -> Screen {
        match (self.screen, self.selected) {
            (Screen::Details, None) => Screen::Home,
            (screen, _) => screen,
        }
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Switches screens, dropping any selected event.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = %self.screen, to = %screen, "navigate");
        self.selected = None;
        self.screen = screen;
    }

    /// Opens the details of an event.
    pub fn view_details(&mut self, id: u32) {
        self.selected = Some(id);
        self.screen = Screen::Details;
    }

    /// Leaves the details screen for home.
    pub fn back(&mut self) {
        if self.screen == Screen::Details {
            self.screen = Screen::Home;
        }
    }

    /// Flips whether an event is saved, returns whether it is saved afterwards.
    pub fn toggle_save(&mut self, id: u32) -> bool {
        let saved = self.saved.toggle(id);
        tracing::debug!(id, saved, "toggled saved event");
        saved
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    /// Shares an event and keeps the resulting feedback.
    ///
    /// Returns the raw share text when every mechanism failed.
    pub fn share(
        &mut self,
        target: &mut impl ShareTarget,
        event: &Event,
        domain: &str,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let outcome = share_event(target, event, domain, now);
        if outcome.feedback.is_some() {
            self.feedback = outcome.feedback;
        }
        outcome.fallback_text
    }

    /// Share feedback still visible at `now`.
    pub fn feedback(&self, now: DateTime<Utc>) -> Option<&'static str> {
        self.feedback.as_ref().and_then(|a| a.visible_at(now))
    }

    /// The Thursday reminder about the coming weekend.
    pub fn weekend_teaser(&self, today: NaiveDate) -> Option<String> {
        if today.weekday() != Weekday::Thu {
            return None;
        }

        let city = self.prefs.as_ref().map_or(City::Nairobi, |a| a.city);
        let teaser =
            format!("This weekend in {city}: Mugithi, Car Fest, Wine Tasting. Tap to explore!");
        tracing::info!(%city, "{teaser}");
        Some(teaser)
    }
}
