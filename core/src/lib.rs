// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of FurahiDay: event discovery for East African cities.

mod city;
mod config;
mod datetime;
mod event;
mod export;
mod feed;
mod furahi;
mod onboarding;
mod prefs;
mod saved;
mod search;
mod session;
mod share;
mod types;

pub use crate::city::{CITIES, CityInfo, EARTH_RADIUS_KM, city_info, haversine_km, resolve};
pub use crate::config::{APP_NAME, Config, ConfigError, DEFAULT_APP_DOMAIN, expand_path};
pub use crate::datetime::{DateFilter, end_of_next_week, end_of_week, local_to_utc};
pub use crate::event::{Catalog, CatalogError, Event};
pub use crate::export::{CalendarExport, EXPORT_FILE_NAME, ExportError, event_span};
pub use crate::feed::{Feed, FeedConditions, classify};
pub use crate::furahi::Furahi;
pub use crate::onboarding::{
    CityStep, Coordinate, GeolocationError, Onboarding, OnboardingError, OnboardingStep,
};
pub use crate::prefs::{
    FilePreferenceStore, KEY_USER_CITY, KEY_USER_INTERESTS, MemoryPreferenceStore,
    PreferenceError, PreferenceStore, UserPreferences, load_preferences, save_preferences,
};
pub use crate::saved::{SavedSet, saved_events};
pub use crate::search::search;
pub use crate::session::{Screen, Session};
pub use crate::share::{
    FEEDBACK_COPIED, FEEDBACK_COPY_FAILED, FEEDBACK_MILLIS, FEEDBACK_SHARE_FAILED,
    FEEDBACK_SHARED, ShareError, ShareFeedback, ShareOutcome, SharePayload, ShareTarget,
    event_url, share_event, share_text,
};
pub use crate::types::{City, Genre, Selection};
