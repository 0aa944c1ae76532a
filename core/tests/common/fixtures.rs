// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create configurations, events
//! and catalog file contents.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use furahi_core::{City, Config, Event, Genre, UserPreferences};

/// Creates a test configuration.
///
/// # Example
///
/// ```ignore
/// let config = test_config(Some("/tmp/catalog.json"), "/tmp/state");
/// ```
#[must_use]
pub fn test_config(catalog_path: Option<&Path>, state_dir: &Path) -> Config {
    TestConfigBuilder::new()
        .with_state_dir(state_dir)
        .with_catalog_path(catalog_path)
        .build()
}

/// Creates a test event with a generated title, venue and description.
#[must_use]
pub fn test_event(id: u32, city: City, genre: Genre, date: NaiveDate, promoted: bool) -> Event {
    Event {
        id,
        title: format!("{genre} Night {id}"),
        flyer_image_url: format!("https://example.com/flyers/{id}.jpg"),
        date,
        venue: format!("{city} Grounds"),
        cost: "KES 1,000".to_string(),
        city,
        genre,
        description: format!("A {genre} evening in {city}."),
        latitude: -1.29,
        longitude: 36.82,
        promoted,
    }
}

/// Serializes events as catalog JSON.
#[must_use]
pub fn test_catalog(events: &[Event]) -> String {
    serde_json::to_string_pretty(events).expect("events should serialize")
}

/// Creates preferences for a city and a set of interests.
#[must_use]
pub fn test_prefs(city: City, interests: &[Genre]) -> UserPreferences {
    UserPreferences {
        city,
        interests: interests.iter().copied().collect::<BTreeSet<_>>(),
    }
}

/// Builder for test configurations.
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    catalog_path: Option<PathBuf>,
    state_dir: Option<PathBuf>,
    app_domain: Option<String>,
}

impl TestConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<&Path>) -> Self {
        self.catalog_path = path.map(Path::to_path_buf);
        self
    }

    #[must_use]
    pub fn with_state_dir(mut self, path: &Path) -> Self {
        self.state_dir = Some(path.to_path_buf());
        self
    }

    #[must_use]
    pub fn with_app_domain(mut self, domain: &str) -> Self {
        self.app_domain = Some(domain.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let mut config = Config {
            catalog_path: self.catalog_path,
            state_dir: self.state_dir,
            ..Default::default()
        };
        if let Some(domain) = self.app_domain {
            config.app_domain = domain;
        }
        config
    }
}
