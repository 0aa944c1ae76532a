// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use tokio::fs;

use crate::{City, Genre};

/// One occurrence of an event at a venue.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique, stable identifier within the catalog.
    pub id: u32,

    /// Title of the event.
    pub title: String,

    /// URI of the flyer image.
    pub flyer_image_url: String,

    /// Calendar date of the event. Events start at 19:00 and end at 23:00 local time.
    pub date: NaiveDate,

    /// Name of the venue.
    pub venue: String,

    /// Cost as display text, e.g. "KES 1,000" or "Free".
    pub cost: String,

    /// City where the event takes place.
    pub city: City,

    /// Genre of the event.
    pub genre: Genre,

    /// Free-form description.
    pub description: String,

    /// Latitude of the venue in decimal degrees.
    pub latitude: f64,

    /// Longitude of the venue in decimal degrees.
    pub longitude: f64,

    /// Whether the event is promoted.
    #[serde(rename = "isPromoted")]
    pub promoted: bool,
}

impl Event {
    /// Link to the venue on a map.
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }
}

/// Errors raised while loading the event catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate event id in catalog: {0}")]
    DuplicateId(u32),
}

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// The read-only list of events available in a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Creates a catalog from events, rejecting duplicate identifiers.
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }
        Ok(Self { events })
    }

    /// Parses a catalog from a JSON array of events.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let events: Vec<Event> = serde_json::from_str(content)?;
        Self::new(events)
    }

    /// The catalog shipped with the application.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Loads a catalog from a JSON file.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_json(&content)?;
        tracing::debug!(count = catalog.events.len(), "catalog loaded");
        Ok(catalog)
    }

    /// All events, in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up an event by its identifier.
    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
