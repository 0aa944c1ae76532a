// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{City, DateFilter, Event, Genre, Selection};

/// Filters chosen on the home feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedConditions {
    /// Date range applied to the general list.
    pub date: DateFilter,

    /// Genre applied to the general list.
    pub genre: Selection<Genre>,
}

/// The home feed, split into three disjoint buckets.
///
/// Every bucket preserves catalog order and only holds events in the user's city.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Feed<'a> {
    /// Promoted events.
    pub promoted: Vec<&'a Event>,

    /// Non-promoted events matching the user's interests.
    pub recommended: Vec<&'a Event>,

    /// Remaining non-promoted events passing the feed filters.
    pub general: Vec<&'a Event>,
}

impl Feed<'_> {
    /// Whether no bucket holds an event.
    pub fn is_empty(&self) -> bool {
        self.promoted.is_empty() && self.recommended.is_empty() && self.general.is_empty()
    }
}

/// Partitions the catalog into the home feed buckets.
///
/// Only the general list is narrowed by `conds`; promoted and recommended events
/// are shown regardless of the active filters.
pub fn classify<'a>(
    events: &'a [Event],
    city: City,
    interests: &BTreeSet<Genre>,
    conds: &FeedConditions,
    today: NaiveDate,
) -> Feed<'a> {
    let mut feed = Feed::default();
    for event in events.iter().filter(|e| e.city == city) {
        if event.promoted {
            feed.promoted.push(event);
        } else if interests.contains(&event.genre) {
            feed.recommended.push(event);
        } else if conds.genre.allows(&event.genre) && conds.date.matches(event.date, today) {
            feed.general.push(event);
        }
    }

    tracing::debug!(
        %city,
        promoted = feed.promoted.len(),
        recommended = feed.recommended.len(),
        general = feed.general.len(),
        "classified feed"
    );
    feed
}
