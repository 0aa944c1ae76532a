// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{City, Event, Selection};

/// Searches events by title, venue or description.
///
/// The match is a case-insensitive substring test. A blank query yields no
/// results. Promoted matches come first, each group keeping catalog order.
pub fn search<'a>(events: &'a [Event], query: &str, city: Selection<City>) -> Vec<&'a Event> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    let (mut promoted, rest): (Vec<_>, Vec<_>) = events
        .iter()
        .filter(|e| city.allows(&e.city))
        .filter(|e| {
            e.title.to_lowercase().contains(&query)
                || e.venue.to_lowercase().contains(&query)
                || e.description.to_lowercase().contains(&query)
        })
        .partition(|e| e.promoted);

    tracing::debug!(
        query = %query,
        promoted = promoted.len(),
        rest = rest.len(),
        "search matched"
    );
    promoted.extend(rest);
    promoted
}
