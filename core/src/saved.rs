// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Event;

/// Bookmarked event identifiers, in the order they were saved.
///
/// Lives for a single session only.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SavedSet {
    ids: Vec<u32>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`, returns whether it is saved afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.ids.iter().position(|&a| a == id) {
            Some(i) => {
                self.ids.remove(i);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    /// Consuming form of [`SavedSet::toggle`].
    #[must_use]
    pub fn toggled(mut self, id: u32) -> Self {
        self.toggle(id);
        self
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Identifiers in the order they were saved.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Saved events in the order they were saved. Unknown identifiers are skipped.
    pub fn events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        self.ids
            .iter()
            .filter_map(|id| events.iter().find(|e| e.id == *id))
            .collect()
    }
}

impl FromIterator<u32> for SavedSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().fold(SavedSet::new(), |set, id| {
            if set.contains(id) { set } else { set.toggled(id) }
        })
    }
}

/// The saved events view: catalog events that are saved, earliest date first.
///
/// Events on the same date keep catalog order.
pub fn saved_events<'a>(events: &'a [Event], saved: &SavedSet) -> Vec<&'a Event> {
    let mut found: Vec<_> = events.iter().filter(|e| saved.contains(e.id)).collect();
    found.sort_by_key(|e| e.date);
    found
}
