// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use furahi_core::Event;

/// Asserts that the events carry exactly the given identifiers, in order.
#[track_caller]
pub fn assert_ids(events: &[&Event], expected: &[u32]) {
    let ids: Vec<u32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, expected, "event ids differ");
}

/// Asserts that a file exists at the given path.
#[track_caller]
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
    assert!(path.is_file(), "Expected a file: {}", path.display());
}
