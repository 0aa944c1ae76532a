// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary directory management with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_file_exists, assert_ids};
#[allow(unused_imports)]
pub use fixtures::{TestConfigBuilder, test_catalog, test_config, test_event, test_prefs};
#[allow(unused_imports)]
pub use temp_dir::{TempDirs, setup_temp_dirs};
