// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the furahi-core crate.
//!
//! These tests drive the application core through onboarding, discovery,
//! saving and exporting, backed by real files in temporary directories.

mod config_driven;
mod discovery;
mod onboarding;
mod saved_export;
