// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the application core,
//! including defaults, catalog loading and path handling.

use std::path::PathBuf;

use furahi_core::{City, Config, DEFAULT_APP_DOMAIN, Furahi, Genre};
use tokio::fs;

use crate::common::{TestConfigBuilder, setup_temp_dirs, test_prefs};

#[test]
fn config_defaults_from_empty_toml() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.app_domain, DEFAULT_APP_DOMAIN);
}

#[test]
fn config_reads_all_fields() {
    let config: Config = toml::from_str(
        r#"
catalog_path = "/srv/furahi/catalog.json"
state_dir = "/var/lib/furahi"
app_domain = "events.example.org"
"#,
    )
    .unwrap();
    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/srv/furahi/catalog.json"))
    );
    assert_eq!(config.state_dir, Some(PathBuf::from("/var/lib/furahi")));
    assert_eq!(config.app_domain, "events.example.org");
}

#[tokio::test]
async fn missing_catalog_file_fails() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_catalog_path(Some(&temp_dirs.data_dir.join("missing.json")))
        .with_state_dir(&temp_dirs.state_dir)
        .build();

    // Act
    let err = Furahi::new(config).await.unwrap_err();

    // Assert
    assert!(err.to_string().contains("catalog"), "{err}");
}

#[tokio::test]
async fn malformed_catalog_fails() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.data_dir.join("catalog.json");
    fs::write(&path, r#"[{"id": 1}]"#).await.unwrap();
    let config = TestConfigBuilder::new()
        .with_catalog_path(Some(&path))
        .with_state_dir(&temp_dirs.state_dir)
        .build();

    // Act
    let result = Furahi::new(config).await;

    // Assert
    assert!(result.is_err());
}

#[tokio::test]
async fn state_dir_is_created_on_first_save() {
    // Arrange - state directory does not exist yet
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let state_dir = temp_dirs.base().join("fresh").join("state");
    let config = TestConfigBuilder::new().with_state_dir(&state_dir).build();
    let mut furahi = Furahi::new(config).await.unwrap();

    // Act
    furahi
        .complete_onboarding(test_prefs(City::Nakuru, &[Genre::CarShow]))
        .await
        .unwrap();

    // Assert
    assert!(state_dir.is_dir());
}
