// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Onboarding workflow tests.
//!
//! These tests cover the first run: detecting or choosing a city, picking
//! interests, and restoring the saved preferences on the next start.

use furahi_core::{
    City, CityStep, Coordinate, FeedConditions, FilePreferenceStore, Furahi, Genre,
    GeolocationError, KEY_USER_CITY, Onboarding, OnboardingError, OnboardingStep,
};
use tokio::fs;

use crate::common::{assert_file_exists, setup_temp_dirs, test_config, test_prefs};

#[tokio::test]
async fn first_run_requires_onboarding() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let furahi = Furahi::new(test_config(None, &temp_dirs.state_dir))
        .await
        .unwrap();

    // Assert
    assert!(furahi.session().needs_onboarding());
    assert!(furahi.preferences().is_none());
    let err = furahi.feed(&FeedConditions::default()).unwrap_err();
    assert!(err.to_string().contains("onboarding"), "{err}");
}

#[tokio::test]
async fn onboarding_with_detected_city_persists() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(None, &temp_dirs.state_dir);
    let mut furahi = Furahi::new(config.clone()).await.unwrap();

    // Act - a position near Kisumu
    let mut onboarding = Onboarding::new();
    onboarding.start();
    onboarding.located(Ok(Coordinate {
        latitude: -0.09,
        longitude: 34.76,
    }));
    assert!(matches!(
        onboarding.step(),
        OnboardingStep::City(CityStep::Confirming(info)) if info.name == City::Kisumu
    ));
    onboarding.confirm_detected();
    onboarding.toggle_interest(Genre::Ohangla);
    onboarding.toggle_interest(Genre::Outdoor);
    let prefs = onboarding.finish().unwrap();
    furahi.complete_onboarding(prefs.clone()).await.unwrap();

    // Assert - file written and restored on the next start
    let path = temp_dirs.state_dir.join(FilePreferenceStore::FILE_NAME);
    assert_file_exists(&path);
    let restarted = Furahi::new(config).await.unwrap();
    assert_eq!(restarted.preferences(), Some(&prefs));
    assert!(!restarted.session().needs_onboarding());
}

#[tokio::test]
async fn onboarding_without_location_uses_manual_selection() {
    // Arrange
    let mut onboarding = Onboarding::new();
    onboarding.start();

    // Act
    onboarding.located(Err(GeolocationError::Denied));

    // Assert
    assert_eq!(
        onboarding.step(),
        OnboardingStep::City(CityStep::Selecting)
    );
    onboarding.select_city(City::Mombasa);
    assert_eq!(onboarding.finish(), Err(OnboardingError::EmptySelection));
    onboarding.toggle_interest(Genre::Cultural);
    assert_eq!(
        onboarding.finish().unwrap(),
        test_prefs(City::Mombasa, &[Genre::Cultural])
    );
}

#[tokio::test]
async fn corrupted_preferences_fall_back_to_onboarding() {
    // Arrange - a preference file that is not JSON
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.state_dir.join(FilePreferenceStore::FILE_NAME);
    fs::write(&path, "{{{").await.unwrap();

    // Act
    let furahi = Furahi::new(test_config(None, &temp_dirs.state_dir))
        .await
        .unwrap();

    // Assert
    assert!(furahi.session().needs_onboarding());
}

#[tokio::test]
async fn unknown_saved_city_falls_back_to_onboarding() {
    // Arrange - well-formed file with a city that no longer exists
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.state_dir.join(FilePreferenceStore::FILE_NAME);
    let content = format!(r#"{{"{KEY_USER_CITY}":"Atlantis","furahiDayUserInterests":"[\"Mugithi\"]"}}"#);
    fs::write(&path, content).await.unwrap();

    // Act
    let furahi = Furahi::new(test_config(None, &temp_dirs.state_dir))
        .await
        .unwrap();

    // Assert
    assert!(furahi.session().needs_onboarding());
}
