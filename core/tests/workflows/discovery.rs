// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Discovery workflow tests.
//!
//! These tests validate the home feed and search against a catalog file.

use chrono::{Local, TimeDelta};
use furahi_core::{
    City, DateFilter, Event, FeedConditions, Furahi, Genre, Selection, end_of_week,
};

use crate::common::{
    TempDirs, TestConfigBuilder, assert_ids, setup_temp_dirs, test_event, test_prefs,
};

fn catalog() -> Vec<Event> {
    let today = Local::now().date_naive();
    let later = end_of_week(today) + TimeDelta::days(14);
    vec![
        test_event(1, City::Nairobi, Genre::Mugithi, later, true),
        test_event(2, City::Nairobi, Genre::HipHop, today, false),
        test_event(3, City::Nairobi, Genre::Outdoor, later, false),
        test_event(4, City::Nairobi, Genre::LiveBand, today, false),
        test_event(5, City::Kisumu, Genre::Ohangla, today, true),
        test_event(6, City::Nairobi, Genre::WineBeer, today, false),
    ]
}

async fn onboarded(city: City, interests: &[Genre]) -> (Furahi, TempDirs) {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.write_catalog(&catalog()).await.unwrap();
    let config = TestConfigBuilder::new()
        .with_catalog_path(Some(&path))
        .with_state_dir(&temp_dirs.state_dir)
        .build();

    let mut furahi = Furahi::new(config).await.unwrap();
    furahi
        .complete_onboarding(test_prefs(city, interests))
        .await
        .unwrap();
    (furahi, temp_dirs)
}

#[tokio::test]
async fn feed_splits_city_events_into_buckets() {
    // Arrange
    let (furahi, _dirs) = onboarded(City::Nairobi, &[Genre::HipHop]).await;

    // Act
    let feed = furahi.feed(&FeedConditions::default()).unwrap();

    // Assert
    assert_ids(&feed.promoted, &[1]);
    assert_ids(&feed.recommended, &[2]);
    assert_ids(&feed.general, &[3, 4, 6]);
}

#[tokio::test]
async fn feed_filters_only_narrow_general_list() {
    // Arrange
    let (furahi, _dirs) = onboarded(City::Nairobi, &[Genre::HipHop]).await;

    // Act
    let conds = FeedConditions {
        date: DateFilter::Today,
        genre: Selection::Only(Genre::LiveBand),
    };
    let feed = furahi.feed(&conds).unwrap();

    // Assert - promoted event is weeks away but still shown
    assert_ids(&feed.promoted, &[1]);
    assert_ids(&feed.recommended, &[2]);
    assert_ids(&feed.general, &[4]);
}

#[tokio::test]
async fn feed_is_empty_for_city_without_events() {
    // Arrange
    let (furahi, _dirs) = onboarded(City::Kampala, &[Genre::Cultural]).await;

    // Act
    let feed = furahi.feed(&FeedConditions::default()).unwrap();

    // Assert
    assert!(feed.is_empty());
}

#[tokio::test]
async fn search_ranks_promoted_first() {
    // Arrange
    let (furahi, _dirs) = onboarded(City::Nairobi, &[Genre::HipHop]).await;

    // Act - every fixture description mentions "evening"
    let all = furahi.search("EVENING", Selection::All);
    let nairobi = furahi.search("evening", Selection::Only(City::Nairobi));
    let blank = furahi.search("   ", Selection::All);

    // Assert
    assert_ids(&all, &[1, 5, 2, 3, 4, 6]);
    assert_ids(&nairobi, &[1, 2, 3, 4, 6]);
    assert!(blank.is_empty());
}

#[tokio::test]
async fn bundled_catalog_when_no_path_configured() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();

    // Act
    let furahi = Furahi::new(config).await.unwrap();

    // Assert
    assert!(!furahi.catalog().is_empty());
    assert!(furahi.search("mugithi", Selection::All).len() >= 2);
}
