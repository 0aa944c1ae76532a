// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Saved events, calendar export and sharing workflow tests.

use chrono::NaiveDate;
use furahi_core::{
    City, EXPORT_FILE_NAME, Event, ExportError, FEEDBACK_COPY_FAILED, FEEDBACK_SHARED, Furahi,
    Genre, ShareError, SharePayload, ShareTarget,
};
use tokio::fs;

use crate::common::{
    TempDirs, TestConfigBuilder, assert_file_exists, assert_ids, setup_temp_dirs, test_event,
};

fn catalog() -> Vec<Event> {
    let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
    vec![
        test_event(1, City::Nairobi, Genre::Mugithi, day(20), false),
        test_event(2, City::Nairobi, Genre::HipHop, day(12), true),
        test_event(3, City::Mombasa, Genre::Cultural, day(15), false),
    ]
}

async fn setup(domain: &str) -> (Furahi, TempDirs) {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.write_catalog(&catalog()).await.unwrap();
    let config = TestConfigBuilder::new()
        .with_catalog_path(Some(&path))
        .with_state_dir(&temp_dirs.state_dir)
        .with_app_domain(domain)
        .build();
    (Furahi::new(config).await.unwrap(), temp_dirs)
}

#[tokio::test]
async fn saved_view_sorts_by_date() {
    // Arrange
    let (mut furahi, _dirs) = setup("furahiday.app").await;

    // Act
    for id in [1, 3, 2] {
        assert!(furahi.toggle_save(id).unwrap());
    }

    // Assert
    assert_ids(&furahi.saved_events(), &[2, 3, 1]);
    assert_eq!(furahi.saved().ids(), [1, 3, 2]);
}

#[tokio::test]
async fn toggling_twice_unsaves() {
    // Arrange
    let (mut furahi, _dirs) = setup("furahiday.app").await;

    // Act
    assert!(furahi.toggle_save(3).unwrap());
    assert!(!furahi.toggle_save(3).unwrap());

    // Assert
    assert!(furahi.saved().is_empty());
    assert!(furahi.saved_events().is_empty());
}

#[tokio::test]
async fn unknown_event_cannot_be_saved() {
    // Arrange
    let (mut furahi, _dirs) = setup("furahiday.app").await;

    // Act
    let result = furahi.toggle_save(42);

    // Assert
    assert!(result.is_err());
    assert!(furahi.saved().is_empty());
}

#[tokio::test]
async fn export_writes_saved_events_in_save_order() {
    // Arrange
    let (mut furahi, temp_dirs) = setup("events.example.org").await;
    furahi.toggle_save(3).unwrap();
    furahi.toggle_save(1).unwrap();
    let path = temp_dirs.data_dir.join(EXPORT_FILE_NAME);

    // Act
    furahi.export_calendar_to(&path).await.unwrap();

    // Assert
    assert_file_exists(&path);
    let ics = fs::read_to_string(&path).await.unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains("VERSION:2.0\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);

    let first = ics.find("UID:3@events.example.org").unwrap();
    let second = ics.find("UID:1@events.example.org").unwrap();
    assert!(first < second);
    assert!(!ics.contains("UID:2@"));
}

#[tokio::test]
async fn export_without_saved_events_writes_nothing() {
    // Arrange
    let (furahi, temp_dirs) = setup("furahiday.app").await;
    let path = temp_dirs.data_dir.join(EXPORT_FILE_NAME);

    // Act
    let result = furahi.export_calendar();
    let written = furahi.export_calendar_to(&path).await;

    // Assert
    assert!(matches!(result, Err(ExportError::NothingSaved)));
    assert!(written.is_err());
    assert!(!path.exists());
}

#[derive(Default)]
struct RecordingTarget {
    fail_copy: bool,
    native: bool,
    shared: Vec<SharePayload>,
}

impl ShareTarget for RecordingTarget {
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        if !self.native {
            return Err(ShareError::Unsupported);
        }
        self.shared.push(payload.clone());
        Ok(())
    }

    fn copy(&mut self, _: &str) -> Result<(), ShareError> {
        if self.fail_copy {
            Err(ShareError::Failed("clipboard locked".to_string()))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn share_uses_configured_domain() {
    // Arrange
    let (mut furahi, _dirs) = setup("events.example.org").await;
    let mut target = RecordingTarget {
        native: true,
        ..Default::default()
    };

    // Act
    let fallback = furahi.share(&mut target, 2).unwrap();

    // Assert
    assert_eq!(fallback, None);
    assert_eq!(furahi.share_feedback(), Some(FEEDBACK_SHARED));
    assert_eq!(target.shared[0].url, "https://events.example.org/event/2");
}

#[tokio::test]
async fn share_returns_text_when_nothing_works() {
    // Arrange
    let (mut furahi, _dirs) = setup("furahiday.app").await;
    let mut target = RecordingTarget {
        fail_copy: true,
        ..Default::default()
    };

    // Act
    let fallback = furahi.share(&mut target, 1).unwrap();

    // Assert
    let text = fallback.unwrap();
    assert!(text.ends_with("Find out more: https://furahiday.app/event/1"));
    assert_eq!(furahi.share_feedback(), Some(FEEDBACK_COPY_FAILED));
}
