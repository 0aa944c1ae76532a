// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, TimeDelta, Utc};

use crate::Event;

/// How long share feedback stays visible, in milliseconds.
pub const FEEDBACK_MILLIS: i64 = 2500;

pub const FEEDBACK_SHARED: &str = "Shared!";
pub const FEEDBACK_SHARE_FAILED: &str = "Share failed.";
pub const FEEDBACK_COPIED: &str = "Copied!";
pub const FEEDBACK_COPY_FAILED: &str = "Copy failed.";

/// Why a share or copy attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The mechanism does not exist on this platform.
    #[error("not supported on this platform")]
    Unsupported,

    /// The user dismissed the share sheet.
    #[error("cancelled by user")]
    Cancelled,

    #[error("{0}")]
    Failed(String),
}

/// What a platform offers for sharing an event.
pub trait ShareTarget {
    /// Hands the payload to the native share mechanism.
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;

    /// Copies text to the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Content handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(event: &Event, domain: &str) -> Self {
        Self {
            title: event.title.clone(),
            text: share_text(event, domain),
            url: event_url(event, domain),
        }
    }
}

/// Text shared for an event: title, description and the deep link.
pub fn share_text(event: &Event, domain: &str) -> String {
    format!(
        "{}\n\n{}\n\nFind out more: {}",
        event.title,
        event.description,
        event_url(event, domain)
    )
}

/// Deep link to an event.
pub fn event_url(event: &Event, domain: &str) -> String {
    format!("https://{domain}/event/{}", event.id)
}

/// Transient status message shown after sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFeedback {
    pub message: &'static str,
    pub expires_at: DateTime<Utc>,
}

impl ShareFeedback {
    fn new(message: &'static str, now: DateTime<Utc>) -> Self {
        Self {
            message,
            expires_at: now + TimeDelta::milliseconds(FEEDBACK_MILLIS),
        }
    }

    /// The message while it is still visible.
    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&'static str> {
        (now < self.expires_at).then_some(self.message)
    }

    pub fn is_success(&self) -> bool {
        self.message == FEEDBACK_SHARED || self.message == FEEDBACK_COPIED
    }
}

/// Result of running the share fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareOutcome {
    /// Status message, `None` when the user cancelled.
    pub feedback: Option<ShareFeedback>,

    /// Text to present for manual copying when every mechanism failed.
    pub fallback_text: Option<String>,
}

/// Shares an event: native share first, clipboard when sharing is unsupported,
/// raw text when copying fails as well.
pub fn share_event(
    target: &mut impl ShareTarget,
    event: &Event,
    domain: &str,
    now: DateTime<Utc>,
) -> ShareOutcome {
    let payload = SharePayload::new(event, domain);
    let message = match target.share(&payload) {
        Ok(()) => FEEDBACK_SHARED,
        Err(ShareError::Cancelled) => {
            tracing::debug!(event = event.id, "share cancelled");
            return ShareOutcome::default();
        }
        Err(ShareError::Unsupported) => match target.copy(&payload.text) {
            Ok(()) => FEEDBACK_COPIED,
            Err(err) => {
                tracing::error!(%err, "failed to copy to clipboard");
                return ShareOutcome {
                    feedback: Some(ShareFeedback::new(FEEDBACK_COPY_FAILED, now)),
                    fallback_text: Some(payload.text),
                };
            }
        },
        Err(err) => {
            tracing::error!(%err, "couldn't share content");
            FEEDBACK_SHARE_FAILED
        }
    };

    ShareOutcome {
        feedback: Some(ShareFeedback::new(message, now)),
        fallback_text: None,
    }
}
