// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use furahi_core::{Furahi, ShareError, SharePayload, ShareTarget};

use crate::arg::EventArgs;

#[derive(Debug, Clone, Copy)]
pub struct CmdShare {
    pub id: u32,
    pub copy: bool,
}

impl CmdShare {
    pub const NAME: &str = "share";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Share an event")
            .long_about(
                "\
Share an event. The share text is printed to the terminal, with --copy it goes \
to the system clipboard instead and is printed for manual copying when the \
clipboard cannot be reached, e.g. over SSH or in a headless session.",
            )
            .arg(EventArgs::id())
            .arg(arg!(--copy "Copy the share text instead of printing it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            copy: matches.get_flag("copy"),
        }
    }

    pub async fn run(self, furahi: &mut Furahi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "sharing event...");
        let mut target = TerminalShareTarget::new(!self.copy);
        let fallback = furahi.share(&mut target, self.id)?;

        for text in target.printed {
            println!("{text}");
        }
        if let Some(text) = fallback {
            println!("{}", "Copy this text:".bold());
            println!("{text}");
        }
        if let Some(feedback) = furahi.share_feedback() {
            println!("{}", feedback.dimmed());
        }
        Ok(())
    }
}

/// The terminal as a share target: sharing prints the text, copying goes to the
/// system clipboard.
#[derive(Debug)]
struct TerminalShareTarget {
    native: bool,
    printed: Vec<String>,
    clipboard: fn(&str) -> Result<(), ShareError>,
}

impl TerminalShareTarget {
    fn new(native: bool) -> Self {
        Self {
            native,
            printed: Vec::new(),
            clipboard: system_clipboard,
        }
    }
}

impl ShareTarget for TerminalShareTarget {
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        if !self.native {
            return Err(ShareError::Unsupported);
        }
        self.printed.push(payload.text.clone());
        Ok(())
    }

    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        (self.clipboard)(text)
    }
}

/// Writes `text` to the system clipboard, failing when none is reachable.
fn system_clipboard(text: &str) -> Result<(), ShareError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ShareError::Failed(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ShareError::Failed(e.to_string()))
}
