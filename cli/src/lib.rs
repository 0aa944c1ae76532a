// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of FurahiDay: onboarding, the event feed, search,
//! saved events, calendar export and sharing.

mod arg;
mod cli;
mod cmd_cities;
mod cmd_details;
mod cmd_export;
mod cmd_feed;
mod cmd_generate_completion;
mod cmd_onboard;
mod cmd_saved;
mod cmd_search;
mod cmd_share;
mod config;
mod event_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
