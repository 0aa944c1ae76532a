// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

/// Date range shown by the home feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DateFilter {
    /// Events on the reference date.
    Today,

    /// Events from the reference date through the end of the week.
    #[cfg_attr(feature = "clap", clap(name = "weekend"))]
    ThisWeekend,

    /// Events in the seven days after the end of the week.
    NextWeek,

    /// No date restriction.
    #[default]
    All,
}

const FILTER_TODAY: &str = "Today";
const FILTER_THIS_WEEKEND: &str = "This Weekend";
const FILTER_NEXT_WEEK: &str = "Next Week";
const FILTER_ALL: &str = "All";

impl DateFilter {
    /// All filters, in the order they are offered to the user.
    pub const ALL: [DateFilter; 4] = [
        DateFilter::Today,
        DateFilter::ThisWeekend,
        DateFilter::NextWeek,
        DateFilter::All,
    ];

    /// Whether an event on `date` passes this filter, with `today` as reference.
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateFilter::Today => date == today,
            DateFilter::ThisWeekend => today <= date && date <= end_of_week(today),
            DateFilter::NextWeek => end_of_week(today) < date && date <= end_of_next_week(today),
            DateFilter::All => true,
        }
    }
}

impl AsRef<str> for DateFilter {
    fn as_ref(&self) -> &str {
        match self {
            DateFilter::Today => FILTER_TODAY,
            DateFilter::ThisWeekend => FILTER_THIS_WEEKEND,
            DateFilter::NextWeek => FILTER_NEXT_WEEK,
            DateFilter::All => FILTER_ALL,
        }
    }
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The day after the coming Saturday: `today + (6 - weekday) + 1` with Sunday as 0.
///
/// NOTE: On a Sunday this lands on the following Sunday, and on any other day it
/// lands on the upcoming Sunday, so the "weekend" bucket always runs one day past
/// Saturday. The boundary is kept as the feed has always computed it.
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let weekday = i64::from(today.weekday().num_days_from_sunday());
    today + TimeDelta::days(6 - weekday + 1)
}

/// Seven days after [`end_of_week`].
pub fn end_of_next_week(today: NaiveDate) -> NaiveDate {
    end_of_week(today) + TimeDelta::days(7)
}

/// Converts a wall-clock time on `date` in `tz` to UTC, handles local time ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g., due to DST transition): falls back to
///   treating the wall-clock time as UTC.
pub fn local_to_utc<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let naive = NaiveDateTime::new(date, time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x.with_timezone(&Utc),
        LocalResult::Ambiguous(a, b) => {
            tracing::warn!(?naive, "ambiguous local time, picking earliest");
            let (a, b) = (a.with_timezone(&Utc), b.with_timezone(&Utc));
            if a <= b { a } else { b }
        }
        LocalResult::None => {
            tracing::warn!(?naive, "invalid local time, treating as UTC");
            Utc.from_utc_datetime(&naive)
        }
    }
}
