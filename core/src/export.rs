// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) export of saved events.
//!
//! Every event is written as a VEVENT running 19:00 to 23:00 local time on its
//! date, rendered in UTC. Text escaping and line folding are left to the
//! `aimcal-ical` formatter.

use std::fmt::Write as _;
use std::io::{self, Write};

use aimcal_ical::{CalendarComponent, ICalendar, ValueText, formatter::FormatOptions, parse};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use crate::Event;
use crate::datetime::local_to_utc;

/// Default file name offered for the exported calendar.
pub const EXPORT_FILE_NAME: &str = "furahiday_events.ics";

const PRODID: &str = "-//FurahiDay//Event Planner//EN";

/// Format of DATE-TIME values in UTC.
const FORMAT_UTC: &str = "%Y%m%dT%H%M%SZ";

/// Errors raised while exporting saved events.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no saved events to export")]
    NothingSaved,

    #[error("failed to build calendar: {0}")]
    Calendar(String),

    #[error("failed to write calendar: {0}")]
    Io(#[from] io::Error),
}

/// Calendar export options.
#[derive(Debug, Clone)]
pub struct CalendarExport<'a> {
    /// Domain used in event UIDs, e.g. `furahiday.app`.
    pub domain: &'a str,

    /// The export moment, written as DTSTAMP.
    pub stamp: DateTime<Utc>,
}

impl<'a> CalendarExport<'a> {
    pub fn new(domain: &'a str, stamp: DateTime<Utc>) -> Self {
        Self { domain, stamp }
    }

    /// Formats the events as an iCalendar document, interpreting event times in `tz`.
    pub fn format<Tz: TimeZone>(&self, tz: &Tz, events: &[&Event]) -> Result<String, ExportError> {
        let calendar = self.calendar(tz, events)?;
        Ok(FormatOptions::default().write_to_string(&calendar)?)
    }

    /// Writes the events as an iCalendar document.
    pub fn write<Tz: TimeZone>(
        &self,
        tz: &Tz,
        events: &[&Event],
        w: &mut impl Write,
    ) -> Result<(), ExportError> {
        let calendar = self.calendar(tz, events)?;
        FormatOptions::default().write(&calendar, w)?;
        Ok(())
    }

    /// Builds the calendar with one VEVENT per event, in the given order.
    pub fn calendar<Tz: TimeZone>(
        &self,
        tz: &Tz,
        events: &[&Event],
    ) -> Result<ICalendar<String>, ExportError> {
        if events.is_empty() {
            return Err(ExportError::NothingSaved);
        }

        tracing::debug!(count = events.len(), "exporting events");
        let skeleton = self.skeleton(tz, events);
        let mut calendar = parse(&skeleton)
            .map_err(|e| ExportError::Calendar(format!("{e:?}")))?
            .into_iter()
            .next()
            .map(|a| a.to_owned())
            .ok_or_else(|| ExportError::Calendar("no calendar produced".to_string()))?;

        // free text goes in unescaped, the formatter escapes it on write
        for (component, event) in calendar.components.iter_mut().zip(events) {
            let CalendarComponent::Event(vevent) = component else {
                continue;
            };
            vevent.uid.content = ValueText::new(format!("{}@{}", event.id, self.domain));
            if let Some(summary) = vevent.summary.as_mut() {
                summary.content = ValueText::new(event.title.clone());
            }
            if let Some(description) = vevent.description.as_mut() {
                description.content = ValueText::new(event.description.replace("\r\n", "\n"));
            }
            if let Some(location) = vevent.location.as_mut() {
                location.content = ValueText::new(event.venue.clone());
            }
        }
        Ok(calendar)
    }

    /// Date-time lines with placeholder text, all plain ASCII.
    fn skeleton<Tz: TimeZone>(&self, tz: &Tz, events: &[&Event]) -> String {
        let stamp = self.stamp.format(FORMAT_UTC);
        let mut s = format!("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:{PRODID}\r\n");
        for (i, event) in events.iter().enumerate() {
            let (start, end) = event_span(tz, event);
            let _ = write!(
                s,
                "BEGIN:VEVENT\r\n\
UID:{i}\r\n\
DTSTAMP:{stamp}\r\n\
DTSTART:{}\r\n\
DTEND:{}\r\n\
SUMMARY:-\r\n\
DESCRIPTION:-\r\n\
LOCATION:-\r\n\
END:VEVENT\r\n",
                start.format(FORMAT_UTC),
                end.format(FORMAT_UTC),
            );
        }
        s.push_str("END:VCALENDAR\r\n");
        s
    }
}

/// Start and end of an event in UTC: 19:00 to 23:00 local time on its date.
pub fn event_span<Tz: TimeZone>(tz: &Tz, event: &Event) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        local_to_utc(tz, event.date, EVENT_START),
        local_to_utc(tz, event.date, EVENT_END),
    )
}

const EVENT_START: NaiveTime = match NaiveTime::from_hms_opt(19, 0, 0) {
    Some(t) => t,
    None => panic!("19:00:00 must exist in NaiveTime"),
};

const EVENT_END: NaiveTime = match NaiveTime::from_hms_opt(23, 0, 0) {
    Some(t) => t,
    None => panic!("23:00:00 must exist in NaiveTime"),
};
