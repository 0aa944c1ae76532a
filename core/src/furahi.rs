// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tokio::fs;

use crate::prefs::FilePreferenceStore;
use crate::share::ShareTarget;
use crate::{
    CalendarExport, Catalog, City, Config, Event, ExportError, Feed, FeedConditions, SavedSet,
    Selection, Session, UserPreferences, classify, saved_events, search,
};

/// FurahiDay application core.
#[derive(Debug, Clone)]
pub struct Furahi {
    now: DateTime<Local>,
    config: Config,
    catalog: Catalog,
    store: FilePreferenceStore,
    session: Session,
}

impl Furahi {
    /// Creates a new instance: loads the catalog and restores saved preferences.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        let now = Local::now();
        config.normalize()?;

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)
                .await
                .map_err(|e| format!("Failed to load event catalog: {e}"))?,
            None => Catalog::bundled()?,
        };

        let state_dir = config
            .state_dir
            .as_ref()
            .ok_or("State directory is not configured")?;
        let store = FilePreferenceStore::open_or_reset(&state_dir.join(FilePreferenceStore::FILE_NAME))
            .await
            .map_err(|e| format!("Failed to open preferences: {e}"))?;

        let session = Session::restore(&store);
        tracing::debug!(
            events = catalog.len(),
            onboarded = !session.needs_onboarding(),
            "furahi initialized"
        );

        Ok(Self {
            now,
            config,
            catalog,
            store,
            session,
        })
    }

    /// The current time in the instance.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Today's date in local time.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Saved preferences, `None` until onboarding completes.
    pub fn preferences(&self) -> Option<&UserPreferences> {
        self.session.preferences()
    }

    /// Stores the onboarding result and writes it to disk.
    pub async fn complete_onboarding(&mut self, prefs: UserPreferences) -> Result<(), Box<dyn Error>> {
        self.session.complete_onboarding(&mut self.store, prefs);
        self.store
            .flush()
            .await
            .map_err(|e| format!("Failed to save preferences: {e}"))?;
        Ok(())
    }

    /// Looks up an event by its identifier.
    pub fn event(&self, id: u32) -> Result<&Event, Box<dyn Error>> {
        self.catalog
            .get(id)
            .ok_or_else(|| format!("Event not found: {id}").into())
    }

    /// The home feed for the onboarded user.
    pub fn feed(&self, conds: &FeedConditions) -> Result<Feed<'_>, Box<dyn Error>> {
        let prefs = self
            .preferences()
            .ok_or("No preferences saved, run onboarding first")?;
        tracing::debug!(city = %prefs.city, ?conds, "classifying feed");
        Ok(classify(
            self.catalog.events(),
            prefs.city,
            &prefs.interests,
            conds,
            self.today(),
        ))
    }

    /// Searches the catalog.
    pub fn search(&self, query: &str, city: Selection<City>) -> Vec<&Event> {
        search(self.catalog.events(), query, city)
    }

    /// Flips whether an event is saved for this session.
    pub fn toggle_save(&mut self, id: u32) -> Result<bool, Box<dyn Error>> {
        self.event(id)?;
        Ok(self.session.toggle_save(id))
    }

    pub fn saved(&self) -> &SavedSet {
        self.session.saved()
    }

    /// Saved events, earliest first.
    pub fn saved_events(&self) -> Vec<&Event> {
        saved_events(self.catalog.events(), self.session.saved())
    }

    /// Formats saved events as an iCalendar document in local time.
    pub fn export_calendar(&self) -> Result<String, ExportError> {
        let events = self.session.saved().events(self.catalog.events());
        CalendarExport::new(&self.config.app_domain, self.now.with_timezone(&Utc))
            .format(&Local, &events)
    }

    /// Writes saved events as an iCalendar file.
    pub async fn export_calendar_to(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let ics = self.export_calendar()?;
        fs::write(path, ics)
            .await
            .map_err(|e| format!("Failed to write calendar file: {e}"))?;
        tracing::info!(path = %path.display(), count = self.saved().len(), "calendar exported");
        Ok(())
    }

    /// Shares an event, returns the raw text when every mechanism failed.
    pub fn share(
        &mut self,
        target: &mut impl ShareTarget,
        id: u32,
    ) -> Result<Option<String>, Box<dyn Error>> {
        let now = self.now.with_timezone(&Utc);
        let event = self
            .catalog
            .get(id)
            .ok_or_else(|| format!("Event not found: {id}"))?;
        Ok(self
            .session
            .share(target, event, &self.config.app_domain, now))
    }

    /// Share feedback still visible now.
    pub fn share_feedback(&self) -> Option<&'static str> {
        self.session.feedback(self.now.with_timezone(&Utc))
    }

    /// The Thursday reminder about the coming weekend.
    pub fn weekend_teaser(&self) -> Option<String> {
        self.session.weekend_teaser(self.today())
    }
}
