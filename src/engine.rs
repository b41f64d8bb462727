//! Engine Module
//!
//! The core catalog engine that coordinates all components.
//!
//! ## Responsibilities
//! - Coordinate Catalog, Router, and CsvGateway
//! - Route record dates to the CSV file that owns them
//! - Switch the active date range (clear + reload) when asked
//! - Keep the catalog and the current CSV file in sync on create
//!
//! ## Persistence Model
//! Create appends its record to the current CSV file immediately; edit
//! and delete mutate memory only and become durable at the next explicit
//! `save()`. The in-memory catalog is the source of truth throughout: a
//! failed append is reported as a warning, never rolled back.

use std::path::{Path, PathBuf};

use crate::catalog::{
    clamp, Asteroid, AsteroidPatch, Catalog, HazardousIter, SearchIter, DATE_MAX, NAME_MAX,
};
use crate::config::Config;
use crate::error::{NeoError, Result};
use crate::router;
use crate::storage::{CsvGateway, LoadStats};

/// Field values for a new record; the id is assigned by the engine
#[derive(Debug, Clone)]
pub struct AsteroidDraft {
    pub date: String,
    pub name: String,
    pub is_hazardous: bool,
    pub absolute_magnitude_h: f64,
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub miss_distance_km: f64,
    pub velocity_km_s: f64,
}

/// What happened to a create request
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The record was inserted; `persisted` is false when the CSV append
    /// failed (the record stays in memory regardless).
    Created { record: Asteroid, persisted: bool },

    /// The record's date belongs to another file and the caller declined
    /// the switch; the pending create was discarded.
    Declined,
}

/// The main catalog engine
///
/// Single-threaded by design: every mutating operation takes `&mut self`,
/// which is the whole exclusive-access discipline this tool needs. The
/// engine owns the catalog and the identity of the current CSV file for
/// the lifetime of one run.
pub struct Engine {
    /// Engine configuration (data dir + range map)
    config: Config,

    /// CSV file I/O rooted at the data directory
    gateway: CsvGateway,

    /// Authoritative in-memory state
    catalog: Catalog,

    /// Range-map file name currently loaded (relative to data_dir)
    current_file: PathBuf,
}

impl Engine {
    /// Open an engine on the date range owning `start_date`
    ///
    /// On startup:
    /// 1. Route the date through the range map
    /// 2. Load the owning CSV file into the catalog
    /// 3. Ready to serve menu operations
    ///
    /// A date with no owning file, or a file that cannot be opened, is a
    /// startup failure; the caller decides whether that is fatal.
    pub fn open(config: Config, start_date: &str) -> Result<Self> {
        // Step 1: Resolve the owning CSV file
        let file = router::route_date(start_date, &config.ranges)?.to_path_buf();

        // Step 2: Load it
        let gateway = CsvGateway::new(&config.data_dir);
        let (records, stats) = gateway.load(&file)?;

        let mut catalog = Catalog::new();
        catalog.replace_all(records);

        tracing::info!(
            "catalog ready: {} records from {} ({} lines skipped)",
            stats.loaded,
            file.display(),
            stats.skipped
        );

        Ok(Self {
            config,
            gateway,
            catalog,
            current_file: file,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All records, catalog order
    pub fn records(&self) -> &[Asteroid] {
        self.catalog.records()
    }

    /// Records flagged as potentially hazardous, catalog order
    pub fn hazardous(&self) -> HazardousIter<'_> {
        self.catalog.hazardous()
    }

    /// Case-insensitive substring search over names
    pub fn search<'a>(&'a self, query: &str) -> SearchIter<'a> {
        self.catalog.search(query)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a new record from a draft.
    ///
    /// Routes the draft date through the range map. When the owning file
    /// differs from the current one, `confirm_switch(current, target)`
    /// decides: declining discards the pending create entirely; accepting
    /// clears the catalog and reloads it from the target file before the
    /// insert. The new record gets the next free id, is pushed, and is
    /// appended to the CSV file; an append failure is a warning and the
    /// in-memory insert stands.
    pub fn create(
        &mut self,
        draft: AsteroidDraft,
        confirm_switch: impl FnOnce(&Path, &Path) -> bool,
    ) -> Result<CreateOutcome> {
        // Step 1: Route the date; a bad date or an unmapped range aborts
        let key = router::date_key(&draft.date)?;
        let target = router::file_for_key(key, &self.config.ranges)
            .ok_or_else(|| NeoError::NoRangeForDate(draft.date.trim().to_string()))?
            .to_path_buf();

        // Step 2: Switch files if the record belongs elsewhere
        if target != self.current_file {
            if !confirm_switch(&self.current_file, &target) {
                tracing::debug!(
                    "create declined: record belongs to {}, current file is {}",
                    target.display(),
                    self.current_file.display()
                );
                return Ok(CreateOutcome::Declined);
            }
            self.switch_to(target)?;
        }

        // Step 3: Assign the id and insert
        let record = Asteroid {
            date: clamp(draft.date.trim(), DATE_MAX),
            name: clamp(draft.name.trim(), NAME_MAX),
            id: self.catalog.next_id(),
            is_hazardous: draft.is_hazardous,
            absolute_magnitude_h: draft.absolute_magnitude_h,
            diameter_min_m: draft.diameter_min_m,
            diameter_max_m: draft.diameter_max_m,
            miss_distance_km: draft.miss_distance_km,
            velocity_km_s: draft.velocity_km_s,
        };
        self.catalog.push(record.clone());

        // Step 4: Append to the CSV file; memory is never rolled back
        let persisted = match self.gateway.append_one(&self.current_file, &record) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "record {} saved in memory but CSV append to {} failed: {}",
                    record.id,
                    self.current_file.display(),
                    e
                );
                false
            }
        };

        Ok(CreateOutcome::Created { record, persisted })
    }

    /// Edit a record in place, found by exact name.
    ///
    /// Name and id are immutable once created. The change is visible in
    /// memory only; it reaches the CSV file at the next `save()`.
    pub fn edit(&mut self, name: &str, patch: &AsteroidPatch) -> Result<&Asteroid> {
        let index = self
            .catalog
            .find_by_name(name)
            .ok_or_else(|| NeoError::NotFound(format!("asteroid '{}'", name)))?;

        self.catalog.update(index, patch)
    }

    /// Delete the first record with the given id, preserving order.
    ///
    /// Memory only, like `edit`; durable at the next `save()`.
    pub fn delete_by_id(&mut self, id: i64) -> Result<Asteroid> {
        let index = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| NeoError::NotFound(format!("id {}", id)))?;

        self.catalog.delete_at(index)
    }

    /// Switch the active date range: route the date, clear the catalog,
    /// and reload it from the owning file, which becomes current.
    pub fn switch_range(&mut self, date: &str) -> Result<LoadStats> {
        let file = router::route_date(date, &self.config.ranges)?.to_path_buf();
        self.switch_to(file)
    }

    /// Rewrite the current CSV file from the catalog (full resync).
    ///
    /// Returns the number of records written.
    pub fn save(&self) -> Result<usize> {
        let written = self.gateway.rewrite(&self.current_file, self.catalog.iter())?;
        tracing::info!(
            "saved {} records to {}",
            written,
            self.current_file.display()
        );
        Ok(written)
    }

    /// Clear and reload from `file`, making it current.
    ///
    /// On a reload failure the catalog is left empty and the previous
    /// file stays current; the enclosing operation aborts.
    fn switch_to(&mut self, file: PathBuf) -> Result<LoadStats> {
        self.catalog.clear();

        let (records, stats) = self.gateway.load(&file)?;
        self.catalog.replace_all(records);
        self.current_file = file;

        tracing::info!(
            "switched to {}: {} records loaded ({} lines skipped)",
            self.current_file.display(),
            stats.loaded,
            stats.skipped
        );

        Ok(stats)
    }

    // =========================================================================
    // Accessors (for the CLI, tests, and debugging)
    // =========================================================================

    /// Range-map file name currently loaded
    pub fn current_file(&self) -> &Path {
        &self.current_file
    }

    /// Which file owns a `YYYY-MM-DD` date, without touching the catalog.
    ///
    /// Lets a caller announce an impending switch before gathering the
    /// rest of a record's fields.
    pub fn file_for_date(&self, date: &str) -> Result<&Path> {
        router::route_date(date, &self.config.ranges)
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
