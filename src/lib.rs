//! # neocat
//!
//! A CSV-backed catalog of near-Earth-object close approaches with:
//! - An ordered in-memory record store (insertion order preserved)
//! - A plain CSV on-disk format, one file per calendar date range
//! - Date-range routing that picks (and switches) the owning CSV file
//! - Append-on-create persistence plus an explicit full-resync save
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive CLI                          │
//! │                  (menu + typed prompts)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                │
//! │        (list / search / create / edit / delete / save)      │
//! └──────┬──────────────────┬──────────────────────┬────────────┘
//!        │                  │                      │
//!        ▼                  ▼                      ▼
//! ┌─────────────┐    ┌─────────────┐       ┌─────────────┐
//! │   Catalog   │    │   Router    │       │ CsvGateway  │
//! │  (in-mem)   │    │ (date→file) │       │ (load/save) │
//! └─────────────┘    └─────────────┘       └──────┬──────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌─────────────┐
//!                                          │  CSV files  │
//!                                          │ (per range) │
//!                                          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod csv;
pub mod router;
pub mod storage;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NeoError, Result};
pub use config::Config;
pub use catalog::{Asteroid, AsteroidPatch, Catalog};
pub use engine::{AsteroidDraft, CreateOutcome, Engine};
pub use router::RangeEntry;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of neocat
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
