//! Storage Module
//!
//! CSV file persistence for the catalog.
//!
//! ## Responsibilities
//! - Load a catalog's records from a CSV file (skipping malformed rows)
//! - Append one encoded record (the create path's durability hook)
//! - Rewrite a whole file from the in-memory state (full-resync save)
//!
//! The in-memory catalog is the source of truth: a failed append or
//! rewrite is reported to the caller, never compensated by rolling back
//! the in-memory mutation.

mod gateway;

pub use gateway::{CsvGateway, LoadStats};
