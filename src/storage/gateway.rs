//! CSV persistence gateway
//!
//! Opens, reads, appends, and rewrites the per-range CSV files.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Asteroid;
use crate::csv::{decode_line, encode_record, HEADER};
use crate::error::Result;

/// Statistics from one load pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows decoded into records
    pub loaded: usize,

    /// Lines skipped (header, blank, or short rows)
    pub skipped: usize,
}

/// Performs CSV load/append/rewrite I/O rooted at one data directory
#[derive(Debug, Clone)]
pub struct CsvGateway {
    /// Directory the range-map file names resolve against
    data_dir: PathBuf,
}

impl CsvGateway {
    /// Create a gateway rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Absolute path of a range-map file name
    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load all records from a CSV file.
    ///
    /// Fails with an IO error if the file cannot be opened. Individual
    /// lines that don't decode are counted and skipped; a partially
    /// garbage file still loads its good rows.
    pub fn load(&self, file: &Path) -> Result<(Vec<Asteroid>, LoadStats)> {
        let path = self.resolve(file);
        let reader = BufReader::new(File::open(&path)?);

        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        for line in reader.lines() {
            let line = line?;
            match decode_line(&line) {
                Some(record) => {
                    records.push(record);
                    stats.loaded += 1;
                }
                None => stats.skipped += 1,
            }
        }

        tracing::debug!(
            "loaded {} records from {} ({} lines skipped)",
            stats.loaded,
            path.display(),
            stats.skipped
        );

        Ok((records, stats))
    }

    /// Append exactly one encoded record line, creating the file if absent.
    ///
    /// The create path calls this right after the in-memory insert so the
    /// catalog and the file do not diverge on success.
    pub fn append_one(&self, file: &Path, record: &Asteroid) -> Result<()> {
        let path = self.resolve(file);
        let mut out = OpenOptions::new().create(true).append(true).open(&path)?;

        writeln!(out, "{}", encode_record(record))?;
        Ok(())
    }

    /// Rewrite a CSV file from scratch: header line, then one line per
    /// record in catalog order. Used for full-resync saves.
    pub fn rewrite<'a>(
        &self,
        file: &Path,
        records: impl IntoIterator<Item = &'a Asteroid>,
    ) -> Result<usize> {
        let path = self.resolve(file);
        let mut out = BufWriter::new(File::create(&path)?);

        writeln!(out, "{}", HEADER)?;

        let mut written = 0;
        for record in records {
            writeln!(out, "{}", encode_record(record))?;
            written += 1;
        }

        out.flush()?;
        Ok(written)
    }
}
