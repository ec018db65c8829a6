// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only JSON sample store.

use crate::models::{MalformedRecord, Sample};
use std::fs;
use std::path::{Path, PathBuf};

/// A read-only store of workout samples backed by a JSON file.
///
/// The file is a top-level array of `[latitude, longitude, heartRate]`
/// records. No data source is mandatory: a missing or unreadable file is
/// treated as absence (`Ok(None)`), not as an error, so that callers can
/// distinguish "nothing recorded" from a genuinely broken dataset.
#[derive(Debug, Default, Clone)]
pub struct SampleRepository {
    file_path: Option<PathBuf>,
}

impl SampleRepository {
    /// Create a repository backed by a JSON file.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Create a repository with no backing resource; `list` yields `None`.
    pub fn unbacked() -> Self {
        Self::default()
    }

    /// List the stored samples, in file order.
    ///
    /// Re-reads and re-decodes the file on every call; nothing is cached.
    /// Returns `Ok(None)` when no file is configured or the file cannot be
    /// read. Decoding failures are reported as errors, never as partial
    /// results.
    pub fn list(&self) -> Result<Option<Vec<Sample>>, RepositoryError> {
        let Some(path) = &self.file_path else {
            return Ok(None);
        };

        let json_data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Sample data unavailable");
                return Ok(None);
            }
        };

        let samples = Self::decode_records(&json_data)?;
        tracing::info!(count = samples.len(), "Loaded workout samples");
        Ok(Some(samples))
    }

    /// Decode a JSON array of raw positional records.
    fn decode_records(json_data: &str) -> Result<Vec<Sample>, RepositoryError> {
        let records: Vec<Vec<f64>> = serde_json::from_str(json_data)
            .map_err(|e| RepositoryError::ParseError(e.to_string()))?;

        records
            .iter()
            .map(|record| Sample::from_record(record).map_err(RepositoryError::from))
            .collect()
    }

    /// Adding samples is not supported: the store is read-only.
    pub fn add(&self, _sample: Sample) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unsupported("add"))
    }

    /// Updating samples is not supported: the store is read-only.
    pub fn update(&self, _sample: Sample) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unsupported("update"))
    }

    /// Fetching one sample by identifier is not supported.
    pub fn get(&self, _id: u64) -> Result<Sample, RepositoryError> {
        Err(RepositoryError::Unsupported("get"))
    }

    /// Deleting samples is not supported: the store is read-only.
    pub fn delete(&self, _sample: Sample) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unsupported("delete"))
    }
}

/// Errors from sample store operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to parse sample JSON: {0}")]
    ParseError(String),

    #[error("Malformed sample record: {0}")]
    MalformedRecord(#[from] MalformedRecord),

    #[error("Operation '{0}' is not supported by the read-only sample store")]
    Unsupported(&'static str),
}
