//! Full-snapshot JSON persistence.
//!
//! Every mutation rewrites the whole collection as one pretty-printed JSON
//! array. There is no incremental log; the file on disk always mirrors the
//! collection as of the last successful mutation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while writing a snapshot.
///
/// Read-side failures are intentionally absent: a missing or unparseable
/// file degrades to an empty collection at load time.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The records could not be serialized to JSON.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        /// Snapshot file path.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_json::Error,
    },

    /// The snapshot file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Snapshot file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// A JSON array-of-records file backing one store.
#[derive(Debug)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// Create a handle for the snapshot file at `path`.
    ///
    /// The file is not touched until the first [`load`](Self::load) or
    /// [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot.
    ///
    /// A missing file is the normal first-run state and yields an empty
    /// collection. An unreadable or unparseable file also yields an empty
    /// collection, logged at warn, so a damaged snapshot never prevents
    /// startup.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "snapshot unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "snapshot unparseable, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize `records` and overwrite the snapshot file.
    ///
    /// Creates the parent directory on first save.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if serialization or the write fails.
    pub fn save<T: Serialize>(&self, records: &[T]) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| {
            SnapshotError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SnapshotError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, json).map_err(|source| SnapshotError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("missing.json"));
        let records: Vec<i32> = snapshot.load();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "not json {").unwrap();

        let snapshot = Snapshot::new(&path);
        let records: Vec<i32> = snapshot.load();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("records.json"));

        snapshot.save(&[1, 2, 3]).unwrap();
        let records: Vec<i32> = snapshot.load();
        assert_eq!(records, vec![1, 2, 3]);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("nested/dir/records.json"));

        snapshot.save(&[1]).unwrap();
        assert!(snapshot.path().exists());
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("records.json"));

        snapshot.save(&[1, 2]).unwrap();
        let contents = fs::read_to_string(snapshot.path()).unwrap();
        assert!(contents.contains('\n'));
    }
}
