//! JSON file persistence for keyed repositories.
//!
//! # Responsibility
//! - Serialize a repository snapshot to a single JSON array file.
//! - Restore a repository from that file as one all-or-nothing step.
//!
//! # Invariants
//! - A failed load never leaves a target repository partially populated.
//! - Failures are returned to the caller; the adapter only logs metadata
//!   (path, counts, durations), never record contents.

use crate::model::entity::Keyed;
use crate::repo::keyed_repo::KeyedRepository;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence adapter failure.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file does not exist.
    MissingFile(PathBuf),
    /// Filesystem read/write failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Snapshot could not be encoded as JSON.
    Encode(serde_json::Error),
    /// File content is not a valid JSON record array.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// File decoded but its records break a repository invariant
    /// (e.g. the same key listed twice).
    Rejected { path: PathBuf, reason: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "store file not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "store io error at {}: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode store snapshot: {err}"),
            Self::Decode { path, source } => {
                write!(f, "invalid store file {}: {source}", path.display())
            }
            Self::Rejected { path, reason } => {
                write!(f, "rejected store file {}: {reason}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
            Self::MissingFile(_) | Self::Rejected { .. } => None,
        }
    }
}

/// Saves and restores a keyed repository as a pretty-printed JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every entity of `repo`, in insertion order, in one file write.
    ///
    /// # Side effects
    /// - Replaces the backing file.
    /// - Emits `store_save` logging events with count and duration.
    pub fn save<T>(&self, repo: &KeyedRepository<T>) -> StoreResult<()>
    where
        T: Keyed + Serialize,
    {
        let started_at = Instant::now();
        let items: Vec<&T> = repo.iter().collect();

        let result = serde_json::to_string_pretty(&items)
            .map_err(StoreError::Encode)
            .and_then(|json| {
                std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            });

        match &result {
            Ok(()) => info!(
                "event=store_save module=store status=ok path={} count={} duration_ms={}",
                self.path.display(),
                items.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_save module=store status=error path={} duration_ms={} error={}",
                self.path.display(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Reads the backing file into a fresh repository.
    ///
    /// # Errors
    /// - `MissingFile` when the file does not exist.
    /// - `Io` / `Decode` on unreadable or malformed content.
    /// - `Rejected` when two records share a key.
    pub fn load<T>(&self) -> StoreResult<KeyedRepository<T>>
    where
        T: Keyed + DeserializeOwned,
    {
        let started_at = Instant::now();
        let result = self.read_repository::<T>();

        match &result {
            Ok(repo) => info!(
                "event=store_load module=store status=ok path={} count={} duration_ms={}",
                self.path.display(),
                repo.len(),
                started_at.elapsed().as_millis()
            ),
            Err(StoreError::MissingFile(_)) => warn!(
                "event=store_load module=store status=missing path={}",
                self.path.display()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error path={} duration_ms={} error={}",
                self.path.display(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Replaces the contents of `repo` with the backing file.
    ///
    /// On any error `repo` is left exactly as it was. Returns the number of
    /// restored entities.
    pub fn load_into<T>(&self, repo: &mut KeyedRepository<T>) -> StoreResult<usize>
    where
        T: Keyed + DeserializeOwned,
    {
        let loaded = self.load()?;
        *repo = loaded;
        Ok(repo.len())
    }

    fn read_repository<T>(&self) -> StoreResult<KeyedRepository<T>>
    where
        T: Keyed + DeserializeOwned,
    {
        let json = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::MissingFile(self.path.clone())
            } else {
                StoreError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let items: Vec<T> = serde_json::from_str(&json).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })?;

        KeyedRepository::try_from_seed(items).map_err(|err| StoreError::Rejected {
            path: self.path.clone(),
            reason: err.to_string(),
        })
    }
}
