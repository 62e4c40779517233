//! Persistent best-score storage. Gameplay code never sees a storage
//! error: a broken backing file degrades to in-memory behavior with a
//! single warning, and the session keeps running.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub trait ScoreStore {
    /// Current best score. Re-reads any backing storage.
    fn get(&mut self) -> u64;

    /// Records `score` if it is strictly greater than the stored best.
    /// Returns whether a new best was recorded; ties and lower scores
    /// are no-ops.
    fn set(&mut self, score: u64) -> bool;

    /// Drops the stored best back to zero.
    fn reset(&mut self);
}

/// Process-local store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    best: u64,
}

impl ScoreStore for MemoryScoreStore {
    fn get(&mut self) -> u64 {
        self.best
    }

    fn set(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        true
    }

    fn reset(&mut self) {
        self.best = 0;
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    best: u64,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read score file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write score file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Best score persisted as a small JSON document. Construction is
/// infallible; filesystem trouble demotes the store to memory-only.
#[derive(Debug)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    cached_best: u64,
    degraded_warned: bool,
}

impl JsonFileScoreStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            cached_best: 0,
            degraded_warned: false,
        };
        match store.read_best() {
            Ok(best) => store.cached_best = best,
            Err(error) => store.note_degraded(&error),
        }
        store
    }

    fn read_best(&self) -> Result<u64, StoreError> {
        // A missing file is a fresh store, not an error.
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file: ScoreFile =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.best)
    }

    fn write_best(&self, best: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&ScoreFile { best }).map_err(|source| {
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn note_degraded(&mut self, error: &StoreError) {
        if !self.degraded_warned {
            warn!(error = %error, "score_store_degraded");
            self.degraded_warned = true;
        }
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn get(&mut self) -> u64 {
        match self.read_best() {
            Ok(best) => {
                self.cached_best = best;
                best
            }
            Err(error) => {
                self.note_degraded(&error);
                self.cached_best
            }
        }
    }

    fn set(&mut self, score: u64) -> bool {
        if score <= self.get() {
            return false;
        }
        self.cached_best = score;
        if let Err(error) = self.write_best(score) {
            self.note_degraded(&error);
        }
        true
    }

    fn reset(&mut self) {
        self.cached_best = 0;
        if self.path.exists() {
            if let Err(source) = fs::remove_file(&self.path) {
                let error = StoreError::Write {
                    path: self.path.clone(),
                    source,
                };
                self.note_degraded(&error);
            }
        }
    }
}
