//! On-disk cache with read-time expiry
//!
//! Payloads are stored as JSON envelopes stamped with the wall-clock
//! second they were fetched. Staleness is checked when reading; nothing
//! ever evicts in the background.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::DataError;

/// Pets change rarely; half an hour keeps a session warm
pub const ROSTER_TTL: Duration = Duration::from_secs(30 * 60);

/// Branches move slower still
pub const BRANCH_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    fetched_at: u64,
    payload: T,
}

/// JSON file cache keyed by name
#[derive(Debug, Clone)]
pub struct Cache {
    root: PathBuf,
}

impl Cache {
    /// Cache under the platform cache directory
    pub fn open() -> Result<Cache, DataError> {
        let dirs = ProjectDirs::from("", "", "companion-tools").ok_or(DataError::NoCacheDir)?;
        Cache::at(dirs.cache_dir().to_path_buf())
    }

    /// Cache rooted at a specific directory
    pub fn at(root: PathBuf) -> Result<Cache, DataError> {
        fs::create_dir_all(&root)?;
        Ok(Cache { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Store a payload under a key, stamped with the current time
    pub fn store<T: Serialize>(&self, key: &str, payload: &T) -> Result<(), DataError> {
        let envelope = Envelope {
            fetched_at: unix_now(),
            payload,
        };
        fs::write(self.path_for(key), serde_json::to_string(&envelope)?)?;
        Ok(())
    }

    /// Load a payload if present and younger than `ttl`.
    ///
    /// A missing file, an expired stamp and an unreadable envelope all
    /// come back as None so the caller falls through to a fresh fetch.
    pub fn load<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let content = fs::read_to_string(self.path_for(key)).ok()?;
        let envelope: Envelope<T> = serde_json::from_str(&content).ok()?;
        let age = unix_now().saturating_sub(envelope.fetched_at);
        if age > ttl.as_secs() {
            return None;
        }
        Some(envelope.payload)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
