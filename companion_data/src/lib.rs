//! companion_data - Reference data for the companion toolset
//!
//! This library provides:
//! - Pet: the stats a calculation needs from one game pet
//! - Roster: loaded pet list with id lookup, bundled fallback included
//! - Remote fetch of the live roster and branch list over HTTP
//! - A small on-disk cache so repeated launches skip the network

mod cache;
mod fetch;
mod pet;
mod settings;

pub use cache::{Cache, BRANCH_TTL, ROSTER_TTL};
pub use fetch::{fetch_branches, fetch_roster, load_branches, load_roster};
pub use pet::{Pet, Roster};
pub use settings::Settings;

use thiserror::Error;

/// Data loading error
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to fetch remote data: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("No usable cache directory on this platform")]
    NoCacheDir,
}

impl From<ureq::Error> for DataError {
    fn from(err: ureq::Error) -> Self {
        DataError::Http(Box::new(err))
    }
}
