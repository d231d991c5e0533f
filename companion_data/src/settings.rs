//! Settings file loading
//!
//! One small TOML file points the fetcher at the game data repository.
//! Every field has a default, so a missing or partial file still works.

use std::fs;
use std::path::Path;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::DataError;

/// Remote endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Raw content root of the game data repository
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API root of the same repository, used for the branch list
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Branch the data files are read from
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: default_base_url(),
            api_url: default_api_url(),
            branch: default_branch(),
        }
    }
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/Crownicles/Crownicles".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com/repos/Crownicles/Crownicles".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Settings, DataError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Settings from the platform config directory, or the defaults
    /// when no file exists or the file does not parse
    pub fn load_or_default() -> Settings {
        ProjectDirs::from("", "", "companion-tools")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .and_then(|path| Settings::load(&path).ok())
            .unwrap_or_default()
    }

    /// URL of one pet's data file
    pub fn pet_url(&self, id: u32) -> String {
        format!("{}/{}/Core/resources/pets/{}.json", self.base_url, self.branch, id)
    }

    /// URL of the French model translations, which carry the pet names
    pub fn translations_url(&self) -> String {
        format!("{}/{}/Lang/fr/models.json", self.base_url, self.branch)
    }

    /// URL of the repository branch list
    pub fn branches_url(&self) -> String {
        format!("{}/branches", self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.branch, "master");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str(r#"branch = "beta""#).unwrap();
        assert_eq!(settings.branch, "beta");
        assert_eq!(settings.base_url, default_base_url());
    }

    #[test]
    fn test_urls() {
        let settings = Settings {
            base_url: "https://raw.example.com/game".to_string(),
            api_url: "https://api.example.com/game".to_string(),
            branch: "dev".to_string(),
        };
        assert_eq!(
            settings.pet_url(12),
            "https://raw.example.com/game/dev/Core/resources/pets/12.json"
        );
        assert_eq!(
            settings.translations_url(),
            "https://raw.example.com/game/dev/Lang/fr/models.json"
        );
        assert_eq!(settings.branches_url(), "https://api.example.com/game/branches");
    }
}
