//! Remote game data fetch
//!
//! The game publishes its data as raw JSON files, one pet per file.
//! Fetching walks the id range, skips the holes, and names each pet
//! from the French translation table.

use std::collections::HashMap;

use serde::Deserialize;

use crate::cache::{BRANCH_TTL, ROSTER_TTL};
use crate::{Cache, DataError, Pet, Roster, Settings};

/// Highest pet id present in the game data files
const MAX_PET_ID: u32 = 101;

const USER_AGENT: &str = "companion-tools";

const ROSTER_KEY: &str = "pets";
const BRANCHES_KEY: &str = "branches";

#[derive(Deserialize)]
struct TranslationFile {
    #[serde(default)]
    pets: HashMap<String, String>,
}

#[derive(Deserialize)]
struct PetFile {
    #[serde(default)]
    rarity: u8,
    #[serde(default)]
    force: f64,
    #[serde(default)]
    speed: f64,
}

#[derive(Deserialize)]
struct BranchEntry {
    name: String,
}

fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, DataError> {
    let value = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()?
        .into_json()?;
    Ok(value)
}

/// Fetch the full pet roster from the configured branch.
///
/// Missing ids and rarity 0 entries are placeholder slots in the game
/// data, skipped rather than treated as errors. Names come from the
/// French translation table under the `{id}_male` key.
pub fn fetch_roster(settings: &Settings) -> Result<Roster, DataError> {
    let translations: TranslationFile = get_json(&settings.translations_url())?;

    let mut pets = Vec::new();
    for id in 0..=MAX_PET_ID {
        let response = match ureq::get(&settings.pet_url(id))
            .set("User-Agent", USER_AGENT)
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => continue,
            Err(err) => return Err(err.into()),
        };
        let file: PetFile = response.into_json()?;
        if file.rarity == 0 {
            continue;
        }

        let name = translations
            .pets
            .get(&format!("{id}_male"))
            .cloned()
            .unwrap_or_else(|| format!("Pet #{id}"));
        pets.push(Pet {
            id,
            name,
            force: file.force,
            speed: file.speed,
            rarity: file.rarity,
        });
    }
    Ok(Roster::new(pets))
}

/// Fetch the branch names the data repository offers
pub fn fetch_branches(settings: &Settings) -> Result<Vec<String>, DataError> {
    let branches: Vec<BranchEntry> = get_json(&settings.branches_url())?;
    Ok(branches.into_iter().map(|branch| branch.name).collect())
}

/// Roster from the cache when fresh, otherwise fetched and re-cached
pub fn load_roster(cache: &Cache, settings: &Settings) -> Result<Roster, DataError> {
    if let Some(roster) = cache.load::<Roster>(ROSTER_KEY, ROSTER_TTL) {
        return Ok(roster);
    }
    let roster = fetch_roster(settings)?;
    cache.store(ROSTER_KEY, &roster)?;
    Ok(roster)
}

/// Branch list from the cache when fresh, otherwise fetched and re-cached
pub fn load_branches(cache: &Cache, settings: &Settings) -> Result<Vec<String>, DataError> {
    if let Some(branches) = cache.load::<Vec<String>>(BRANCHES_KEY, BRANCH_TTL) {
        return Ok(branches);
    }
    let branches = fetch_branches(settings)?;
    cache.store(BRANCHES_KEY, &branches)?;
    Ok(branches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_file_tolerates_extra_fields() {
        // Game data files carry more than the calculations need
        let file: PetFile = serde_json::from_str(
            r#"{"rarity": 4, "force": 17, "speed": 22, "emote": "🦊", "diet": "carnivorous"}"#,
        )
        .unwrap();
        assert_eq!(file.rarity, 4);
        assert_eq!(file.force, 17.0);
        assert_eq!(file.speed, 22.0);
    }

    #[test]
    fn test_pet_file_defaults_missing_fields() {
        let file: PetFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file.rarity, 0);
        assert_eq!(file.force, 0.0);
        assert_eq!(file.speed, 0.0);
    }

    #[test]
    fn test_translation_file_reads_pet_names() {
        let file: TranslationFile = serde_json::from_str(
            r#"{"pets": {"1_male": "Chien", "1_female": "Chienne"}, "monsters": {}}"#,
        )
        .unwrap();
        assert_eq!(file.pets.get("1_male").map(String::as_str), Some("Chien"));
    }

    #[test]
    fn test_cached_roster_skips_the_network() {
        // An unroutable endpoint proves the cache path never fetches
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::at(dir.path().to_path_buf()).unwrap();
        let settings = Settings {
            base_url: "http://127.0.0.1:1/raw".to_string(),
            api_url: "http://127.0.0.1:1/api".to_string(),
            branch: "master".to_string(),
        };

        let roster = Roster::bundled();
        cache.store(ROSTER_KEY, &roster).unwrap();
        let loaded = load_roster(&cache, &settings).unwrap();
        assert_eq!(loaded, roster);
    }
}
