//! Pet roster

use serde::{Deserialize, Serialize};

use crate::DataError;

/// One pet, reduced to what the calculations need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: u32,
    pub name: String,
    pub force: f64,
    pub speed: f64,
    /// Game rarity tier, 1 through 8
    pub rarity: u8,
}

impl Pet {
    /// Star string shown next to the name
    pub fn rarity_stars(&self) -> String {
        "⭐".repeat(self.rarity as usize)
    }
}

/// Loaded pet list with id lookup.
///
/// The list is kept sorted by name, the order the selection screens
/// present it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pets: Vec<Pet>,
}

impl Roster {
    /// Build a roster, sorting the pets by name
    pub fn new(mut pets: Vec<Pet>) -> Self {
        pets.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Roster { pets }
    }

    /// Parse a roster from a JSON array of pets
    pub fn from_json(content: &str) -> Result<Self, DataError> {
        let pets: Vec<Pet> = serde_json::from_str(content)?;
        Ok(Roster::new(pets))
    }

    /// The roster shipped with the binary, used when neither the cache
    /// nor the network can provide a fresh one
    pub fn bundled() -> Roster {
        Roster::from_json(include_str!("../data/pets.json")).unwrap_or_default()
    }

    /// Pet by game id
    pub fn get(&self, id: u32) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"[
            {"id": 7, "name": "Loup", "force": 12, "speed": 18, "rarity": 3},
            {"id": 2, "name": "Chat", "force": 3, "speed": 25, "rarity": 1},
            {"id": 31, "name": "Dragon", "force": 45, "speed": 30, "rarity": 8}
        ]"#
    }

    #[test]
    fn test_from_json_sorts_by_name() {
        let roster = Roster::from_json(sample_json()).unwrap();
        let names: Vec<&str> = roster.pets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chat", "Dragon", "Loup"]);
    }

    #[test]
    fn test_get_by_id() {
        let roster = Roster::from_json(sample_json()).unwrap();
        let wolf = roster.get(7).unwrap();
        assert_eq!(wolf.name, "Loup");
        assert_eq!(wolf.force, 12.0);
        assert_eq!(wolf.speed, 18.0);
        assert!(roster.get(999).is_none());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Roster::from_json("{not json").is_err());
        assert!(Roster::from_json(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_bundled_roster_loads() {
        let roster = Roster::bundled();
        assert!(!roster.is_empty());
        for pet in roster.pets() {
            assert!(pet.rarity >= 1 && pet.rarity <= 8);
            assert!(!pet.name.is_empty());
        }
        // Sorted by name
        for pair in roster.pets().windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn test_rarity_stars() {
        let pet = Pet {
            id: 1,
            name: "Chien".to_string(),
            force: 2.0,
            speed: 20.0,
            rarity: 3,
        };
        assert_eq!(pet.rarity_stars(), "⭐⭐⭐");
    }
}
