//! Core types shared by the league and expedition calculators

use serde::{Deserialize, Serialize};

/// Item rarity tier, from basic trash drops up to mythic relics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Basic,
    Common,
    Uncommon,
    Exotic,
    Rare,
    Special,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Get all rarities, ordered from lowest to highest
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Basic,
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Exotic,
            Rarity::Rare,
            Rarity::Special,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythic,
        ]
    }

    /// Numeric tier, 0 (basic) through 8 (mythic)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Rarity for a numeric tier, `None` outside 0..=8
    pub fn from_index(index: u8) -> Option<Rarity> {
        Rarity::all().get(index as usize).copied()
    }

    /// French display name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Basic => "Basique",
            Rarity::Common => "Commun",
            Rarity::Uncommon => "Peu commun",
            Rarity::Exotic => "Exotique",
            Rarity::Rare => "Rare",
            Rarity::Special => "Spécial",
            Rarity::Epic => "Épique",
            Rarity::Legendary => "Légendaire",
            Rarity::Mythic => "Mythique",
        }
    }

    /// Display icon
    pub fn icon(&self) -> &'static str {
        match self {
            Rarity::Basic => "🔸",
            Rarity::Common => "🔶",
            Rarity::Uncommon => "🔥",
            Rarity::Exotic => "🔱",
            Rarity::Rare => "☄️",
            Rarity::Special => "💫",
            Rarity::Epic => "⭐",
            Rarity::Legendary => "🌟",
            Rarity::Mythic => "💎",
        }
    }
}

/// Competitive league a player finishes a week in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum League {
    Wood,
    Rock,
    Iron,
    Bronze,
    Silver,
    Gold,
    Diamond,
    Elite,
    Infinite,
    Legendary,
    Royal,
}

impl League {
    /// Get all leagues, ordered from lowest to highest
    pub fn all() -> &'static [League] {
        &[
            League::Wood,
            League::Rock,
            League::Iron,
            League::Bronze,
            League::Silver,
            League::Gold,
            League::Diamond,
            League::Elite,
            League::Infinite,
            League::Legendary,
            League::Royal,
        ]
    }

    /// Stable string key used in saved data and APIs
    pub fn key(&self) -> &'static str {
        match self {
            League::Wood => "wood",
            League::Rock => "rock",
            League::Iron => "iron",
            League::Bronze => "bronze",
            League::Silver => "silver",
            League::Gold => "gold",
            League::Diamond => "diamond",
            League::Elite => "elite",
            League::Infinite => "infinite",
            League::Legendary => "legendary",
            League::Royal => "royal",
        }
    }

    /// Look up a league by its string key
    pub fn from_key(key: &str) -> Option<League> {
        League::all().iter().copied().find(|l| l.key() == key)
    }

    /// French display name
    pub fn name(&self) -> &'static str {
        match self {
            League::Wood => "Bois",
            League::Rock => "Roche",
            League::Iron => "Fer",
            League::Bronze => "Bronze",
            League::Silver => "Argent",
            League::Gold => "Or",
            League::Diamond => "Diamant",
            League::Elite => "Élite",
            League::Infinite => "Infini",
            League::Legendary => "Légendaire",
            League::Royal => "Royal",
        }
    }

    /// Display emoji
    pub fn emoji(&self) -> &'static str {
        match self {
            League::Wood => "🌲",
            League::Rock => "🗿",
            League::Iron => "⚔️",
            League::Bronze => "🥉",
            League::Silver => "🥈",
            League::Gold => "🥇",
            League::Diamond => "💎",
            League::Elite => "💯",
            League::Infinite => "🌀",
            League::Legendary => "🏆",
            League::Royal => "👑",
        }
    }
}

/// Per-terrain weighting applied to the base reward tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardWeights {
    pub money: f64,
    pub experience: f64,
    pub points: f64,
}

/// Terrain an expedition takes place on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Plains,
    Forest,
    Mountain,
    Desert,
    Swamp,
    Ruins,
    Cave,
    Coast,
}

impl Terrain {
    /// Get all terrains
    pub fn all() -> &'static [Terrain] {
        &[
            Terrain::Plains,
            Terrain::Forest,
            Terrain::Mountain,
            Terrain::Desert,
            Terrain::Swamp,
            Terrain::Ruins,
            Terrain::Cave,
            Terrain::Coast,
        ]
    }

    /// French display name
    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Plains => "Plaine",
            Terrain::Forest => "Forêt",
            Terrain::Mountain => "Montagne",
            Terrain::Desert => "Désert",
            Terrain::Swamp => "Marais",
            Terrain::Ruins => "Ruines",
            Terrain::Cave => "Caverne",
            Terrain::Coast => "Côte",
        }
    }

    /// Display emoji
    pub fn emoji(&self) -> &'static str {
        match self {
            Terrain::Plains => "🌾",
            Terrain::Forest => "🌲",
            Terrain::Mountain => "⛰️",
            Terrain::Desert => "🏜️",
            Terrain::Swamp => "🌿",
            Terrain::Ruins => "🏛️",
            Terrain::Cave => "🕳️",
            Terrain::Coast => "🌊",
        }
    }

    /// Short French flavour text shown in terrain pickers
    pub fn description(&self) -> &'static str {
        match self {
            Terrain::Plains => "Zone équilibrée sans bonus particulier",
            Terrain::Forest => "Bonus d'XP, moins d'argent",
            Terrain::Mountain => "Bonus d'argent important, moins de points",
            Terrain::Desert => "Bonus de points et tokens, moins d'argent et d'XP",
            Terrain::Swamp => "Bonus de points, moins d'argent",
            Terrain::Ruins => "Bonus d'argent, moyenne sur le reste",
            Terrain::Cave => "Gros bonus d'argent, malus XP et points",
            Terrain::Coast => "Léger bonus d'argent, équilibré",
        }
    }

    /// Multipliers applied to the money/experience/points reward tables
    pub fn reward_weights(&self) -> RewardWeights {
        match self {
            Terrain::Plains => RewardWeights { money: 1.0, experience: 1.0, points: 1.0 },
            Terrain::Forest => RewardWeights { money: 0.8, experience: 1.3, points: 0.9 },
            Terrain::Mountain => RewardWeights { money: 1.9, experience: 1.0, points: 0.3 },
            Terrain::Desert => RewardWeights { money: 0.6, experience: 0.4, points: 1.5 },
            Terrain::Swamp => RewardWeights { money: 0.4, experience: 1.0, points: 1.6 },
            Terrain::Ruins => RewardWeights { money: 1.7, experience: 1.0, points: 0.5 },
            Terrain::Cave => RewardWeights { money: 2.2, experience: 0.5, points: 0.2 },
            Terrain::Coast => RewardWeights { money: 1.2, experience: 0.7, points: 0.8 },
        }
    }

    /// Danger skew used when rolling a risk rate for this terrain.
    /// Below 1.0 the roll is biased safe, above 1.0 it is biased dangerous.
    pub fn danger_skew(&self) -> f64 {
        match self {
            Terrain::Plains => 0.5,
            Terrain::Coast => 0.65,
            Terrain::Forest => 0.75,
            Terrain::Desert => 1.0,
            Terrain::Mountain => 1.2,
            Terrain::Swamp => 1.4,
            Terrain::Ruins => 1.6,
            Terrain::Cave => 1.8,
        }
    }

    /// Map a world-map tile code onto the terrain an expedition there uses
    pub fn from_map_code(code: &str) -> Option<Terrain> {
        match code {
            "fo" => Some(Terrain::Forest),
            "mo" => Some(Terrain::Mountain),
            "de" => Some(Terrain::Desert),
            "ruins" | "castleEntrance" | "castleThrone" => Some(Terrain::Ruins),
            "be" | "ri" => Some(Terrain::Coast),
            "la" => Some(Terrain::Swamp),
            "pl" | "ro" | "vi" | "continent" => Some(Terrain::Plains),
            "ci" => Some(Terrain::Cave),
            _ => None,
        }
    }
}

/// How much a pet enjoys a given terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainAffinity {
    Liked,
    Neutral,
    Disliked,
}

impl TerrainAffinity {
    /// Get all affinities
    pub fn all() -> &'static [TerrainAffinity] {
        &[
            TerrainAffinity::Liked,
            TerrainAffinity::Neutral,
            TerrainAffinity::Disliked,
        ]
    }

    /// French display name
    pub fn name(&self) -> &'static str {
        match self {
            TerrainAffinity::Liked => "Aimé",
            TerrainAffinity::Neutral => "Neutre",
            TerrainAffinity::Disliked => "Détesté",
        }
    }
}

/// Final state of a resolved expedition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpeditionOutcome {
    TotalSuccess,
    PartialSuccess,
    Failure,
}

impl ExpeditionOutcome {
    /// French display name
    pub fn name(&self) -> &'static str {
        match self {
            ExpeditionOutcome::TotalSuccess => "Succès total",
            ExpeditionOutcome::PartialSuccess => "Succès partiel",
            ExpeditionOutcome::Failure => "Échec",
        }
    }

    /// Display emoji
    pub fn emoji(&self) -> &'static str {
        match self {
            ExpeditionOutcome::TotalSuccess => "✨",
            ExpeditionOutcome::PartialSuccess => "⚠️",
            ExpeditionOutcome::Failure => "❌",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_index_round_trips() {
        for rarity in Rarity::all() {
            assert_eq!(Rarity::from_index(rarity.index()), Some(*rarity));
        }
        assert_eq!(Rarity::from_index(9), None);
    }

    #[test]
    fn league_key_round_trips() {
        for league in League::all() {
            assert_eq!(League::from_key(league.key()), Some(*league));
        }
        assert_eq!(League::from_key("obsidian"), None);
    }

    #[test]
    fn map_codes_cover_every_terrain() {
        let codes = [
            "fo", "mo", "de", "ruins", "be", "ri", "la", "pl", "ro", "vi", "ci",
            "castleEntrance", "castleThrone", "continent",
        ];
        for code in codes {
            assert!(Terrain::from_map_code(code).is_some(), "unmapped code {code}");
        }
        assert_eq!(Terrain::from_map_code("sea"), None);
        // Rivers and beaches both resolve to the coast tables
        assert_eq!(Terrain::from_map_code("ri"), Some(Terrain::Coast));
        assert_eq!(Terrain::from_map_code("be"), Some(Terrain::Coast));
    }

    #[test]
    fn plains_weights_are_neutral() {
        let weights = Terrain::Plains.reward_weights();
        assert_eq!(weights.money, 1.0);
        assert_eq!(weights.experience, 1.0);
        assert_eq!(weights.points, 1.0);
    }
}
