//! generate - random expedition offer generation
//!
//! Deals a hand of expedition offers the way the game board does: terrain
//! drawn from the map pool, risk skewed by how dangerous the terrain is,
//! duration rounded to the advertised 10 minute step, and at most one
//! bonus offer per hand.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::Terrain;

/// Offers dealt per hand.
const OFFER_COUNT: usize = 3;

/// Chance (percent) that a hand carries a x10 talisman offer.
const TALISMAN_OFFER_CHANCE: f64 = 20.0;

/// Chance (percent) of a x3 token offer when the talisman roll misses.
const TOKEN_OFFER_CHANCE: f64 = 8.0;

/// Advertised durations are rounded to this step.
const DURATION_ROUNDING_MINUTES: u32 = 10;

/// Map codes the board draws terrain from. Unknown codes fall back to
/// plains, the default map type.
const MAP_CODES: &[&str] = &[
    "fo", "mo", "de", "ruins", "be", "ri", "la", "pl", "ro", "vi", "ci",
    "castleEntrance", "castleThrone", "continent",
];

/// Duration class of an offer hand.
///
/// Short and medium hands overlap on purpose: the board advertises short
/// errands and day trips from the same low end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    Short,
    Medium,
    Long,
}

impl DurationClass {
    /// All duration classes in board order.
    pub fn all() -> &'static [DurationClass] {
        &[
            DurationClass::Short,
            DurationClass::Medium,
            DurationClass::Long,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            DurationClass::Short => "Courte",
            DurationClass::Medium => "Moyenne",
            DurationClass::Long => "Longue",
        }
    }

    /// Inclusive duration range in minutes.
    pub fn range(&self) -> (u32, u32) {
        match self {
            DurationClass::Short => (10, 60),
            DurationClass::Medium => (15, 600),
            DurationClass::Long => (720, 4320),
        }
    }
}

/// Bonus attached to at most one offer per hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpeditionBonus {
    /// Talisman drop chance is multiplied by 10.
    Talisman,
    /// Token payout is multiplied by 3.
    Tokens,
}

impl ExpeditionBonus {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ExpeditionBonus::Talisman => "Talisman x10",
            ExpeditionBonus::Tokens => "Jetons x3",
        }
    }
}

/// One expedition offer as the board advertises it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionOffer {
    pub terrain: Terrain,
    pub duration_minutes: u32,
    pub risk_rate: f64,
    pub difficulty: f64,
    pub wealth_rate: f64,
    pub bonus: Option<ExpeditionBonus>,
}

/// Rolls a risk rate biased by the terrain's danger skew.
///
/// Draws a uniform sample and raises it to `1 / skew`: skews below 1
/// push the mass toward low risks (plains), skews above 1 push it toward
/// high risks (caves). The result is a raw percentage in [0, 100].
pub fn roll_terrain_risk(terrain: Terrain, rng: &mut impl Rng) -> f64 {
    let u: f64 = rng.gen();
    100.0 * u.powf(1.0 / terrain.danger_skew())
}

/// Deals a hand of three expedition offers.
pub fn generate_offers(class: DurationClass) -> Vec<ExpeditionOffer> {
    let mut rng = rand::thread_rng();
    generate_offers_with_rng(class, &mut rng)
}

/// Deals a hand of three expedition offers using the provided RNG
/// (for deterministic testing).
///
/// Each hand:
/// 1. Rolls the bonus once: 20% for a talisman offer, otherwise 8% for
///    a token offer, otherwise none.
/// 2. Picks which offer carries the bonus, if any.
/// 3. Draws terrain, risk, duration, difficulty and wealth per offer.
///
/// Durations are rounded to the nearest 10 minutes and clamped back into
/// the class range so the advertised figure never leaves it.
pub fn generate_offers_with_rng(
    class: DurationClass,
    rng: &mut impl Rng,
) -> Vec<ExpeditionOffer> {
    let bonus = if rng.gen::<f64>() * 100.0 < TALISMAN_OFFER_CHANCE {
        Some(ExpeditionBonus::Talisman)
    } else if rng.gen::<f64>() * 100.0 < TOKEN_OFFER_CHANCE {
        Some(ExpeditionBonus::Tokens)
    } else {
        None
    };
    let bonus_slot = bonus.map(|_| rng.gen_range(0..OFFER_COUNT));

    let (min_minutes, max_minutes) = class.range();
    (0..OFFER_COUNT)
        .map(|slot| {
            let code = MAP_CODES[rng.gen_range(0..MAP_CODES.len())];
            let terrain = Terrain::from_map_code(code).unwrap_or(Terrain::Plains);

            let raw_minutes = rng.gen_range(min_minutes..=max_minutes);
            let step = DURATION_ROUNDING_MINUTES;
            let rounded = (raw_minutes as f64 / step as f64).round() as u32 * step;
            let duration_minutes = rounded.clamp(min_minutes, max_minutes);

            ExpeditionOffer {
                terrain,
                duration_minutes,
                risk_rate: roll_terrain_risk(terrain, rng).round(),
                difficulty: rng.gen_range(0..=100u32) as f64,
                wealth_rate: rng.gen_range(0..=200u32) as f64 / 100.0,
                bonus: bonus.filter(|_| bonus_slot == Some(slot)),
            }
        })
        .collect()
}
