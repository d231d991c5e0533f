//! Reward index and payout tables
//!
//! Formula: index = round((duration_score * 3 + risk_score + difficulty_score) * wealth)
//!
//! Each score runs linearly over [0, 3] across its input domain, and
//! wealth shifts the total by 30% per point away from neutral. The
//! index lands in 0..=9 and keys every payout table below.

use crate::expedition::constants;
use crate::types::{Rarity, Terrain};
use serde::{Deserialize, Serialize};

/// Money payout per reward index
pub const MONEY_BY_INDEX: [u32; 10] = [50, 120, 235, 435, 710, 1300, 2100, 3200, 4200, 5000];

/// Experience payout per reward index
pub const EXPERIENCE_BY_INDEX: [u32; 10] = [50, 150, 350, 600, 950, 1400, 1950, 2550, 3000, 3500];

/// Points payout per reward index
pub const POINTS_BY_INDEX: [u32; 10] = [6, 20, 75, 145, 210, 340, 420, 585, 650, 710];

/// Food an expedition consumes per reward index
pub const FOOD_BY_INDEX: [u32; 10] = [1, 3, 5, 6, 8, 10, 12, 15, 25, 32];

/// Best findable item rarity per reward index
const MAX_RARITY_BY_INDEX: [u8; 10] = [5, 5, 6, 7, 8, 8, 8, 8, 8, 8];

/// Weight of the duration score in the reward index
const DURATION_WEIGHT: f64 = 3.0;

/// Reward index shift per wealth point away from neutral
const WEALTH_BONUS_PER_POINT: f64 = 0.30;

/// Item rarity window opens 4 tiers below the reward index
const ITEM_MIN_RARITY_OFFSET: u8 = 4;

/// Tokens start one below the reward index
const TOKEN_INDEX_OFFSET: u32 = 1;
/// Expeditions under an hour pay one token less
const TOKEN_SHORT_DURATION_MINUTES: u32 = 60;
const TOKEN_SHORT_DURATION_MALUS: u32 = 1;
/// Extra malus on a zero reward index
const TOKEN_LOW_INDEX_MALUS: u32 = 1;
/// Guaranteed floor, raised when the token bonus is active
const MIN_TOKEN_REWARD: u32 = 1;
const MIN_BONUS_TOKEN_REWARD: u32 = 2;
/// Token bonus expeditions pay triple
const TOKEN_BONUS_MULTIPLIER: u32 = 3;
/// Every expedition adds a flat random boost on top
const TOKEN_RANDOM_BOOST_MIN: u32 = 0;
const TOKEN_RANDOM_BOOST_MAX: u32 = 2;

/// Base talisman drop chance in percent
const TALISMAN_BASE_DROP_CHANCE: f64 = 0.5;
/// Talisman chance gained per reward index point
const TALISMAN_CHANCE_PER_INDEX: f64 = 0.5;
/// Talisman bonus expeditions multiply the chance tenfold
const TALISMAN_BONUS_MULTIPLIER: f64 = 10.0;

/// Linear 0..=3 score of where a value sits inside [min, max]
pub fn linear_score(value: f64, min: f64, max: f64) -> f64 {
    let fraction = ((value - min) / (max - min)).clamp(0.0, 1.0);
    fraction * 3.0
}

/// Reward index in 0..=9 for an expedition's advertised parameters.
///
/// Uses the advertised duration, not the pet-adjusted one.
pub fn reward_index(duration_minutes: u32, risk_rate: f64, difficulty: f64, wealth_rate: f64) -> u8 {
    let duration_score = linear_score(
        duration_minutes as f64,
        constants::MIN_DURATION_MINUTES as f64,
        constants::MAX_DURATION_MINUTES as f64,
    );
    let risk_score = linear_score(risk_rate, 0.0, constants::MAX_RISK_RATE);
    let difficulty_score = linear_score(difficulty, 0.0, constants::MAX_DIFFICULTY);

    let base_index = duration_score * DURATION_WEIGHT + risk_score + difficulty_score;
    let wealth_multiplier =
        1.0 + (wealth_rate - constants::NEUTRAL_WEALTH_RATE) * WEALTH_BONUS_PER_POINT;
    let adjusted = base_index * wealth_multiplier;

    adjusted.round().clamp(0.0, 9.0) as u8
}

/// Food the pet must pack for a reward index
pub fn food_required(reward_index: u8) -> u32 {
    FOOD_BY_INDEX[reward_index as usize]
}

/// Estimated token payout of an expedition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub min: u32,
    pub max: u32,
    /// Midpoint of the random boost, as a whole token count
    pub expected: u32,
    pub has_bonus: bool,
}

/// Token payout for a reward index.
///
/// Tokens track the reward index minus one, lose one more under an
/// hour and on a zero index, then hit the guaranteed floor before the
/// x3 bonus multiplier. The random boost spreads the final count over
/// [min, max].
pub fn expected_tokens(reward_index: u8, duration_minutes: u32, token_bonus: bool) -> TokenEstimate {
    let mut base = (reward_index as u32).saturating_sub(TOKEN_INDEX_OFFSET);
    if duration_minutes < TOKEN_SHORT_DURATION_MINUTES {
        base = base.saturating_sub(TOKEN_SHORT_DURATION_MALUS);
    }
    if reward_index == 0 {
        base = base.saturating_sub(TOKEN_LOW_INDEX_MALUS);
    }

    let floor = if token_bonus {
        MIN_BONUS_TOKEN_REWARD
    } else {
        MIN_TOKEN_REWARD
    };
    let mut tokens = base.max(floor);
    if token_bonus {
        tokens *= TOKEN_BONUS_MULTIPLIER;
    }

    TokenEstimate {
        min: tokens + TOKEN_RANDOM_BOOST_MIN,
        max: tokens + TOKEN_RANDOM_BOOST_MAX,
        expected: tokens + (TOKEN_RANDOM_BOOST_MIN + TOKEN_RANDOM_BOOST_MAX) / 2,
        has_bonus: token_bonus,
    }
}

/// Full estimated payout of an expedition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionRewards {
    pub money: u32,
    pub experience: u32,
    pub points: u32,
    pub tokens: TokenEstimate,
}

/// Payout for a reward index on a terrain.
///
/// Money, experience and points read their index table scaled by the
/// terrain's weights. The token estimate uses the pet-adjusted
/// duration since the hour threshold cares about real travel time.
pub fn rewards_for(
    reward_index: u8,
    terrain: Terrain,
    duration_minutes: u32,
    token_bonus: bool,
) -> ExpeditionRewards {
    let weights = terrain.reward_weights();
    let idx = reward_index as usize;
    ExpeditionRewards {
        money: (MONEY_BY_INDEX[idx] as f64 * weights.money).round() as u32,
        experience: (EXPERIENCE_BY_INDEX[idx] as f64 * weights.experience).round() as u32,
        points: (POINTS_BY_INDEX[idx] as f64 * weights.points).round() as u32,
        tokens: expected_tokens(reward_index, duration_minutes, token_bonus),
    }
}

/// Item rarity window found on an expedition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityRange {
    pub min: Rarity,
    pub max: Rarity,
}

/// Item rarity window for a reward index.
///
/// The floor trails the index by 4 tiers, never below common, and the
/// ceiling reads the per-index table.
pub fn item_rarity_range(reward_index: u8) -> RarityRange {
    let min_tier = reward_index.saturating_sub(ITEM_MIN_RARITY_OFFSET).max(1);
    let max_tier = MAX_RARITY_BY_INDEX[reward_index as usize];
    RarityRange {
        min: Rarity::from_index(min_tier).unwrap_or(Rarity::Common),
        max: Rarity::from_index(max_tier).unwrap_or(Rarity::Mythic),
    }
}

/// Chance in percent of a clone talisman dropping.
///
/// Formula: 0.5 + index * 0.5, times 10 on a talisman bonus expedition
pub fn talisman_drop_chance(reward_index: u8, talisman_bonus: bool) -> f64 {
    let mut chance = TALISMAN_BASE_DROP_CHANCE + reward_index as f64 * TALISMAN_CHANCE_PER_INDEX;
    if talisman_bonus {
        chance *= TALISMAN_BONUS_MULTIPLIER;
    }
    chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_index_bounds() {
        // Minimal expedition: all scores zero
        assert_eq!(reward_index(10, 0.0, 0.0, 1.0), 0);
        // Maximal expedition saturates well past the cap
        assert_eq!(reward_index(4320, 100.0, 100.0, 2.0), 9);
    }

    #[test]
    fn test_reward_index_wealth_shift() {
        // Mid expedition: duration 2165 -> score 1.5, risk 50 -> 1.5,
        // difficulty 50 -> 1.5, base = 4.5 + 1.5 + 1.5 = 7.5
        assert_eq!(reward_index(2165, 50.0, 50.0, 1.0), 8);
        // Poor map (wealth 0): 7.5 * 0.7 = 5.25 -> 5
        assert_eq!(reward_index(2165, 50.0, 50.0, 0.0), 5);
        // Rich map (wealth 2): 7.5 * 1.3 = 9.75 -> capped at 9
        assert_eq!(reward_index(2165, 50.0, 50.0, 2.0), 9);
    }

    #[test]
    fn test_linear_score_clamps() {
        assert_eq!(linear_score(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(linear_score(250.0, 0.0, 100.0), 3.0);
        assert!((linear_score(50.0, 0.0, 100.0) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rewards_scale_with_terrain() {
        // Index 5 on plains pays the raw tables
        let plains = rewards_for(5, Terrain::Plains, 600, false);
        assert_eq!(plains.money, 1300);
        assert_eq!(plains.experience, 1400);
        assert_eq!(plains.points, 340);

        // Cave: 1300 * 2.2 = 2860, 1400 * 0.5 = 700, 340 * 0.2 = 68
        let cave = rewards_for(5, Terrain::Cave, 600, false);
        assert_eq!(cave.money, 2860);
        assert_eq!(cave.experience, 700);
        assert_eq!(cave.points, 68);
    }

    #[test]
    fn test_expected_tokens_baseline() {
        // Index 5, long enough: base 4, floor 1 -> 4, boost 0..2
        let estimate = expected_tokens(5, 600, false);
        assert_eq!(estimate.min, 4);
        assert_eq!(estimate.max, 6);
        assert_eq!(estimate.expected, 5);
        assert!(!estimate.has_bonus);
    }

    #[test]
    fn test_expected_tokens_short_duration_malus() {
        // Index 5 under an hour: base 4 - 1 = 3
        let estimate = expected_tokens(5, 45, false);
        assert_eq!(estimate.min, 3);
        assert_eq!(estimate.max, 5);
    }

    #[test]
    fn test_expected_tokens_floor_and_bonus() {
        // Index 0 bottoms out at the floor
        let poor = expected_tokens(0, 30, false);
        assert_eq!(poor.min, 1);
        assert_eq!(poor.max, 3);

        // Bonus raises the floor to 2 before tripling: 2 * 3 = 6
        let bonus = expected_tokens(0, 30, true);
        assert_eq!(bonus.min, 6);
        assert_eq!(bonus.max, 8);
        assert_eq!(bonus.expected, 7);
        assert!(bonus.has_bonus);

        // Index 9 with bonus: base 8 * 3 = 24
        let rich = expected_tokens(9, 1440, true);
        assert_eq!(rich.min, 24);
        assert_eq!(rich.expected, 25);
    }

    #[test]
    fn test_item_rarity_range() {
        // Low indexes floor at common
        assert_eq!(
            item_rarity_range(0),
            RarityRange { min: Rarity::Common, max: Rarity::Special }
        );
        assert_eq!(
            item_rarity_range(4),
            RarityRange { min: Rarity::Common, max: Rarity::Mythic }
        );
        // Index 7: min 3, max 8
        assert_eq!(
            item_rarity_range(7),
            RarityRange { min: Rarity::Exotic, max: Rarity::Mythic }
        );
        assert_eq!(
            item_rarity_range(9),
            RarityRange { min: Rarity::Special, max: Rarity::Mythic }
        );
    }

    #[test]
    fn test_talisman_drop_chance() {
        // 0.5 + 5 * 0.5 = 3.0
        assert!((talisman_drop_chance(5, false) - 3.0).abs() < f64::EPSILON);
        // Bonus expedition: 3.0 * 10 = 30
        assert!((talisman_drop_chance(5, true) - 30.0).abs() < f64::EPSILON);
        assert!((talisman_drop_chance(0, false) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_food_required_follows_table() {
        assert_eq!(food_required(0), 1);
        assert_eq!(food_required(5), 10);
        assert_eq!(food_required(9), 32);
    }
}
