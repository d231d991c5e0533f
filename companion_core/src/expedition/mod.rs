//! Expedition system - forecasting, resolution and offer generation

mod forecast;
mod generate;
mod preference;
mod resolve;
mod rewards;
mod risk;

pub use forecast::{forecast, ExpeditionForecast};
pub use generate::{
    generate_offers, generate_offers_with_rng, roll_terrain_risk, DurationClass,
    ExpeditionBonus, ExpeditionOffer,
};
pub use preference::{
    affinity_reward_multiplier, affinity_risk_adjustment, love_change, LoveEvent,
};
pub use resolve::{
    resolve_expedition, resolve_expedition_with_rng, ResolvedExpedition, ResolvedRewards,
};
pub use rewards::{
    expected_tokens, food_required, item_rarity_range, linear_score, reward_index,
    rewards_for, talisman_drop_chance, ExpeditionRewards, RarityRange, TokenEstimate,
    EXPERIENCE_BY_INDEX, FOOD_BY_INDEX, MONEY_BY_INDEX, POINTS_BY_INDEX,
};
pub use risk::{
    effective_duration, effective_risk, outcome_rates, speed_duration_modifier, OutcomeRates,
};

use serde::{Deserialize, Serialize};

use crate::types::Terrain;

/// Shared expedition domain bounds
pub mod constants {
    /// Shortest expedition the board offers (minutes)
    pub const MIN_DURATION_MINUTES: u32 = 10;

    /// Longest expedition the board offers (minutes, 3 days)
    pub const MAX_DURATION_MINUTES: u32 = 4320;

    /// Risk rates are percentages
    pub const MAX_RISK_RATE: f64 = 100.0;

    /// Difficulty is a percentage
    pub const MAX_DIFFICULTY: f64 = 100.0;

    /// Wealth rate caps at double the neutral payout
    pub const MAX_WEALTH_RATE: f64 = 2.0;

    /// Wealth rate that neither raises nor lowers the reward index
    pub const NEUTRAL_WEALTH_RATE: f64 = 1.0;

    /// Love points cap
    pub const MAX_LOVE_POINTS: f64 = 110.0;
}

/// Everything a forecast or resolution needs to know about one trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionInputs {
    // === Offer ===
    pub terrain: Terrain,
    pub duration_minutes: u32,
    /// Advertised danger in percent
    pub risk_rate: f64,
    /// Advertised difficulty in percent
    pub difficulty: f64,
    /// Payout multiplier base, 1.0 is neutral
    pub wealth_rate: f64,

    // === Pet ===
    pub love_points: f64,
    pub pet_force: f64,
    pub pet_speed: f64,

    // === Modifiers ===
    pub has_enough_food: bool,
    /// Owning the clone talisman disables further drops
    pub has_clone_talisman: bool,
    /// Offer carries the x10 talisman bonus
    pub talisman_bonus: bool,
    /// Offer carries the x3 token bonus
    pub token_bonus: bool,
}

impl Default for ExpeditionInputs {
    fn default() -> Self {
        ExpeditionInputs {
            terrain: Terrain::Plains,
            duration_minutes: 120,
            risk_rate: 30.0,
            difficulty: 40.0,
            wealth_rate: 1.0,
            love_points: 100.0,
            pet_force: 5.0,
            pet_speed: 12.0,
            has_enough_food: true,
            has_clone_talisman: false,
            talisman_bonus: false,
            token_bonus: false,
        }
    }
}

impl ExpeditionInputs {
    /// Build inputs from an offer reading, clamped into the domain bounds
    pub fn new(
        terrain: Terrain,
        duration_minutes: u32,
        risk_rate: f64,
        difficulty: f64,
        wealth_rate: f64,
        love_points: f64,
    ) -> Self {
        ExpeditionInputs {
            terrain,
            duration_minutes: duration_minutes.clamp(
                constants::MIN_DURATION_MINUTES,
                constants::MAX_DURATION_MINUTES,
            ),
            risk_rate: risk_rate.clamp(0.0, constants::MAX_RISK_RATE),
            difficulty: difficulty.clamp(0.0, constants::MAX_DIFFICULTY),
            wealth_rate: wealth_rate.clamp(0.0, constants::MAX_WEALTH_RATE),
            love_points: love_points.clamp(0.0, constants::MAX_LOVE_POINTS),
            ..ExpeditionInputs::default()
        }
    }

    /// Attach the pet's force and speed
    pub fn with_pet(mut self, force: f64, speed: f64) -> Self {
        self.pet_force = force;
        self.pet_speed = speed;
        self
    }

    /// Apply an offer's bonus to the matching multiplier flag
    pub fn with_bonus(mut self, bonus: Option<ExpeditionBonus>) -> Self {
        self.talisman_bonus = matches!(bonus, Some(ExpeditionBonus::Talisman));
        self.token_bonus = matches!(bonus, Some(ExpeditionBonus::Tokens));
        self
    }
}
