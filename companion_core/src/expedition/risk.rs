//! Effective risk, outcome odds and pet speed
//!
//! Formula: effective = risk + difficulty / 4 - force - love / 10
//!
//! Leaving without enough food packed triples the effective risk
//! before the final clamp to [0, 100].

use serde::{Deserialize, Serialize};

/// Difficulty contribution divisor
pub const DIFFICULTY_DIVISOR: f64 = 4.0;

/// Love contribution divisor
pub const LOVE_DIVISOR: f64 = 10.0;

/// Risk multiplier when the pet leaves under-provisioned
pub const NO_FOOD_RISK_MULTIPLIER: f64 = 3.0;

/// Duration multiplier for a pet with zero speed
pub const BASE_SPEED_MULTIPLIER: f64 = 1.20;

/// Duration multiplier reduction per point of speed
pub const SPEED_REDUCTION_PER_POINT: f64 = 0.5 / 30.0;

/// Effective risk of an expedition, in [0, 100].
///
/// # Arguments
/// * `risk_rate` - Base danger of the spot, 0..=100
/// * `difficulty` - Difficulty of the spot, 0..=100
/// * `pet_force` - Each point of force removes one risk point
/// * `love_points` - Ten love points remove one risk point
/// * `has_enough_food` - Whether the pet packed the required food
pub fn effective_risk(
    risk_rate: f64,
    difficulty: f64,
    pet_force: f64,
    love_points: f64,
    has_enough_food: bool,
) -> f64 {
    let mut risk = risk_rate + difficulty / DIFFICULTY_DIVISOR - pet_force - love_points / LOVE_DIVISOR;
    if !has_enough_food {
        risk *= NO_FOOD_RISK_MULTIPLIER;
    }
    risk.clamp(0.0, 100.0)
}

/// Chance split over the three expedition outcomes, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeRates {
    pub total_success: f64,
    pub partial_success: f64,
    pub failure: f64,
}

impl OutcomeRates {
    /// Success rate counting partials at half weight
    pub fn effective_success(&self) -> f64 {
        self.total_success + self.partial_success * 0.5
    }
}

/// Outcome odds for an effective risk.
///
/// The expedition rolls danger twice. Failing the first roll loses
/// the expedition outright, failing only the second degrades it to a
/// partial success.
///
/// Formula (r = effective risk / 100):
///   failure = r
///   partial = (1 - r) * r
///   total   = (1 - r)^2
pub fn outcome_rates(effective_risk: f64) -> OutcomeRates {
    let r = effective_risk / 100.0;
    OutcomeRates {
        total_success: (1.0 - r) * (1.0 - r) * 100.0,
        partial_success: (1.0 - r) * r * 100.0,
        failure: r * 100.0,
    }
}

/// Duration multiplier for a pet's speed.
///
/// Formula: 1.20 - speed * (0.5 / 30)
///
/// A sluggish pet travels 20% slow, 12 speed is neutral, and faster
/// pets finish ahead of the advertised duration.
pub fn speed_duration_modifier(pet_speed: f64) -> f64 {
    BASE_SPEED_MULTIPLIER - pet_speed * SPEED_REDUCTION_PER_POINT
}

/// Real minutes an advertised duration takes for a given pet
pub fn effective_duration(duration_minutes: u32, pet_speed: f64) -> u32 {
    (duration_minutes as f64 * speed_duration_modifier(pet_speed)).round() as u32
}
