//! Expedition resolution - roll what actually comes home

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{ExpeditionOutcome, TerrainAffinity};

use super::forecast::forecast;
use super::preference::{
    affinity_reward_multiplier, affinity_risk_adjustment, love_change, LoveEvent,
};
use super::rewards::talisman_drop_chance;
use super::risk::effective_risk;
use super::{constants, ExpeditionInputs};

/// Actual loot brought home by one resolved expedition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRewards {
    pub money: u32,
    pub experience: u32,
    pub points: u32,
    pub tokens: u32,
}

/// One rolled expedition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedExpedition {
    pub outcome: ExpeditionOutcome,
    /// Affinity-adjusted risk the rolls were made against
    pub effective_risk: f64,
    pub rewards: ResolvedRewards,
    pub talisman_dropped: bool,
    pub love_change: i32,
}

/// Resolve an expedition against live randomness
pub fn resolve_expedition(
    inputs: &ExpeditionInputs,
    affinity: TerrainAffinity,
) -> ResolvedExpedition {
    let mut rng = rand::thread_rng();
    resolve_expedition_with_rng(inputs, affinity, &mut rng)
}

/// Resolve an expedition with a provided RNG (for deterministic testing)
///
/// 1. Adjust the advertised danger for the pet's terrain affinity
/// 2. Roll outright failure, then partial success, at the effective risk
/// 3. Roll the token payout inside its estimated window
/// 4. Scale money, experience and points by the affinity multiplier
/// 5. Roll the clone talisman on a total success
pub fn resolve_expedition_with_rng(
    inputs: &ExpeditionInputs,
    affinity: TerrainAffinity,
    rng: &mut impl Rng,
) -> ResolvedExpedition {
    let plan = forecast(inputs);

    let adjusted_risk_rate = (inputs.risk_rate
        + affinity_risk_adjustment(affinity, inputs.duration_minutes))
    .clamp(0.0, constants::MAX_RISK_RATE);
    let risk = effective_risk(
        adjusted_risk_rate,
        inputs.difficulty,
        inputs.pet_force,
        inputs.love_points,
        inputs.has_enough_food,
    );
    let risk_ratio = risk / 100.0;

    let outcome = if rng.gen::<f64>() < risk_ratio {
        ExpeditionOutcome::Failure
    } else if rng.gen::<f64>() < risk_ratio {
        ExpeditionOutcome::PartialSuccess
    } else {
        ExpeditionOutcome::TotalSuccess
    };

    // The affinity multiplier scales the listed payouts, not tokens
    let multiplier = affinity_reward_multiplier(affinity);
    let money = (plan.rewards.money as f64 * multiplier).round() as u32;
    let experience = (plan.rewards.experience as f64 * multiplier).round() as u32;
    let points = (plan.rewards.points as f64 * multiplier).round() as u32;
    let tokens = rng.gen_range(plan.rewards.tokens.min..=plan.rewards.tokens.max);

    let rewards = match outcome {
        ExpeditionOutcome::TotalSuccess => ResolvedRewards {
            money,
            experience,
            points,
            tokens,
        },
        ExpeditionOutcome::PartialSuccess => ResolvedRewards {
            money: (money as f64 / 2.0).round() as u32,
            experience: (experience as f64 / 2.0).round() as u32,
            points: (points as f64 / 2.0).round() as u32,
            tokens: (tokens as f64 / 2.0).ceil() as u32,
        },
        ExpeditionOutcome::Failure => ResolvedRewards {
            money: 0,
            experience: 0,
            points: 0,
            tokens: 0,
        },
    };

    let talisman_dropped = outcome == ExpeditionOutcome::TotalSuccess
        && !inputs.has_clone_talisman
        && rng.gen::<f64>() * 100.0 < talisman_drop_chance(plan.reward_index, inputs.talisman_bonus);

    ResolvedExpedition {
        outcome,
        effective_risk: risk,
        rewards,
        talisman_dropped,
        love_change: love_change(LoveEvent::Finished(outcome), affinity),
    }
}
