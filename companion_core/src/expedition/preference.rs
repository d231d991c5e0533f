//! Pet terrain preferences and love swings
//!
//! A pet that likes the terrain travels safer and feels outcomes
//! twice as strongly. One that hates it takes extra risk on short
//! trips and brings back only a quarter of the rewards.

use crate::types::{ExpeditionOutcome, TerrainAffinity};
use serde::{Deserialize, Serialize};

/// Risk removed when the pet likes the terrain
pub const LIKED_RISK_REDUCTION: f64 = 5.0;

/// Risk added when the pet dislikes the terrain on a short trip
pub const DISLIKED_SHORT_RISK_BONUS: f64 = 10.0;

/// Disliked terrain only hurts below this duration (12 hours)
pub const DISLIKED_DURATION_THRESHOLD_MINUTES: u32 = 720;

/// Love lost when an expedition is cancelled before departure
pub const LOVE_CANCEL_BEFORE_DEPARTURE: i32 = -15;

/// Love lost when the pet is recalled mid-expedition
pub const LOVE_RECALL_DURING_EXPEDITION: i32 = -25;

const LOVE_TOTAL_FAILURE: i32 = -3;
const LOVE_PARTIAL_SUCCESS: i32 = 2;
const LOVE_TOTAL_SUCCESS: i32 = 5;

/// Outcome swings double on a liked terrain
const LIKED_LOVE_MULTIPLIER: i32 = 2;

/// Something that changes a pet's love points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoveEvent {
    CancelBeforeDeparture,
    RecallDuringExpedition,
    Finished(ExpeditionOutcome),
}

/// Love point change for an expedition event.
///
/// Outcome swings double when the pet liked the terrain. Cancelling
/// or recalling costs the same flat amount regardless of affinity.
pub fn love_change(event: LoveEvent, affinity: TerrainAffinity) -> i32 {
    match event {
        LoveEvent::CancelBeforeDeparture => LOVE_CANCEL_BEFORE_DEPARTURE,
        LoveEvent::RecallDuringExpedition => LOVE_RECALL_DURING_EXPEDITION,
        LoveEvent::Finished(outcome) => {
            let base = match outcome {
                ExpeditionOutcome::TotalSuccess => LOVE_TOTAL_SUCCESS,
                ExpeditionOutcome::PartialSuccess => LOVE_PARTIAL_SUCCESS,
                ExpeditionOutcome::Failure => LOVE_TOTAL_FAILURE,
            };
            if affinity == TerrainAffinity::Liked {
                base * LIKED_LOVE_MULTIPLIER
            } else {
                base
            }
        }
    }
}

/// Risk delta for a pet's affinity with the terrain.
///
/// Liked terrain always shaves 5 points. Disliked terrain adds 10
/// points, but only on trips under 12 hours.
pub fn affinity_risk_adjustment(affinity: TerrainAffinity, duration_minutes: u32) -> f64 {
    match affinity {
        TerrainAffinity::Liked => -LIKED_RISK_REDUCTION,
        TerrainAffinity::Disliked if duration_minutes < DISLIKED_DURATION_THRESHOLD_MINUTES => {
            DISLIKED_SHORT_RISK_BONUS
        }
        _ => 0.0,
    }
}

/// Share of the rewards a pet brings back from this terrain
pub fn affinity_reward_multiplier(affinity: TerrainAffinity) -> f64 {
    match affinity {
        TerrainAffinity::Liked => 1.0,
        TerrainAffinity::Neutral => 0.8,
        TerrainAffinity::Disliked => 0.25,
    }
}
