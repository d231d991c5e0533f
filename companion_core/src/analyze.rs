//! analyze - scenario analysis for expeditions read off the game screen
//!
//! The game hides exact danger and difficulty behind banded labels
//! ("Peu risqué", "Exigeant"). This module turns a banded reading into
//! best, average and worst case forecasts, plus coherence checks on
//! the reading itself.

use serde::{Deserialize, Serialize};

use crate::expedition::constants::{
    MAX_DURATION_MINUTES, MAX_LOVE_POINTS, MIN_DURATION_MINUTES,
};
use crate::expedition::{
    effective_duration, effective_risk, item_rarity_range, linear_score, outcome_rates,
    speed_duration_modifier, talisman_drop_chance, OutcomeRates, RarityRange,
    EXPERIENCE_BY_INDEX, MONEY_BY_INDEX, POINTS_BY_INDEX,
};
use crate::score::{profitability_score, ProfitabilityScore, ScoreInputs};
use crate::types::Terrain;

/// Danger band shown on the expedition screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn all() -> &'static [RiskLevel] {
        &[
            RiskLevel::VeryLow,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::VeryHigh,
        ]
    }

    /// Label the game shows for this band
    pub fn name(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Paisible",
            RiskLevel::Low => "Peu risqué",
            RiskLevel::Medium => "Modéré",
            RiskLevel::High => "Dangereux",
            RiskLevel::VeryHigh => "Périlleux",
        }
    }

    /// Danger percentage window the label covers
    pub fn range(&self) -> (f64, f64) {
        match self {
            RiskLevel::VeryLow => (0.0, 15.0),
            RiskLevel::Low => (16.0, 30.0),
            RiskLevel::Medium => (31.0, 50.0),
            RiskLevel::High => (51.0, 70.0),
            RiskLevel::VeryHigh => (71.0, 100.0),
        }
    }
}

/// Difficulty band shown on the expedition screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Trivial,
    Easy,
    Moderate,
    Challenging,
    Treacherous,
}

impl DifficultyLevel {
    pub fn all() -> &'static [DifficultyLevel] {
        &[
            DifficultyLevel::Trivial,
            DifficultyLevel::Easy,
            DifficultyLevel::Moderate,
            DifficultyLevel::Challenging,
            DifficultyLevel::Treacherous,
        ]
    }

    /// Label the game shows for this band
    pub fn name(&self) -> &'static str {
        match self {
            DifficultyLevel::Trivial => "Aisé",
            DifficultyLevel::Easy => "Accessible",
            DifficultyLevel::Moderate => "Exigeant",
            DifficultyLevel::Challenging => "Ardu",
            DifficultyLevel::Treacherous => "Impitoyable",
        }
    }

    /// Difficulty window the label covers
    pub fn range(&self) -> (f64, f64) {
        match self {
            DifficultyLevel::Trivial => (0.0, 20.0),
            DifficultyLevel::Easy => (21.0, 40.0),
            DifficultyLevel::Moderate => (41.0, 60.0),
            DifficultyLevel::Challenging => (61.0, 80.0),
            DifficultyLevel::Treacherous => (81.0, 100.0),
        }
    }
}

/// Reward band shown on the expedition screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardLevel {
    Meager,
    Modest,
    Substantial,
    Bountiful,
    Legendary,
}

impl RewardLevel {
    pub fn all() -> &'static [RewardLevel] {
        &[
            RewardLevel::Meager,
            RewardLevel::Modest,
            RewardLevel::Substantial,
            RewardLevel::Bountiful,
            RewardLevel::Legendary,
        ]
    }

    /// Label the game shows for this band
    pub fn name(&self) -> &'static str {
        match self {
            RewardLevel::Meager => "Maigres",
            RewardLevel::Modest => "Modestes",
            RewardLevel::Substantial => "Correctes",
            RewardLevel::Bountiful => "Abondantes",
            RewardLevel::Legendary => "Exceptionnelles",
        }
    }

    /// Reward index window the label covers
    pub fn range(&self) -> (u8, u8) {
        match self {
            RewardLevel::Meager => (0, 1),
            RewardLevel::Modest => (2, 3),
            RewardLevel::Substantial => (4, 5),
            RewardLevel::Bountiful => (6, 7),
            RewardLevel::Legendary => (8, 9),
        }
    }
}

/// One banded reading of the expedition screen plus the pet going out.
///
/// Out of range readings are clamped into the game's domains before
/// any formula sees them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerInputs {
    pub risk_level: RiskLevel,
    pub difficulty_level: DifficultyLevel,
    pub reward_level: RewardLevel,
    /// Reward index deduced from the ration count on screen
    pub food_index: u8,
    pub duration_minutes: u32,
    pub terrain: Terrain,
    pub pet_force: f64,
    pub pet_speed: f64,
    pub love_points: f64,
    pub talisman_bonus: bool,
}

impl Default for AnalyzerInputs {
    fn default() -> Self {
        AnalyzerInputs {
            risk_level: RiskLevel::Medium,
            difficulty_level: DifficultyLevel::Moderate,
            reward_level: RewardLevel::Substantial,
            food_index: 4,
            duration_minutes: 120,
            terrain: Terrain::Plains,
            pet_force: 5.0,
            pet_speed: 12.0,
            love_points: 100.0,
            talisman_bonus: false,
        }
    }
}

/// Forecast for one exact (danger, difficulty) pair inside the bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub risk_rate: f64,
    pub difficulty: f64,
    pub effective_risk: f64,
    pub rates: OutcomeRates,
    pub score: ProfitabilityScore,
}

/// Total success payout for the ration reading on this terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRewards {
    pub money: u32,
    pub experience: u32,
    pub points: u32,
}

impl AnalyzedRewards {
    /// Partial success pays half, rounded to the nearest unit
    pub fn partial(&self) -> AnalyzedRewards {
        AnalyzedRewards {
            money: (self.money as f64 / 2.0).round() as u32,
            experience: (self.experience as f64 / 2.0).round() as u32,
            points: (self.points as f64 / 2.0).round() as u32,
        }
    }
}

/// Coherence checks between the independent screen readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Ration count sits inside the selected reward category
    pub food_matches_reward_band: bool,
    pub duration_score: f64,
    pub risk_score: f64,
    pub difficulty_score: f64,
    /// Index rebuilt from duration/danger/difficulty at neutral wealth
    pub estimated_index: u8,
    /// Rebuilt index lands within 2 of the ration reading
    pub estimate_matches_food: bool,
}

/// Full analysis of a banded expedition reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionAnalysis {
    pub food_index: u8,
    pub duration_minutes: u32,
    pub speed_modifier: f64,
    pub effective_duration: u32,
    pub best: Scenario,
    pub average: Scenario,
    pub worst: Scenario,
    pub rewards: AnalyzedRewards,
    pub rarity_range: RarityRange,
    pub base_talisman_chance: f64,
    pub bonus_talisman_chance: f64,
    pub consistency: ConsistencyReport,
}

/// Analyze a banded reading into three scenarios with scores.
///
/// The best case takes both bands at their minimum, the worst at their
/// maximum, and the average at their midpoints. Token estimates need
/// the hidden wealth rate, so scenario scores count tokens as zero.
pub fn analyze_expedition(inputs: &AnalyzerInputs) -> ExpeditionAnalysis {
    let food_index = inputs.food_index.min(9);
    let duration_minutes = inputs
        .duration_minutes
        .clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES);
    let love_points = inputs.love_points.clamp(0.0, MAX_LOVE_POINTS);

    let (risk_min, risk_max) = inputs.risk_level.range();
    let (diff_min, diff_max) = inputs.difficulty_level.range();

    let speed_modifier = speed_duration_modifier(inputs.pet_speed);
    let effective_minutes = effective_duration(duration_minutes, inputs.pet_speed);

    let weights = inputs.terrain.reward_weights();
    let idx = food_index as usize;
    let rewards = AnalyzedRewards {
        money: (MONEY_BY_INDEX[idx] as f64 * weights.money).round() as u32,
        experience: (EXPERIENCE_BY_INDEX[idx] as f64 * weights.experience).round() as u32,
        points: (POINTS_BY_INDEX[idx] as f64 * weights.points).round() as u32,
    };

    let base_talisman_chance = talisman_drop_chance(food_index, false);
    let bonus_talisman_chance = talisman_drop_chance(food_index, true);
    let talisman_chance = if inputs.talisman_bonus {
        bonus_talisman_chance
    } else {
        base_talisman_chance
    };

    let scenario = |risk_rate: f64, difficulty: f64| {
        let risk = effective_risk(risk_rate, difficulty, inputs.pet_force, love_points, true);
        let rates = outcome_rates(risk);
        let score = profitability_score(&ScoreInputs {
            reward_index: food_index,
            total_success_rate: rates.total_success,
            partial_success_rate: rates.partial_success,
            failure_rate: rates.failure,
            effective_duration: effective_minutes,
            expected_tokens: 0.0,
            talisman_chance,
            talisman_bonus: inputs.talisman_bonus,
            token_bonus: false,
        });
        Scenario {
            risk_rate,
            difficulty,
            effective_risk: risk,
            rates,
            score,
        }
    };

    let avg_risk = (risk_min + risk_max) / 2.0;
    let avg_difficulty = (diff_min + diff_max) / 2.0;
    let best = scenario(risk_min, diff_min);
    let average = scenario(avg_risk, avg_difficulty);
    let worst = scenario(risk_max, diff_max);

    let consistency = check_consistency(
        inputs.reward_level,
        food_index,
        duration_minutes,
        avg_risk,
        avg_difficulty,
    );

    ExpeditionAnalysis {
        food_index,
        duration_minutes,
        speed_modifier,
        effective_duration: effective_minutes,
        best,
        average,
        worst,
        rewards,
        rarity_range: item_rarity_range(food_index),
        base_talisman_chance,
        bonus_talisman_chance,
        consistency,
    }
}

/// Cross-check the ration reading against the selected reward band and
/// against an index rebuilt from duration and band midpoints at
/// neutral wealth.
fn check_consistency(
    reward_level: RewardLevel,
    food_index: u8,
    duration_minutes: u32,
    avg_risk: f64,
    avg_difficulty: f64,
) -> ConsistencyReport {
    let (reward_min, reward_max) = reward_level.range();
    let duration_score = linear_score(
        duration_minutes as f64,
        MIN_DURATION_MINUTES as f64,
        MAX_DURATION_MINUTES as f64,
    );
    let risk_score = linear_score(avg_risk, 0.0, 100.0);
    let difficulty_score = linear_score(avg_difficulty, 0.0, 100.0);
    let estimated_index = (duration_score * 3.0 + risk_score + difficulty_score)
        .round()
        .clamp(0.0, 9.0) as u8;

    ConsistencyReport {
        food_matches_reward_band: food_index >= reward_min && food_index <= reward_max,
        duration_score,
        risk_score,
        difficulty_score,
        estimated_index,
        estimate_matches_food: (estimated_index as i16 - food_index as i16).abs() <= 2,
    }
}
