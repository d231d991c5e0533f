//! companion_core - Calculation library for the pet companion toolset
//!
//! This library provides:
//! - League rewards: tier lookup, rank bonuses and rarity distributions
//! - Expedition forecasting: reward index, outcome rates and payouts
//! - Profitability scoring: one weighted score with grade and tags
//! - Scenario analysis: best/average/worst cases from banded readings
//! - Offer generation and random resolution for simulated runs

pub mod analyze;
pub mod categories;
pub mod duration;
pub mod expedition;
pub mod league;
pub mod score;
pub mod types;

// Re-export core types for convenience
pub use analyze::{
    analyze_expedition, AnalyzerInputs, DifficultyLevel, ExpeditionAnalysis, RewardLevel,
    RiskLevel,
};
pub use duration::{format_duration, parse_duration};
pub use expedition::{
    forecast, resolve_expedition, ExpeditionForecast, ExpeditionInputs, ResolvedExpedition,
};
pub use league::{compute_reward, reward_for, LeagueReward};
pub use score::{profitability_score, ProfitabilityScore, ScoreGrade, ScoreTag};
pub use types::{ExpeditionOutcome, League, Rarity, Terrain, TerrainAffinity};
