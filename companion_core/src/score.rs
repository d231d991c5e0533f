//! Profitability score - one 0..=1 number over a whole expedition
//!
//! The score weighs five normalized components:
//! - success odds (35%), partials counting half
//! - reward index (35%)
//! - talisman chance (15%)
//! - token payout (10%)
//! - time efficiency (5%)
//!
//! then layers flat safety, sweet-spot and short-trip bonuses minus a
//! failure penalty, clamped back into [0, 1].

use serde::{Deserialize, Serialize};

const WEIGHT_SUCCESS: f64 = 0.35;
const WEIGHT_REWARDS: f64 = 0.35;
const WEIGHT_TALISMAN: f64 = 0.15;
const WEIGHT_TOKENS: f64 = 0.10;
const WEIGHT_TIME_EFFICIENCY: f64 = 0.05;

/// Reward index considered high / low for tagging
const HIGH_REWARD_INDEX: u8 = 7;
const LOW_REWARD_INDEX: u8 = 2;

/// Total success rates that tag the run as near-guaranteed or shaky
const EXCELLENT_SUCCESS_RATE: f64 = 90.0;
const POOR_SUCCESS_RATE: f64 = 50.0;

/// Effective talisman chance worth calling out, in percent
const HIGH_TALISMAN_CHANCE: f64 = 15.0;

/// Token estimate worth calling out
const HIGH_TOKENS: f64 = 6.0;

/// Expeditions past two days get flagged as very long
const VERY_LONG_DURATION: u32 = 2880;

/// Safety bonus tiers on the total success rate
const VERY_SAFE_SUCCESS_RATE: f64 = 95.0;
const SAFE_SUCCESS_RATE: f64 = 85.0;
const VERY_SAFE_BONUS: f64 = 0.05;
const SAFE_BONUS: f64 = 0.02;

/// Failure rate where the linear penalty starts, and its divisor
const HIGH_FAILURE_RATE: f64 = 40.0;
const FAILURE_PENALTY_DIVISOR: f64 = 200.0;
/// Failure rate that tags the run as probably lost
const CRITICAL_FAILURE_RATE: f64 = 60.0;

/// Sweet spot: mid reward index with solid odds
const SWEET_SPOT_MIN_INDEX: u8 = 4;
const SWEET_SPOT_MAX_INDEX: u8 = 7;
const SWEET_SPOT_MIN_SUCCESS: f64 = 70.0;
const SWEET_SPOT_BONUS: f64 = 0.05;

/// Short-trip bonus: decent index, solid odds, quick turnaround
const TIME_BONUS_MIN_INDEX: u8 = 3;
const TIME_BONUS_MIN_SUCCESS: f64 = 70.0;
const VERY_SHORT_DURATION: u32 = 15;
const SHORT_DURATION: u32 = 60;
const VERY_SHORT_EFFICIENT_BONUS: f64 = 0.08;
const SHORT_EFFICIENT_BONUS: f64 = 0.05;

/// Bonus expeditions inflate their sub-score, capped at 1
const TALISMAN_BONUS_SCORE_MULTIPLIER: f64 = 2.0;
const TOKEN_BONUS_SCORE_MULTIPLIER: f64 = 1.5;

/// Best imaginable pace: index 9 done in half an hour
const MAX_REWARD_PER_HOUR: f64 = 10.0 / 0.5;

/// Inputs to the profitability score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub reward_index: u8,
    pub total_success_rate: f64,
    pub partial_success_rate: f64,
    pub failure_rate: f64,
    /// Pet-adjusted duration in minutes
    pub effective_duration: u32,
    /// Expected token payout, 0 when tokens are not estimated
    pub expected_tokens: f64,
    /// Talisman drop chance in percent. Callers that already own a
    /// clone talisman pass 0 so the component drops out.
    pub talisman_chance: f64,
    pub talisman_bonus: bool,
    pub token_bonus: bool,
}

impl Default for ScoreInputs {
    fn default() -> Self {
        ScoreInputs {
            reward_index: 0,
            total_success_rate: 100.0,
            partial_success_rate: 0.0,
            failure_rate: 0.0,
            effective_duration: 60,
            expected_tokens: 0.0,
            talisman_chance: 0.0,
            talisman_bonus: false,
            token_bonus: false,
        }
    }
}

/// Notable trait of a scored expedition, shown as French text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTag {
    NearGuaranteedSuccess,
    HighFailureRisk,
    HighRewards,
    LowRewards,
    TalismanBonusActive,
    GoodTalismanChance(f64),
    TokenBonusActive,
    ManyTokens(u32),
    VeryLongExpedition,
    VeryShortEfficient,
    GoodTimeRatio,
    SweetSpot(u8),
    LikelyFailure(f64),
}

impl ScoreTag {
    /// French display text
    pub fn message(&self) -> String {
        match self {
            ScoreTag::NearGuaranteedSuccess => "Succès quasi-garanti".to_string(),
            ScoreTag::HighFailureRisk => "Risque d'échec élevé".to_string(),
            ScoreTag::HighRewards => "Récompenses élevées".to_string(),
            ScoreTag::LowRewards => "Récompenses faibles".to_string(),
            ScoreTag::TalismanBonusActive => "🧬 Bonus talisman ×10 actif !".to_string(),
            ScoreTag::GoodTalismanChance(chance) => {
                format!("Bonne chance talisman ({chance:.1}%)")
            }
            ScoreTag::TokenBonusActive => "🪙 Bonus tokens ×3 actif !".to_string(),
            ScoreTag::ManyTokens(tokens) => format!("{tokens} tokens estimés"),
            ScoreTag::VeryLongExpedition => "Expédition très longue".to_string(),
            ScoreTag::VeryShortEfficient => {
                "⚡ Très efficace (courte durée, bonnes récompenses)".to_string()
            }
            ScoreTag::GoodTimeRatio => "Bon ratio temps/récompense".to_string(),
            ScoreTag::SweetSpot(index) => format!("Zone optimale (index {index})"),
            ScoreTag::LikelyFailure(rate) => format!("Échec probable ({rate:.0}%)"),
        }
    }
}

/// Per-component contributions behind a final score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub success_score: f64,
    pub reward_score: f64,
    pub talisman_score: f64,
    pub token_score: f64,
    pub time_efficiency: f64,
    pub safety_bonus: f64,
    pub sweet_spot_bonus: f64,
    pub time_bonus: f64,
    pub failure_penalty: f64,
}

/// Verdict bucket for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
}

impl ScoreGrade {
    /// Grade for a score in [0, 1]
    pub fn for_score(score: f64) -> ScoreGrade {
        if score >= 0.8 {
            ScoreGrade::Excellent
        } else if score >= 0.6 {
            ScoreGrade::Good
        } else if score >= 0.4 {
            ScoreGrade::Fair
        } else if score >= 0.2 {
            ScoreGrade::Poor
        } else {
            ScoreGrade::Bad
        }
    }

    /// French display name
    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellente",
            ScoreGrade::Good => "Bonne",
            ScoreGrade::Fair => "Correcte",
            ScoreGrade::Poor => "Médiocre",
            ScoreGrade::Bad => "Mauvaise",
        }
    }

    /// Display emoji
    pub fn emoji(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "🌟",
            ScoreGrade::Good => "✅",
            ScoreGrade::Fair => "👍",
            ScoreGrade::Poor => "⚠️",
            ScoreGrade::Bad => "❌",
        }
    }
}

/// A scored expedition: the final number plus everything behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityScore {
    /// Final score in [0, 1]
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub positives: Vec<ScoreTag>,
    pub issues: Vec<ScoreTag>,
}

impl ProfitabilityScore {
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::for_score(self.score)
    }

    /// One-line French summary of the verdict
    pub fn explanation(&self) -> String {
        let join = |tags: &[ScoreTag]| {
            tags.iter()
                .map(ScoreTag::message)
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self.grade() {
            ScoreGrade::Excellent => {
                let positives = if self.positives.is_empty() {
                    "Excellent équilibre risque/récompense.".to_string()
                } else {
                    join(&self.positives)
                };
                format!("Expédition optimale ! {positives}")
            }
            ScoreGrade::Good => {
                let lead = self
                    .positives
                    .first()
                    .map(ScoreTag::message)
                    .unwrap_or_else(|| "Équilibre correct.".to_string());
                let warning = self
                    .issues
                    .first()
                    .map(|tag| format!(" Attention : {}.", tag.message().to_lowercase()))
                    .unwrap_or_default();
                format!("Bon choix. {lead}{warning}")
            }
            ScoreGrade::Fair => {
                let issues = if self.issues.is_empty() {
                    "Ratio risque/récompense moyen".to_string()
                } else {
                    join(&self.issues)
                };
                format!("Acceptable mais perfectible. {issues}.")
            }
            ScoreGrade::Poor => {
                let issues = if self.issues.is_empty() {
                    "Mauvais ratio risque/récompense".to_string()
                } else {
                    join(&self.issues)
                };
                format!("Déconseillée. {issues}.")
            }
            ScoreGrade::Bad => {
                let issues = if self.issues.is_empty() {
                    "Trop risqué pour les gains espérés".to_string()
                } else {
                    join(&self.issues)
                };
                format!("À éviter ! {issues}.")
            }
        }
    }
}

/// Score an expedition's overall worth.
pub fn profitability_score(inputs: &ScoreInputs) -> ProfitabilityScore {
    let mut breakdown = ScoreBreakdown::default();
    let mut positives = Vec::new();
    let mut issues = Vec::new();

    // 1. Success odds, partials worth half a total success
    let effective_success = inputs.total_success_rate + inputs.partial_success_rate * 0.5;
    breakdown.success_score = effective_success / 100.0;
    if inputs.total_success_rate >= EXCELLENT_SUCCESS_RATE {
        positives.push(ScoreTag::NearGuaranteedSuccess);
    } else if inputs.total_success_rate < POOR_SUCCESS_RATE {
        issues.push(ScoreTag::HighFailureRisk);
    }

    // 2. Reward index normalized over 0..=9
    breakdown.reward_score = (inputs.reward_index as f64 + 1.0) / 10.0;
    if inputs.reward_index >= HIGH_REWARD_INDEX {
        positives.push(ScoreTag::HighRewards);
    } else if inputs.reward_index <= LOW_REWARD_INDEX {
        issues.push(ScoreTag::LowRewards);
    }

    // 3. Talisman chance, discounted by actually landing the total
    // success. A 10% effective chance maxes the component.
    if inputs.talisman_chance > 0.0 {
        let effective_chance = inputs.talisman_chance * inputs.total_success_rate / 100.0;
        breakdown.talisman_score = (effective_chance / 10.0).min(1.0);
        if inputs.talisman_bonus {
            breakdown.talisman_score =
                (breakdown.talisman_score * TALISMAN_BONUS_SCORE_MULTIPLIER).min(1.0);
            positives.push(ScoreTag::TalismanBonusActive);
        }
        if effective_chance >= HIGH_TALISMAN_CHANCE {
            positives.push(ScoreTag::GoodTalismanChance(effective_chance));
        }
    }

    // 4. Tokens, 8 expected maxes the component
    breakdown.token_score = (inputs.expected_tokens / 8.0).min(1.0);
    if inputs.token_bonus {
        breakdown.token_score = (breakdown.token_score * TOKEN_BONUS_SCORE_MULTIPLIER).min(1.0);
        positives.push(ScoreTag::TokenBonusActive);
    }
    if inputs.expected_tokens >= HIGH_TOKENS {
        positives.push(ScoreTag::ManyTokens(inputs.expected_tokens.round() as u32));
    }

    // 5. Time efficiency against the best imaginable pace
    let reward_per_hour =
        (inputs.reward_index as f64 + 1.0) / (inputs.effective_duration as f64 / 60.0);
    breakdown.time_efficiency = (reward_per_hour / MAX_REWARD_PER_HOUR).min(1.0);
    if inputs.effective_duration > VERY_LONG_DURATION {
        issues.push(ScoreTag::VeryLongExpedition);
    }

    let base_score = breakdown.success_score * WEIGHT_SUCCESS
        + breakdown.reward_score * WEIGHT_REWARDS
        + breakdown.talisman_score * WEIGHT_TALISMAN
        + breakdown.token_score * WEIGHT_TOKENS
        + breakdown.time_efficiency * WEIGHT_TIME_EFFICIENCY;

    breakdown.safety_bonus = if inputs.total_success_rate > VERY_SAFE_SUCCESS_RATE {
        VERY_SAFE_BONUS
    } else if inputs.total_success_rate > SAFE_SUCCESS_RATE {
        SAFE_BONUS
    } else {
        0.0
    };

    breakdown.failure_penalty = if inputs.failure_rate > HIGH_FAILURE_RATE {
        (inputs.failure_rate - HIGH_FAILURE_RATE) / FAILURE_PENALTY_DIVISOR
    } else {
        0.0
    };

    let in_sweet_spot = inputs.reward_index >= SWEET_SPOT_MIN_INDEX
        && inputs.reward_index <= SWEET_SPOT_MAX_INDEX
        && inputs.total_success_rate > SWEET_SPOT_MIN_SUCCESS;
    breakdown.sweet_spot_bonus = if in_sweet_spot { SWEET_SPOT_BONUS } else { 0.0 };

    breakdown.time_bonus = 0.0;
    if inputs.reward_index >= TIME_BONUS_MIN_INDEX
        && inputs.total_success_rate > TIME_BONUS_MIN_SUCCESS
    {
        if inputs.effective_duration <= VERY_SHORT_DURATION {
            breakdown.time_bonus = VERY_SHORT_EFFICIENT_BONUS;
            positives.push(ScoreTag::VeryShortEfficient);
        } else if inputs.effective_duration <= SHORT_DURATION {
            breakdown.time_bonus = SHORT_EFFICIENT_BONUS;
            positives.push(ScoreTag::GoodTimeRatio);
        }
    }

    if breakdown.sweet_spot_bonus > 0.0 {
        positives.push(ScoreTag::SweetSpot(inputs.reward_index));
    }
    if inputs.failure_rate > CRITICAL_FAILURE_RATE {
        issues.push(ScoreTag::LikelyFailure(inputs.failure_rate));
    }

    let score = (base_score + breakdown.safety_bonus + breakdown.sweet_spot_bonus
        + breakdown.time_bonus
        - breakdown.failure_penalty)
        .clamp(0.0, 1.0);

    ProfitabilityScore {
        score,
        breakdown,
        positives,
        issues,
    }
}
