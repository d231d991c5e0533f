//! Full pre-departure forecast for one expedition

use serde::{Deserialize, Serialize};

use crate::score::{profitability_score, ProfitabilityScore, ScoreInputs};

use super::rewards::{
    food_required, item_rarity_range, reward_index, rewards_for, talisman_drop_chance,
    ExpeditionRewards, RarityRange,
};
use super::risk::{
    effective_duration, effective_risk, outcome_rates, speed_duration_modifier, OutcomeRates,
};
use super::ExpeditionInputs;

/// Everything known about an expedition before it leaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionForecast {
    pub speed_modifier: f64,
    /// Pet-adjusted duration in minutes
    pub effective_duration: u32,
    pub reward_index: u8,
    pub food_required: u32,
    pub effective_risk: f64,
    pub rates: OutcomeRates,
    pub rewards: ExpeditionRewards,
    pub rarity_range: RarityRange,
    pub base_talisman_chance: f64,
    pub bonus_talisman_chance: f64,
    /// Base chance discounted by the odds of the total success it needs
    pub weighted_talisman_chance: f64,
    pub weighted_bonus_talisman_chance: f64,
    pub score: ProfitabilityScore,
}

/// Forecast a full expedition from its advertised parameters.
///
/// The reward index reads the advertised duration while payouts and
/// token estimates read the pet-adjusted one: a fast pet shortens the
/// trip without cheapening it.
pub fn forecast(inputs: &ExpeditionInputs) -> ExpeditionForecast {
    let speed_modifier = speed_duration_modifier(inputs.pet_speed);
    let effective_minutes = effective_duration(inputs.duration_minutes, inputs.pet_speed);

    let index = reward_index(
        inputs.duration_minutes,
        inputs.risk_rate,
        inputs.difficulty,
        inputs.wealth_rate,
    );
    let food = food_required(index);

    let risk = effective_risk(
        inputs.risk_rate,
        inputs.difficulty,
        inputs.pet_force,
        inputs.love_points,
        inputs.has_enough_food,
    );
    let rates = outcome_rates(risk);

    let rewards = rewards_for(index, inputs.terrain, effective_minutes, inputs.token_bonus);

    let base_talisman_chance = talisman_drop_chance(index, false);
    let bonus_talisman_chance = talisman_drop_chance(index, true);
    let weighted_talisman_chance = base_talisman_chance * rates.total_success / 100.0;
    let weighted_bonus_talisman_chance = bonus_talisman_chance * rates.total_success / 100.0;

    // Owning the talisman already zeroes its pull on the score
    let talisman_chance_for_score = if inputs.has_clone_talisman {
        0.0
    } else if inputs.talisman_bonus {
        bonus_talisman_chance
    } else {
        base_talisman_chance
    };

    let score = profitability_score(&ScoreInputs {
        reward_index: index,
        total_success_rate: rates.total_success,
        partial_success_rate: rates.partial_success,
        failure_rate: rates.failure,
        effective_duration: effective_minutes,
        expected_tokens: rewards.tokens.expected as f64,
        talisman_chance: talisman_chance_for_score,
        talisman_bonus: inputs.talisman_bonus,
        token_bonus: inputs.token_bonus,
    });

    ExpeditionForecast {
        speed_modifier,
        effective_duration: effective_minutes,
        reward_index: index,
        food_required: food,
        effective_risk: risk,
        rates,
        rewards,
        rarity_range: item_rarity_range(index),
        base_talisman_chance,
        bonus_talisman_chance,
        weighted_talisman_chance,
        weighted_bonus_talisman_chance,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{ScoreGrade, ScoreTag};
    use crate::types::Terrain;

    fn plains_trip() -> ExpeditionInputs {
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

    #[test]
    fn test_forecast_pipeline() {
        let result = forecast(&plains_trip());

        // Speed 12 is neutral
        assert!((result.speed_modifier - 1.0).abs() < 1e-12);
        assert_eq!(result.effective_duration, 120);

        // duration 0.23 + risk 0.9 + difficulty 1.2 = 2.33 -> index 2
        assert_eq!(result.reward_index, 2);
        assert_eq!(result.food_required, 5);

        // 30 + 40/4 - 5 - 100/10 = 25
        assert!((result.effective_risk - 25.0).abs() < 1e-9);
        assert!((result.rates.failure - 25.0).abs() < 1e-9);
        assert!((result.rates.partial_success - 18.75).abs() < 1e-9);
        assert!((result.rates.total_success - 56.25).abs() < 1e-9);

        // Plains pays the raw tables at index 2
        assert_eq!(result.rewards.money, 235);
        assert_eq!(result.rewards.experience, 350);
        assert_eq!(result.rewards.points, 75);
        // Tokens track index - 1, plus the 0..=2 boost
        assert_eq!(result.rewards.tokens.min, 1);
        assert_eq!(result.rewards.tokens.max, 3);
        assert_eq!(result.rewards.tokens.expected, 2);

        // 0.5 + 2 * 0.5 = 1.5, weighted by the 56.25% total success
        assert!((result.base_talisman_chance - 1.5).abs() < 1e-9);
        assert!((result.bonus_talisman_chance - 15.0).abs() < 1e-9);
        assert!((result.weighted_talisman_chance - 0.84375).abs() < 1e-9);
        assert!((result.weighted_bonus_talisman_chance - 8.4375).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_score_components() {
        let result = forecast(&plains_trip());

        // success 0.65625 * 0.35 + reward 0.3 * 0.35
        //   + talisman 0.084375 * 0.15 + tokens 0.25 * 0.10
        //   + time 0.075 * 0.05 = 0.37609375, no bonuses or penalty
        assert!((result.score.score - 0.37609375).abs() < 1e-9);
        assert_eq!(result.score.grade(), ScoreGrade::Poor);
        assert_eq!(result.score.issues, vec![ScoreTag::LowRewards]);
        assert!(result.score.positives.is_empty());
    }

    #[test]
    fn test_wealth_raises_the_index() {
        let inputs = ExpeditionInputs {
            wealth_rate: 2.0,
            ..plains_trip()
        };
        let result = forecast(&inputs);

        // 2.33 * (1 + 1.0 * 0.30) = 3.03 -> index 3
        assert_eq!(result.reward_index, 3);
        assert_eq!(result.food_required, 6);
        assert_eq!(result.rewards.tokens.expected, 3);
    }

    #[test]
    fn test_missing_food_triples_risk() {
        let inputs = ExpeditionInputs {
            has_enough_food: false,
            ..plains_trip()
        };
        let result = forecast(&inputs);

        // 25 * 3 = 75
        assert!((result.effective_risk - 75.0).abs() < 1e-9);
        assert!((result.rates.total_success - 6.25).abs() < 1e-9);
        assert!((result.rates.partial_success - 18.75).abs() < 1e-9);
        assert!((result.rates.failure - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_trip_token_malus_uses_effective_duration() {
        let reference = forecast(&ExpeditionInputs {
            risk_rate: 50.0,
            ..plains_trip()
        });
        assert_eq!(reference.reward_index, 3);
        assert_eq!(reference.rewards.tokens.min, 2);
        assert_eq!(reference.rewards.tokens.max, 4);

        // Same index at 50 minutes, but the under-an-hour malus bites
        let short = forecast(&ExpeditionInputs {
            risk_rate: 50.0,
            duration_minutes: 50,
            ..plains_trip()
        });
        assert_eq!(short.reward_index, 3);
        assert_eq!(short.rewards.tokens.min, 1);
        assert_eq!(short.rewards.tokens.max, 3);
        assert_eq!(short.rewards.tokens.expected, 2);
    }

    #[test]
    fn test_owned_talisman_drops_out_of_the_score() {
        let inputs = ExpeditionInputs {
            has_clone_talisman: true,
            ..plains_trip()
        };
        let result = forecast(&inputs);

        assert!((result.score.breakdown.talisman_score - 0.0).abs() < f64::EPSILON);
        // Display chances stay: the weighted columns describe the drop
        // itself, not this player's odds
        assert!((result.base_talisman_chance - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_is_deterministic() {
        let inputs = plains_trip();
        assert_eq!(forecast(&inputs), forecast(&inputs));
    }
}
