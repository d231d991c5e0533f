use companion_core::analyze::{analyze_expedition, AnalyzerInputs, DifficultyLevel, RiskLevel};
use companion_core::expedition::{
    effective_duration, effective_risk, expected_tokens, forecast, outcome_rates, reward_index,
    ExpeditionInputs,
};
use companion_core::league::{compute_reward, reward_for};
use companion_core::types::{League, Terrain};
use proptest::prelude::*;

#[test]
fn league_keys_round_trip_through_compute_reward() {
    for league in League::all() {
        assert_eq!(compute_reward(league.key(), 7), reward_for(*league, 7));
    }
}

proptest! {
    #[test]
    fn league_rewards_stay_on_the_tables(
        league_idx in 0_usize..11,
        rank in 1_u32..=300,
    ) {
        let reward = reward_for(League::all()[league_idx], rank);
        prop_assert!(reward.money > 0);
        prop_assert!(reward.experience > 0);
        prop_assert!(reward.points <= 3000);
        prop_assert_eq!(rank > 200, reward.points == 0);

        prop_assert!(reward.rarity_range.is_some());
        let (min, max) = reward.rarity_range.unwrap();
        prop_assert!(min.index() <= max.index());
        prop_assert_eq!(reward.rarities.len(), (max.index() - min.index() + 1) as usize);
    }
    #[test]
    fn outcome_rates_cover_every_ending(risk in 0.0_f64..=100.0) {
        let rates = outcome_rates(risk);
        prop_assert!(rates.total_success >= 0.0);
        prop_assert!(rates.partial_success >= 0.0);
        prop_assert!(rates.failure >= 0.0);
        let total = rates.total_success + rates.partial_success + rates.failure;
        prop_assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn effective_risk_stays_in_percent(
        risk in 0.0_f64..=100.0,
        difficulty in 0.0_f64..=100.0,
        force in 0.0_f64..=100.0,
        love in 0.0_f64..=110.0,
        has_food in proptest::bool::ANY,
    ) {
        let result = effective_risk(risk, difficulty, force, love, has_food);
        prop_assert!(result >= 0.0);
        prop_assert!(result <= 100.0);
    }

    #[test]
    fn reward_index_stays_on_the_table(
        duration in 10_u32..=4320,
        risk in 0.0_f64..=100.0,
        difficulty in 0.0_f64..=100.0,
        wealth in 0.0_f64..=2.0,
    ) {
        let index = reward_index(duration, risk, difficulty, wealth);
        prop_assert!(index <= 9);
    }

    #[test]
    fn token_estimate_is_ordered(
        index in 0_u8..=9,
        duration in 10_u32..=4320,
        bonus in proptest::bool::ANY,
    ) {
        let estimate = expected_tokens(index, duration, bonus);
        prop_assert!(estimate.min >= 1);
        prop_assert!(estimate.min <= estimate.expected);
        prop_assert!(estimate.expected <= estimate.max);
    }

    #[test]
    fn effective_duration_tracks_speed(
        duration in 10_u32..=4320,
        speed in 0.0_f64..=60.0,
    ) {
        let minutes = effective_duration(duration, speed);
        let slowest = (duration as f64 * 1.2).round() as u32;
        let fastest = (duration as f64 * 0.2).floor() as u32;
        prop_assert!(minutes <= slowest);
        prop_assert!(minutes >= fastest);
    }

    #[test]
    fn forecast_score_stays_normalized(
        terrain_idx in 0_usize..8,
        duration in 10_u32..=4320,
        risk in 0.0_f64..=100.0,
        difficulty in 0.0_f64..=100.0,
        wealth in 0.0_f64..=2.0,
        love in 0.0_f64..=110.0,
        force in 0.0_f64..=100.0,
        speed in 0.0_f64..=60.0,
        has_food in proptest::bool::ANY,
        token_bonus in proptest::bool::ANY,
        talisman_bonus in proptest::bool::ANY,
    ) {
        let inputs = ExpeditionInputs {
            has_enough_food: has_food,
            token_bonus,
            talisman_bonus,
            ..ExpeditionInputs::new(
                Terrain::all()[terrain_idx],
                duration,
                risk,
                difficulty,
                wealth,
                love,
            )
            .with_pet(force, speed)
        };
        let plan = forecast(&inputs);
        prop_assert!(plan.score.score >= 0.0);
        prop_assert!(plan.score.score <= 1.0);
        prop_assert!(plan.reward_index <= 9);
        prop_assert!(plan.effective_risk >= 0.0 && plan.effective_risk <= 100.0);
    }

    #[test]
    fn forecast_is_deterministic(
        terrain_idx in 0_usize..8,
        duration in 10_u32..=4320,
        risk in 0.0_f64..=100.0,
        difficulty in 0.0_f64..=100.0,
        wealth in 0.0_f64..=2.0,
    ) {
        let inputs = ExpeditionInputs::new(
            Terrain::all()[terrain_idx],
            duration,
            risk,
            difficulty,
            wealth,
            100.0,
        );
        prop_assert_eq!(forecast(&inputs), forecast(&inputs));
    }

    #[test]
    fn analysis_orders_scenarios_by_danger(
        risk_idx in 0_usize..5,
        difficulty_idx in 0_usize..5,
        duration in 10_u32..=4320,
        force in 0.0_f64..=50.0,
        love in 0.0_f64..=110.0,
    ) {
        let inputs = AnalyzerInputs {
            risk_level: RiskLevel::all()[risk_idx],
            difficulty_level: DifficultyLevel::all()[difficulty_idx],
            duration_minutes: duration,
            pet_force: force,
            love_points: love,
            ..AnalyzerInputs::default()
        };
        let analysis = analyze_expedition(&inputs);
        prop_assert!(analysis.best.effective_risk <= analysis.average.effective_risk);
        prop_assert!(analysis.average.effective_risk <= analysis.worst.effective_risk);
        prop_assert!(analysis.best.rates.total_success >= analysis.worst.rates.total_success);
    }
}
