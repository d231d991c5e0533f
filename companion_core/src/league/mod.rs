//! League reward system - weekly ladder payouts
//!
//! A weekly finish (league + final rank) converts into money,
//! experience, bonus points and an item rarity draw window.

mod rarity;

pub use rarity::{distribution, RarityChance};

use crate::types::{League, Rarity};
use serde::{Deserialize, Serialize};

/// League reward constants
pub mod constants {
    /// Last rank that still pays bonus points
    pub const MAX_RANK_FOR_POINTS: u32 = 200;
}

/// Fixed payout row for one league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTier {
    pub money: u32,
    pub experience: u32,
    pub min_rarity: Rarity,
    pub max_rarity: Rarity,
}

/// Payout row for a league
pub fn tier_for(league: League) -> LeagueTier {
    let (money, experience, min_rarity, max_rarity) = match league {
        League::Wood => (250, 200, Rarity::Uncommon, Rarity::Exotic),
        League::Rock => (300, 350, Rarity::Uncommon, Rarity::Rare),
        League::Iron => (500, 500, Rarity::Exotic, Rarity::Rare),
        League::Bronze => (600, 650, Rarity::Exotic, Rarity::Special),
        League::Silver => (800, 750, Rarity::Exotic, Rarity::Epic),
        League::Gold => (1000, 1000, Rarity::Rare, Rarity::Epic),
        League::Diamond => (1300, 1300, Rarity::Rare, Rarity::Legendary),
        League::Elite => (1500, 1450, Rarity::Rare, Rarity::Mythic),
        League::Infinite => (1700, 1750, Rarity::Special, Rarity::Mythic),
        League::Legendary => (2000, 2000, Rarity::Special, Rarity::Mythic),
        League::Royal => (2025, 2050, Rarity::Special, Rarity::Mythic),
    };
    LeagueTier {
        money,
        experience,
        min_rarity,
        max_rarity,
    }
}

/// Bonus points for a final rank.
///
/// Formula: ceil((2995 - sqrt(80000 * (rank - 1)) + 5 * rank) / 10) * 10
///
/// Rank 1 pays 3000 and the curve fades to 10 at rank 200. Ranks past
/// 200 pay nothing.
pub fn bonus_points(rank: u32) -> u32 {
    if rank == 0 || rank > constants::MAX_RANK_FOR_POINTS {
        return 0;
    }
    let falloff = (80_000.0 * (rank - 1) as f64).sqrt();
    let raw = (2995.0 - falloff + 5.0 * rank as f64) / 10.0;
    (raw.ceil() as u32) * 10
}

/// Badge shown next to a final rank
pub fn rank_category(rank: u32) -> &'static str {
    match rank {
        1 => "🥇 Champion",
        2..=3 => "🥈 Podium",
        4..=10 => "🌟 Top 10",
        11..=25 => "⭐ Top 25",
        26..=50 => "✨ Top 50",
        51..=100 => "💫 Top 100",
        101..=200 => "📊 Top 200",
        _ => "📊 Classé",
    }
}

/// Everything a weekly league finish pays out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueReward {
    pub money: u32,
    pub experience: u32,
    pub points: u32,
    /// Item draw window, absent for unknown leagues
    pub rarity_range: Option<(Rarity, Rarity)>,
    pub rarities: Vec<RarityChance>,
}

impl LeagueReward {
    /// Empty payout, returned for league keys the tables do not know
    pub fn zeroed() -> Self {
        LeagueReward {
            money: 0,
            experience: 0,
            points: 0,
            rarity_range: None,
            rarities: Vec::new(),
        }
    }
}

/// Full weekly payout for a league finish
pub fn reward_for(league: League, rank: u32) -> LeagueReward {
    let tier = tier_for(league);
    LeagueReward {
        money: tier.money,
        experience: tier.experience,
        points: bonus_points(rank),
        rarity_range: Some((tier.min_rarity, tier.max_rarity)),
        rarities: distribution(tier.min_rarity, tier.max_rarity),
    }
}

/// Same payout, keyed by the string league identifier found in saved
/// data. Unknown keys produce a zeroed payout rather than an error.
pub fn compute_reward(league_key: &str, rank: u32) -> LeagueReward {
    match League::from_key(league_key) {
        Some(league) => reward_for(league, rank),
        None => LeagueReward::zeroed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_points_endpoints() {
        // rank 1: ceil((2995 - 0 + 5) / 10) * 10 = 3000
        assert_eq!(bonus_points(1), 3000);
        // rank 200: ceil((2995 - 3989.99 + 1000) / 10) * 10 = 10
        assert_eq!(bonus_points(200), 10);
        assert_eq!(bonus_points(201), 0);
        assert_eq!(bonus_points(100_000), 0);
    }

    #[test]
    fn test_bonus_points_never_increase_with_rank() {
        let mut previous = bonus_points(1);
        for rank in 2..=200 {
            let points = bonus_points(rank);
            assert!(points <= previous, "rank {rank} pays more than rank {}", rank - 1);
            previous = points;
        }
    }

    #[test]
    fn test_gold_league_rank_50() {
        let reward = compute_reward("gold", 50);
        assert_eq!(reward.money, 1000);
        assert_eq!(reward.experience, 1000);
        // rank 50: ceil((2995 - 1979.90 + 250) / 10) * 10 = 1270
        assert_eq!(reward.points, 1270);
        assert_eq!(reward.rarity_range, Some((Rarity::Rare, Rarity::Epic)));

        // Gold draws rare/special/epic at 62.5 / 31.25 / 6.25
        assert_eq!(reward.rarities.len(), 3);
        assert_eq!(reward.rarities[0].rarity, Rarity::Rare);
        assert!((reward.rarities[0].probability - 62.5).abs() < 1e-9);
        assert!((reward.rarities[1].probability - 31.25).abs() < 1e-9);
        assert!((reward.rarities[2].probability - 6.25).abs() < 1e-9);

        let total: f64 = reward.rarities.iter().map(|r| r.probability).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_league_pays_nothing() {
        let reward = compute_reward("obsidian", 1);
        assert_eq!(reward.money, 0);
        assert_eq!(reward.experience, 0);
        assert_eq!(reward.points, 0);
        assert_eq!(reward.rarity_range, None);
        assert!(reward.rarities.is_empty());
    }

    #[test]
    fn test_rank_category_boundaries() {
        assert_eq!(rank_category(1), "🥇 Champion");
        assert_eq!(rank_category(3), "🥈 Podium");
        assert_eq!(rank_category(4), "🌟 Top 10");
        assert_eq!(rank_category(25), "⭐ Top 25");
        assert_eq!(rank_category(50), "✨ Top 50");
        assert_eq!(rank_category(100), "💫 Top 100");
        assert_eq!(rank_category(200), "📊 Top 200");
        assert_eq!(rank_category(201), "📊 Classé");
    }

    #[test]
    fn test_every_league_distribution_sums_to_100() {
        for league in League::all() {
            let reward = reward_for(*league, 10);
            let total: f64 = reward.rarities.iter().map(|r| r.probability).sum();
            assert!(
                (total - 100.0).abs() < 1e-6,
                "{} sums to {total}",
                league.key()
            );
        }
    }
}
