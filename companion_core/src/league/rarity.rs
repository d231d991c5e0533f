//! Rarity draw distribution
//!
//! Item draws roll once against a global cumulative threshold table.
//! A league only awards a window [min, max] of that table, so the
//! window is renormalized into percentages that sum to 100.

use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Cumulative roll thresholds for rarities 1 (common) through 8 (mythic)
const VALUES: [i64; 8] = [4375, 6875, 8375, 9375, 9875, 9975, 9998, 10000];

/// Top of the roll range
const MAX_VALUE: i64 = 10_000;

/// One rarity's draw chance inside a reward window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityChance {
    pub rarity: Rarity,
    /// Percentage in [0, 100]
    pub probability: f64,
}

/// Draw chances for every rarity in the window [min, max].
///
/// The window keeps each tier's share of the global table and rescales
/// it over the window's total roll range. A window starting at common
/// opens the range down to roll 0, and one ending at mythic keeps the
/// top of the range, so the percentages always total 100. Callers pass
/// tiers between common and mythic with min <= max.
pub fn distribution(min: Rarity, max: Rarity) -> Vec<RarityChance> {
    let min_idx = min.index() as usize;
    let max_idx = max.index() as usize;

    let min_value = 1 + if min_idx == 1 { -1 } else { VALUES[min_idx - 2] };
    let max_value = MAX_VALUE - if max_idx == 8 { 0 } else { MAX_VALUE - VALUES[max_idx - 1] };
    let total_range = (max_value - min_value + 1) as f64;

    let mut previous_threshold = min_value - 1;
    let mut chances = Vec::with_capacity(max_idx - min_idx + 1);
    for idx in min_idx..=max_idx {
        let threshold = VALUES[idx - 1];
        let probability = (threshold - previous_threshold) as f64 / total_range * 100.0;
        if let Some(rarity) = Rarity::from_index(idx as u8) {
            chances.push(RarityChance {
                rarity,
                probability,
            });
        }
        previous_threshold = threshold;
    }
    chances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(chances: &[RarityChance]) -> f64 {
        chances.iter().map(|c| c.probability).sum()
    }

    #[test]
    fn test_full_window_sums_to_100() {
        let chances = distribution(Rarity::Common, Rarity::Mythic);
        assert_eq!(chances.len(), 8);
        assert!((total(&chances) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_wood_window() {
        // Uncommon..exotic: range 4376..=8375, splits 62.5 / 37.5
        let chances = distribution(Rarity::Uncommon, Rarity::Exotic);
        assert_eq!(chances.len(), 2);
        assert!((chances[0].probability - 62.5).abs() < 1e-9);
        assert!((chances[1].probability - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_tier_windows_are_certain() {
        // A window of one rarity is a guaranteed draw, including the
        // open-ended bottom (common) and top (mythic) tiers
        for rarity in &[Rarity::Common, Rarity::Rare, Rarity::Mythic] {
            let chances = distribution(*rarity, *rarity);
            assert_eq!(chances.len(), 1);
            assert!((chances[0].probability - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_windows_never_produce_negative_chances() {
        for min in 1..=8u8 {
            for max in min..=8u8 {
                let chances = distribution(
                    Rarity::from_index(min).unwrap(),
                    Rarity::from_index(max).unwrap(),
                );
                assert_eq!(chances.len(), (max - min + 1) as usize);
                for chance in &chances {
                    assert!(chance.probability > 0.0);
                }
                assert!((total(&chances) - 100.0).abs() < 1e-6);
            }
        }
    }
}
