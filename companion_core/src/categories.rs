//! Display buckets for risk, difficulty, wealth and rewards
//!
//! Each bucket covers values up to its `max`, and a value past the
//! last bucket sticks to it.

use serde::{Deserialize, Serialize};

/// One display bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub max: f64,
    pub name: &'static str,
}

/// Risk bucket with its mood emoji
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBand {
    pub max: f64,
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const RISK_BANDS: [RiskBand; 8] = [
    RiskBand { max: 10.0, name: "Anodin", emoji: "😌" },
    RiskBand { max: 20.0, name: "Très faible", emoji: "🙂" },
    RiskBand { max: 32.0, name: "Faible", emoji: "😐" },
    RiskBand { max: 45.0, name: "Modéré", emoji: "🤔" },
    RiskBand { max: 58.0, name: "Élevé", emoji: "😰" },
    RiskBand { max: 72.0, name: "Très élevé", emoji: "😨" },
    RiskBand { max: 86.0, name: "Extrême", emoji: "😱" },
    RiskBand { max: 100.0, name: "Désespéré", emoji: "💀" },
];

pub const DIFFICULTY_BANDS: [Band; 5] = [
    Band { max: 20.0, name: "Aisé" },
    Band { max: 40.0, name: "Accessible" },
    Band { max: 60.0, name: "Exigeant" },
    Band { max: 80.0, name: "Ardu" },
    Band { max: 100.0, name: "Impitoyable" },
];

pub const WEALTH_BANDS: [Band; 4] = [
    Band { max: 0.5, name: "Pauvre" },
    Band { max: 1.0, name: "Modeste" },
    Band { max: 1.5, name: "Riche" },
    Band { max: 2.0, name: "Légendaire" },
];

pub const REWARD_BANDS: [Band; 5] = [
    Band { max: 1.0, name: "Maigres" },
    Band { max: 3.0, name: "Modestes" },
    Band { max: 5.0, name: "Correctes" },
    Band { max: 7.0, name: "Abondantes" },
    Band { max: 9.0, name: "Exceptionnelles" },
];

/// Name of the first band covering `value`, last band past the end
pub fn band_name(value: f64, bands: &[Band]) -> &'static str {
    bands
        .iter()
        .find(|band| value <= band.max)
        .or_else(|| bands.last())
        .map(|band| band.name)
        .unwrap_or("")
}

/// Risk band covering `value`, last band past the end
pub fn risk_band(value: f64) -> &'static RiskBand {
    RISK_BANDS
        .iter()
        .find(|band| value <= band.max)
        .unwrap_or(&RISK_BANDS[RISK_BANDS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_inclusive() {
        assert_eq!(band_name(20.0, &DIFFICULTY_BANDS), "Aisé");
        assert_eq!(band_name(20.1, &DIFFICULTY_BANDS), "Accessible");
        assert_eq!(band_name(100.0, &DIFFICULTY_BANDS), "Impitoyable");
    }

    #[test]
    fn test_values_past_the_end_stick_to_the_last_band() {
        assert_eq!(band_name(250.0, &DIFFICULTY_BANDS), "Impitoyable");
        assert_eq!(band_name(3.5, &WEALTH_BANDS), "Légendaire");
        assert_eq!(risk_band(120.0).name, "Désespéré");
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(risk_band(0.0).name, "Anodin");
        assert_eq!(risk_band(33.0).name, "Modéré");
        assert_eq!(risk_band(58.5).name, "Très élevé");
        assert_eq!(risk_band(100.0).emoji, "💀");
    }

    #[test]
    fn test_reward_bands_cover_the_index_range() {
        assert_eq!(band_name(0.0, &REWARD_BANDS), "Maigres");
        assert_eq!(band_name(4.0, &REWARD_BANDS), "Correctes");
        assert_eq!(band_name(9.0, &REWARD_BANDS), "Exceptionnelles");
    }
}
