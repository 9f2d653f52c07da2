//! Caffeine sensitivity scoring.
//!
//! An additive integer score over independent rules: consumption volume,
//! intake timing, and self-reported symptoms each contribute a fixed weight.
//! All rules are checked; none are mutually exclusive.

use crate::types::{CaffeineTime, Profile, SensitivityLevel, Symptom};

/// Cup count at or above which volume contributes to the score
pub const HIGH_VOLUME_CUPS: u8 = 4;

/// Score at or above which the user counts as very sensitive
pub const VERY_SENSITIVE_MIN: u32 = 5;

/// Score at or above which the user counts as sensitive
pub const SENSITIVE_MIN: u32 = 3;

/// Accumulate the sensitivity score for a profile
pub fn score(profile: &Profile) -> u32 {
    let mut score = 0;

    if profile.caffeine_cups_per_day >= HIGH_VOLUME_CUPS {
        score += 1;
    }
    if profile.caffeine_time == CaffeineTime::AfterThreePm {
        score += 1;
    }
    if profile.has_symptom(Symptom::Insomnia) {
        score += 2;
    }
    if profile.has_symptom(Symptom::Palpitations) {
        score += 2;
    }
    if profile.has_symptom(Symptom::Anxiety) {
        score += 1;
    }
    if profile.has_symptom(Symptom::Heartburn) {
        score += 1;
    }

    score
}

/// Map a score to its sensitivity category
pub fn level_for(score: u32) -> SensitivityLevel {
    if score >= VERY_SENSITIVE_MIN {
        SensitivityLevel::VerySensitive
    } else if score >= SENSITIVE_MIN {
        SensitivityLevel::Sensitive
    } else {
        SensitivityLevel::LowSensitivity
    }
}
