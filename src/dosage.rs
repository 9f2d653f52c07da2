//! Dosage evaluation against a weight-proportional caffeine limit.
//!
//! Pure arithmetic over validated inputs: the daily limit scales linearly
//! with body weight, the estimated intake with cup count.

use crate::types::{DosageFeedback, Profile};

/// Recommended daily limit in mg per kg of body weight
pub const MG_PER_KG: f64 = 3.0;

/// Estimated caffeine content of one cup, in mg
pub const MG_PER_CUP: f64 = 90.0;

/// Fraction of the limit above which intake counts as "near limit"
pub const NEAR_LIMIT_RATIO: f64 = 0.8;

/// Weight-proportional daily caffeine limit in mg
pub fn max_caffeine_mg(weight_kg: f64) -> f64 {
    weight_kg * MG_PER_KG
}

/// Estimated daily intake in mg from cups per day
pub fn actual_caffeine_mg(cups_per_day: u8) -> f64 {
    f64::from(cups_per_day) * MG_PER_CUP
}

/// Classify estimated intake against the limit
pub fn classify(actual_mg: f64, max_mg: f64) -> DosageFeedback {
    if actual_mg > max_mg {
        DosageFeedback::Exceeded
    } else if actual_mg > max_mg * NEAR_LIMIT_RATIO {
        DosageFeedback::NearLimit
    } else {
        DosageFeedback::Appropriate
    }
}

/// Evaluate a profile's caffeine dosage: (max mg, actual mg, feedback)
pub fn evaluate(profile: &Profile) -> (f64, f64, DosageFeedback) {
    let max_mg = max_caffeine_mg(profile.weight_kg);
    let actual_mg = actual_caffeine_mg(profile.caffeine_cups_per_day);
    (max_mg, actual_mg, classify(actual_mg, max_mg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_and_intake_formulas_are_exact() {
        for weight in [30.0, 60.0, 75.5, 120.0] {
            assert_eq!(max_caffeine_mg(weight), weight * 3.0);
        }
        for cups in 0..=6u8 {
            assert_eq!(actual_caffeine_mg(cups), f64::from(cups) * 90.0);
        }
    }

    #[test]
    fn test_exceeded_when_actual_above_max() {
        // weight 60 -> max 180; 5 cups -> 450
        assert_eq!(classify(450.0, 180.0), DosageFeedback::Exceeded);
    }

    #[test]
    fn test_near_limit_band() {
        // max 360 (120kg); 3 cups -> 270; 360*0.8 = 288, so still appropriate
        assert_eq!(classify(270.0, 360.0), DosageFeedback::Appropriate);
        // 4 cups -> 360 == max: near limit, not exceeded
        assert_eq!(classify(360.0, 360.0), DosageFeedback::NearLimit);
        // just above the 0.8 threshold
        assert_eq!(classify(289.0, 360.0), DosageFeedback::NearLimit);
    }

    #[test]
    fn test_appropriate_at_or_below_threshold() {
        assert_eq!(classify(288.0, 360.0), DosageFeedback::Appropriate);
        assert_eq!(classify(0.0, 90.0), DosageFeedback::Appropriate);
    }
}
