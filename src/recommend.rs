//! Lifestyle recommendations derived from consumption and health context.
//!
//! Every advisory trigger is evaluated independently; each one that fires
//! appends its fixed message in declaration order. The list is never empty.

use crate::sensitivity::HIGH_VOLUME_CUPS;
use crate::types::{CaffeineTime, Condition, Medication, Profile};

/// Message used when no advisory trigger fires
pub const DEFAULT_RECOMMENDATION: &str = "Your current caffeine habits look reasonable.";

/// Generate the lifestyle recommendation list for a profile
pub fn recommendations(profile: &Profile) -> Vec<String> {
    let mut tips = Vec::new();

    if profile.caffeine_cups_per_day >= HIGH_VOLUME_CUPS {
        tips.push(
            "Cut back on caffeine at four or more cups a day; herbal or barley tea \
             make good substitutes."
                .to_string(),
        );
    }

    if profile.takes(Medication::Sedative) && profile.caffeine_time == CaffeineTime::AfterThreePm {
        tips.push("Sedative users should avoid caffeine late in the afternoon.".to_string());
    }

    if profile.has_condition(Condition::AnxietyDisorder) {
        tips.push("With an anxiety disorder, caffeine can make symptoms worse.".to_string());
    }

    if profile.has_condition(Condition::GastricReflux) {
        tips.push(
            "With a gastric condition, consider switching to low-caffeine drinks.".to_string(),
        );
    }

    if profile.has_condition(Condition::Hypertension) {
        tips.push("Caffeine can temporarily raise blood pressure.".to_string());
    }

    if tips.is_empty() {
        tips.push(DEFAULT_RECOMMENDATION.to_string());
    }

    tips
}
