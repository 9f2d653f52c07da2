//! Analysis engine assembling the full result bundle.
//!
//! A single pure entry point runs all rule components over a validated
//! profile and aggregates their output. Given the same profile it returns
//! an identical bundle every time; nothing is cached or accumulated.

use crate::types::{Profile, ResultBundle};
use crate::{dosage, interactions, recommend, sensitivity, timing};

/// Run the full rule evaluation for one submission
///
/// The caller guarantees the profile is validated and normalized; the
/// engine performs no IO and keeps no state, so recompute-on-resubmit is
/// just another call.
pub fn analyze(profile: &Profile) -> ResultBundle {
    let (max_caffeine_mg, actual_caffeine_mg, dosage_feedback) = dosage::evaluate(profile);

    let sensitivity_score = sensitivity::score(profile);
    let sensitivity_level = sensitivity::level_for(sensitivity_score);

    let drug_interactions = interactions::resolve_all(profile);
    let timing_warnings = timing::timing_warnings(profile);
    let safe_time_suggestion = timing::safe_time_suggestion(profile);
    let recommendations = recommend::recommendations(profile);

    tracing::info!(
        score = sensitivity_score,
        level = ?sensitivity_level,
        feedback = ?dosage_feedback,
        medications = drug_interactions.len(),
        "analysis complete"
    );

    ResultBundle {
        max_caffeine_mg,
        actual_caffeine_mg,
        dosage_feedback,
        sensitivity_score,
        sensitivity_level,
        drug_interactions,
        timing_warnings,
        safe_time_suggestion,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::DEFAULT_RECOMMENDATION;
    use crate::timing::NO_RESTRICTION;
    use crate::types::tests::sample_profile;
    use crate::types::{
        CaffeineTime, DosageFeedback, Medication, MedicationTime, SensitivityLevel, Symptom,
    };

    #[test]
    fn test_heavy_intake_scenario() {
        // weight 60, 5 cups: max 180, actual 450, exceeded;
        // insomnia + palpitations + volume = 5 -> very sensitive
        let mut profile = sample_profile();
        profile.weight_kg = 60.0;
        profile.caffeine_cups_per_day = 5;
        profile.symptoms = vec![Symptom::Insomnia, Symptom::Palpitations];

        let bundle = analyze(&profile);
        assert_eq!(bundle.max_caffeine_mg, 180.0);
        assert_eq!(bundle.actual_caffeine_mg, 450.0);
        assert_eq!(bundle.dosage_feedback, DosageFeedback::Exceeded);
        assert_eq!(bundle.sensitivity_score, 5);
        assert_eq!(bundle.sensitivity_level, SensitivityLevel::VerySensitive);
    }

    #[test]
    fn test_sedative_timing_scenario() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Sedative];
        profile.medication_time = MedicationTime::BeforeBed;
        profile.caffeine_time = CaffeineTime::AfterThreePm;

        let bundle = analyze(&profile);
        assert_eq!(bundle.timing_warnings.len(), 1);
        assert!(bundle.safe_time_suggestion.contains("before lunch"));
    }

    #[test]
    fn test_no_medication_nominal_scenario() {
        let profile = sample_profile();
        let bundle = analyze(&profile);

        assert!(bundle.drug_interactions.is_empty());
        assert!(bundle.timing_warnings.is_empty());
        assert_eq!(bundle.safe_time_suggestion, NO_RESTRICTION);
        assert_eq!(
            bundle.recommendations,
            vec![DEFAULT_RECOMMENDATION.to_string()]
        );
    }

    #[test]
    fn test_no_medication_but_condition_still_recommends() {
        let mut profile = sample_profile();
        profile.conditions = vec![crate::types::Condition::Hypertension];

        let bundle = analyze(&profile);
        assert!(bundle.drug_interactions.is_empty());
        assert_eq!(bundle.recommendations.len(), 1);
        assert!(bundle.recommendations[0].contains("blood pressure"));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Nsaid, Medication::Ssri];
        profile.symptoms = vec![Symptom::Heartburn, Symptom::Anxiety];
        profile.caffeine_cups_per_day = 4;
        profile.caffeine_time = CaffeineTime::AfterThreePm;

        let first = analyze(&profile);
        let second = analyze(&profile);
        assert_eq!(first, second);
    }
}
