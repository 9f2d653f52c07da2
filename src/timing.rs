//! Timing interactions between medication schedule and caffeine intake.
//!
//! Two rule sets share the same (medication, medication time, caffeine time)
//! table shape:
//! - the analyzer emits one warning per medication whose exact combination
//!   is listed, in submission order;
//! - the advisor returns the first matching safe-timing suggestion, or a
//!   default when nothing matches.

use crate::types::{CaffeineTime, Medication, MedicationTime, Profile};

/// Suggestion used when no medication restricts caffeine timing
pub const NO_RESTRICTION: &str =
    "No special restriction on caffeine timing with the current medications.";

/// Analyze timing conflicts between the medication schedule and caffeine
///
/// Only the exact combinations in the fixed table fire. Empty medication
/// set yields an empty warning list.
pub fn timing_warnings(profile: &Profile) -> Vec<String> {
    let mut warnings = Vec::new();

    for &medication in &profile.medications {
        match medication {
            Medication::Sedative => {
                if profile.medication_time == MedicationTime::BeforeBed
                    && profile.caffeine_time == CaffeineTime::AfterThreePm
                {
                    warnings.push(
                        "You take a sedative before bed, so caffeine late in the \
                         afternoon can interfere with sleep."
                            .to_string(),
                    );
                }
            }
            Medication::Antihistamine => {
                if matches!(
                    profile.medication_time,
                    MedicationTime::Evening | MedicationTime::BeforeBed
                ) && profile.caffeine_time == CaffeineTime::AfterThreePm
                {
                    warnings.push(
                        "Evening antihistamine use and late caffeine intake can \
                         work against each other."
                            .to_string(),
                    );
                }
            }
            Medication::AcidSuppressant => {
                if profile.medication_time == MedicationTime::Morning
                    && profile.caffeine_time == CaffeineTime::Morning
                {
                    warnings.push(
                        "Caffeine on an empty stomach can weaken the effect of \
                         your acid suppressant."
                            .to_string(),
                    );
                }
            }
            _ => {}
        }
    }

    warnings
}

/// Suggest a safe caffeine window given the medication schedule
///
/// First matching rule wins; the rule list is priority-ordered.
pub fn safe_time_suggestion(profile: &Profile) -> String {
    for &medication in &profile.medications {
        match medication {
            Medication::Sedative if profile.medication_time == MedicationTime::BeforeBed => {
                return "Caffeine is best taken in the morning or before lunch.".to_string();
            }
            Medication::Antihistamine
                if matches!(
                    profile.medication_time,
                    MedicationTime::Evening | MedicationTime::BeforeBed
                ) =>
            {
                return "Prefer the morning hours for caffeine where possible.".to_string();
            }
            Medication::AcidSuppressant if profile.medication_time == MedicationTime::Morning => {
                return "Avoid caffeine on an empty stomach in the morning; after lunch \
                        is a better window."
                    .to_string();
            }
            _ => {}
        }
    }

    NO_RESTRICTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::sample_profile;

    #[test]
    fn test_empty_medications_mean_no_warnings_and_default_suggestion() {
        let profile = sample_profile();
        assert!(timing_warnings(&profile).is_empty());
        assert_eq!(safe_time_suggestion(&profile), NO_RESTRICTION);
    }

    #[test]
    fn test_sedative_before_bed_with_late_caffeine_fires() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Sedative];
        profile.medication_time = MedicationTime::BeforeBed;
        profile.caffeine_time = CaffeineTime::AfterThreePm;

        let warnings = timing_warnings(&profile);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("sleep"));
        assert!(safe_time_suggestion(&profile).contains("before lunch"));
    }

    #[test]
    fn test_sedative_rule_needs_exact_combination() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Sedative];
        profile.medication_time = MedicationTime::Morning;
        profile.caffeine_time = CaffeineTime::AfterThreePm;
        assert!(timing_warnings(&profile).is_empty());
        assert_eq!(safe_time_suggestion(&profile), NO_RESTRICTION);
    }

    #[test]
    fn test_antihistamine_fires_for_evening_and_before_bed() {
        for time in [MedicationTime::Evening, MedicationTime::BeforeBed] {
            let mut profile = sample_profile();
            profile.medications = vec![Medication::Antihistamine];
            profile.medication_time = time;
            profile.caffeine_time = CaffeineTime::AfterThreePm;
            assert_eq!(timing_warnings(&profile).len(), 1);
            assert!(safe_time_suggestion(&profile).contains("morning hours"));
        }
    }

    #[test]
    fn test_acid_suppressant_morning_overlap_fires() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::AcidSuppressant];
        profile.medication_time = MedicationTime::Morning;
        profile.caffeine_time = CaffeineTime::Morning;

        let warnings = timing_warnings(&profile);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("acid suppressant"));
        assert!(safe_time_suggestion(&profile).contains("after lunch"));
    }

    #[test]
    fn test_multiple_medications_contribute_independent_warnings() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Sedative, Medication::Antihistamine];
        profile.medication_time = MedicationTime::BeforeBed;
        profile.caffeine_time = CaffeineTime::AfterThreePm;

        assert_eq!(timing_warnings(&profile).len(), 2);
    }

    #[test]
    fn test_suggestion_is_first_match_not_union() {
        // Sedative listed first wins even though the antihistamine rule
        // would also match.
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Sedative, Medication::Antihistamine];
        profile.medication_time = MedicationTime::BeforeBed;

        let suggestion = safe_time_suggestion(&profile);
        assert!(suggestion.contains("before lunch"));
    }

    #[test]
    fn test_unrelated_medications_never_fire() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Acetaminophen, Medication::Ssri];
        profile.medication_time = MedicationTime::BeforeBed;
        profile.caffeine_time = CaffeineTime::AfterThreePm;
        assert!(timing_warnings(&profile).is_empty());
        assert_eq!(safe_time_suggestion(&profile), NO_RESTRICTION);
    }
}
