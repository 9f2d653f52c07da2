//! Drug-caffeine interaction resolution.
//!
//! A deterministic lookup over the medication catalog. Entries with a
//! context variant swap in the variant message when the submitted symptoms
//! or conditions match; otherwise the category's base message applies.

use crate::catalog::get_catalog;
use crate::types::{InteractionMessage, Medication, Profile};

/// Resolve the interaction message for a single medication
pub fn resolve(medication: Medication, profile: &Profile) -> InteractionMessage {
    let entry = get_catalog().entry(medication);

    let message = match &entry.context {
        Some(ctx) if ctx.applies(&profile.symptoms, &profile.conditions) => ctx.message,
        _ => entry.base_message,
    };

    InteractionMessage {
        medication,
        message: message.to_string(),
    }
}

/// Resolve all submitted medications, preserving submission order
///
/// An empty medication set yields an empty list, not an error.
pub fn resolve_all(profile: &Profile) -> Vec<InteractionMessage> {
    profile
        .medications
        .iter()
        .map(|&medication| resolve(medication, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::sample_profile;
    use crate::types::{Condition, Symptom};

    #[test]
    fn test_empty_medication_set_yields_no_messages() {
        let profile = sample_profile();
        assert!(resolve_all(&profile).is_empty());
    }

    #[test]
    fn test_messages_preserve_submission_order() {
        let mut profile = sample_profile();
        profile.medications = vec![
            Medication::Ssri,
            Medication::Acetaminophen,
            Medication::Sedative,
        ];
        let messages = resolve_all(&profile);
        let order: Vec<Medication> = messages.iter().map(|m| m.medication).collect();
        assert_eq!(order, profile.medications);
    }

    #[test]
    fn test_nsaid_base_message_without_context() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Nsaid];
        let messages = resolve_all(&profile);
        assert!(messages[0].message.contains("empty stomach"));
    }

    #[test]
    fn test_nsaid_context_message_with_heartburn() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Nsaid];
        profile.symptoms = vec![Symptom::Heartburn];
        let messages = resolve_all(&profile);
        assert!(messages[0].message.contains("gastric acid"));
    }

    #[test]
    fn test_nsaid_context_message_with_reflux_condition() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Nsaid];
        profile.conditions = vec![Condition::GastricReflux];
        let messages = resolve_all(&profile);
        assert!(messages[0].message.contains("gastric acid"));
    }

    #[test]
    fn test_ssri_context_message_with_anxiety() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Ssri];
        profile.conditions = vec![Condition::AnxietyDisorder];
        let messages = resolve_all(&profile);
        assert!(messages[0].message.contains("elevated heart rate"));

        profile.conditions.clear();
        profile.symptoms = vec![Symptom::Anxiety];
        let messages = resolve_all(&profile);
        assert!(messages[0].message.contains("elevated heart rate"));
    }

    #[test]
    fn test_ssri_base_message_without_anxiety_context() {
        let mut profile = sample_profile();
        profile.medications = vec![Medication::Ssri];
        let messages = resolve_all(&profile);
        assert!(messages[0].message.contains("monitor"));
    }

    #[test]
    fn test_every_medication_resolves() {
        let mut profile = sample_profile();
        profile.medications = Medication::ALL.to_vec();
        let messages = resolve_all(&profile);
        assert_eq!(messages.len(), Medication::ALL.len());
        for message in &messages {
            assert!(!message.message.is_empty());
        }
    }
}
