//! Fixed medication catalog with interaction message tables.
//!
//! Each catalog entry carries the display label used on the form and in the
//! report, a base interaction message, and optionally a context variant that
//! replaces the base message when a specific symptom or condition is present.

use crate::types::{Condition, Medication, Symptom};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached catalog - built once and reused across all analyses
static CATALOG: Lazy<Catalog> = Lazy::new(build_catalog_internal);

/// Get a reference to the cached medication catalog
pub fn get_catalog() -> &'static Catalog {
    &CATALOG
}

/// Builds a fresh catalog
///
/// **Note**: For production use, prefer `get_catalog()` which returns a
/// cached reference. This function is retained for testing.
pub fn build_catalog() -> Catalog {
    build_catalog_internal()
}

/// Context rule selecting an alternative message when the submitted
/// symptoms or conditions match
#[derive(Clone, Debug)]
pub struct ContextVariant {
    pub symptom: Option<Symptom>,
    pub condition: Option<Condition>,
    pub message: &'static str,
}

impl ContextVariant {
    /// True when the submitted symptom/condition sets trigger this variant
    pub fn applies(&self, symptoms: &[Symptom], conditions: &[Condition]) -> bool {
        let symptom_hit = self.symptom.map_or(false, |s| symptoms.contains(&s));
        let condition_hit = self.condition.map_or(false, |c| conditions.contains(&c));
        symptom_hit || condition_hit
    }
}

/// One entry in the medication catalog
#[derive(Clone, Debug)]
pub struct MedicationEntry {
    pub label: &'static str,
    pub base_message: &'static str,
    pub context: Option<ContextVariant>,
}

/// The complete medication catalog
#[derive(Clone, Debug)]
pub struct Catalog {
    pub medications: HashMap<Medication, MedicationEntry>,
}

fn build_catalog_internal() -> Catalog {
    let mut medications = HashMap::new();

    medications.insert(
        Medication::Acetaminophen,
        MedicationEntry {
            label: "Acetaminophen (e.g. Tylenol)",
            base_message: "Analgesic-antipyretics have no direct interaction with caffeine, \
                but their hepatic metabolic pathways partly overlap, so avoid combining \
                high doses of both.",
            context: None,
        },
    );

    medications.insert(
        Medication::Nsaid,
        MedicationEntry {
            label: "Ibuprofen / dexibuprofen (NSAIDs)",
            base_message: "Possible stomach irritation when taken on an empty stomach.",
            context: Some(ContextVariant {
                symptom: Some(Symptom::Heartburn),
                condition: Some(Condition::GastricReflux),
                message: "NSAIDs irritate the stomach lining and caffeine stimulates \
                    gastric acid, so the combined load on the digestive tract can increase.",
            }),
        },
    );

    medications.insert(
        Medication::Antihistamine,
        MedicationEntry {
            label: "Antihistamines (cetirizine, loratadine, chlorpheniramine, fexofenadine)",
            base_message: "Antihistamines cause drowsiness while caffeine is alerting, \
                so sleep disruption is possible.",
            context: None,
        },
    );

    medications.insert(
        Medication::Sedative,
        MedicationEntry {
            label: "Sedatives / hypnotics (lorazepam, diazepam, zolpidem)",
            base_message: "Caffeine can blunt the effect of sedatives. Take particular \
                care when the medication is taken before bed.",
            context: None,
        },
    );

    medications.insert(
        Medication::AcidSuppressant,
        MedicationEntry {
            label: "Gastric acid suppressants (omeprazole, esomeprazole and other PPIs)",
            base_message: "Large amounts of caffeine while on an acid suppressant can \
                cause gastrointestinal discomfort.",
            context: None,
        },
    );

    medications.insert(
        Medication::Ssri,
        MedicationEntry {
            label: "SSRI antidepressants (fluoxetine, escitalopram, sertraline)",
            base_message: "Caffeine can affect mood and sleep, so monitor closely while \
                taking an SSRI.",
            context: Some(ContextVariant {
                symptom: Some(Symptom::Anxiety),
                condition: Some(Condition::AnxietyDisorder),
                message: "SSRI users may experience anxiety and an elevated heart rate \
                    with heavy caffeine intake.",
            }),
        },
    );

    Catalog { medications }
}

impl Catalog {
    pub fn entry(&self, medication: Medication) -> &MedicationEntry {
        // Coverage of all variants is asserted by validate() and tests
        &self.medications[&medication]
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for medication in Medication::ALL {
            match self.medications.get(&medication) {
                None => errors.push(format!("No catalog entry for {:?}", medication)),
                Some(entry) => {
                    if entry.label.is_empty() {
                        errors.push(format!("{:?} has an empty label", medication));
                    }
                    if entry.base_message.is_empty() {
                        errors.push(format!("{:?} has an empty base message", medication));
                    }
                    if let Some(ctx) = &entry.context {
                        if ctx.message.is_empty() {
                            errors.push(format!("{:?} has an empty context message", medication));
                        }
                        if ctx.symptom.is_none() && ctx.condition.is_none() {
                            errors.push(format!(
                                "{:?} context variant has no trigger",
                                medication
                            ));
                        }
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_medications() {
        let catalog = build_catalog();
        assert_eq!(catalog.medications.len(), Medication::ALL.len());
        for medication in Medication::ALL {
            assert!(catalog.medications.contains_key(&medication));
        }
    }

    #[test]
    fn test_catalog_validates() {
        let catalog = build_catalog();
        let errors = catalog.validate();
        assert!(errors.is_empty(), "catalog validation errors: {:?}", errors);
    }

    #[test]
    fn test_context_variant_triggers_on_symptom_or_condition() {
        let catalog = build_catalog();
        let ctx = catalog
            .entry(Medication::Nsaid)
            .context
            .as_ref()
            .expect("NSAID entry carries a context variant");

        assert!(ctx.applies(&[Symptom::Heartburn], &[]));
        assert!(ctx.applies(&[], &[Condition::GastricReflux]));
        assert!(!ctx.applies(&[Symptom::Anxiety], &[Condition::Hypertension]));
        assert!(!ctx.applies(&[], &[]));
    }

    #[test]
    fn test_only_nsaid_and_ssri_have_context_variants() {
        let catalog = build_catalog();
        for medication in Medication::ALL {
            let has_context = catalog.entry(medication).context.is_some();
            let expected = matches!(medication, Medication::Nsaid | Medication::Ssri);
            assert_eq!(has_context, expected, "{:?}", medication);
        }
    }
}
