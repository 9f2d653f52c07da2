//! Core domain types for the caffeine screening system.
//!
//! This module defines the fundamental types used throughout the system:
//! - The submitted user profile and its closed enumerations
//! - Medication, symptom, and condition catalogs as explicit enums
//! - The result bundle produced by the rule engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Biological sex as captured by the intake form
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Medication categories from the fixed intake catalog
///
/// Categories are mutually exclusive by construction; each submitted
/// medication is exactly one of these. Free-text matching from the intake
/// form is the UI collaborator's job.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Medication {
    Acetaminophen,
    Nsaid,
    Antihistamine,
    Sedative,
    AcidSuppressant,
    Ssri,
}

impl Medication {
    /// All catalog entries, in intake-form declaration order
    pub const ALL: [Medication; 6] = [
        Medication::Acetaminophen,
        Medication::Nsaid,
        Medication::Antihistamine,
        Medication::Sedative,
        Medication::AcidSuppressant,
        Medication::Ssri,
    ];
}

/// Time of day the user mainly takes their medications
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MedicationTime {
    Morning,
    Afternoon,
    Evening,
    BeforeBed,
}

impl MedicationTime {
    pub fn label(&self) -> &'static str {
        match self {
            MedicationTime::Morning => "morning",
            MedicationTime::Afternoon => "afternoon",
            MedicationTime::Evening => "evening",
            MedicationTime::BeforeBed => "before bed",
        }
    }
}

/// Time window of the user's main caffeine intake
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineTime {
    Morning,
    BeforeThreePm,
    AfterThreePm,
}

impl CaffeineTime {
    pub fn label(&self) -> &'static str {
        match self {
            CaffeineTime::Morning => "morning",
            CaffeineTime::BeforeThreePm => "before 3 pm",
            CaffeineTime::AfterThreePm => "after 3 pm",
        }
    }
}

/// Self-reported symptoms experienced after caffeine intake
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Palpitations,
    Insomnia,
    Heartburn,
    Anxiety,
    None,
}

impl Symptom {
    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Palpitations => "palpitations",
            Symptom::Insomnia => "insomnia",
            Symptom::Heartburn => "heartburn",
            Symptom::Anxiety => "anxiety",
            Symptom::None => "none",
        }
    }
}

/// Diagnosed conditions relevant to caffeine handling
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    AnxietyDisorder,
    GastricReflux,
    LiverDisease,
    Hypertension,
    None,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::AnxietyDisorder => "anxiety disorder",
            Condition::GastricReflux => "gastritis / reflux disease",
            Condition::LiverDisease => "liver disease",
            Condition::Hypertension => "hypertension",
            Condition::None => "none",
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Declared bounds for numeric profile fields
pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 15..=80;
pub const WEIGHT_RANGE: std::ops::RangeInclusive<f64> = 30.0..=120.0;
pub const CUPS_RANGE: std::ops::RangeInclusive<u8> = 0..=6;

/// A validated form submission, immutable once handed to the engine
///
/// The UI collaborator enforces the field bounds before submission;
/// `validate` is the boundary check it runs. The rule engine itself
/// assumes a valid, normalized profile.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub sex: Sex,
    pub age: u8,
    pub weight_kg: f64,
    pub test_date: NaiveDate,
    /// Submission order is preserved; it drives interaction-message order
    pub medications: Vec<Medication>,
    pub medication_time: MedicationTime,
    pub caffeine_cups_per_day: u8,
    pub caffeine_time: CaffeineTime,
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
}

impl Profile {
    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    pub fn has_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn takes(&self, medication: Medication) -> bool {
        self.medications.contains(&medication)
    }

    /// Collapse duplicate medications/symptoms/conditions, keeping the
    /// first occurrence so submission order survives.
    pub fn normalize(&mut self) {
        dedup_preserving_order(&mut self.medications);
        dedup_preserving_order(&mut self.symptoms);
        dedup_preserving_order(&mut self.conditions);
    }

    /// Validate the profile against its declared field domains
    ///
    /// Returns a list of findings, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.name.trim().is_empty() {
            findings.push("name must not be empty".to_string());
        }
        if !AGE_RANGE.contains(&self.age) {
            findings.push(format!(
                "age {} outside allowed range {}-{}",
                self.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ));
        }
        if !WEIGHT_RANGE.contains(&self.weight_kg) {
            findings.push(format!(
                "weight {}kg outside allowed range {}-{}kg",
                self.weight_kg,
                WEIGHT_RANGE.start(),
                WEIGHT_RANGE.end()
            ));
        }
        if !CUPS_RANGE.contains(&self.caffeine_cups_per_day) {
            findings.push(format!(
                "caffeine intake {} cups outside allowed range {}-{}",
                self.caffeine_cups_per_day,
                CUPS_RANGE.start(),
                CUPS_RANGE.end()
            ));
        }

        findings
    }
}

fn dedup_preserving_order<T: PartialEq + Copy>(items: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(*item);
            true
        }
    });
}

// ============================================================================
// Result Bundle
// ============================================================================

/// Comparison of estimated intake against the weight-proportional limit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DosageFeedback {
    Exceeded,
    NearLimit,
    Appropriate,
}

impl DosageFeedback {
    pub fn label(&self) -> &'static str {
        match self {
            DosageFeedback::Exceeded => "exceeds the recommended limit",
            DosageFeedback::NearLimit => "close to the recommended limit",
            DosageFeedback::Appropriate => "within the recommended limit",
        }
    }
}

/// Sensitivity category derived from the additive score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityLevel {
    VerySensitive,
    Sensitive,
    LowSensitivity,
}

impl SensitivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityLevel::VerySensitive => "very sensitive",
            SensitivityLevel::Sensitive => "sensitive",
            SensitivityLevel::LowSensitivity => "low sensitivity",
        }
    }
}

/// One resolved interaction message for a submitted medication
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InteractionMessage {
    pub medication: Medication,
    pub message: String,
}

/// Aggregated engine output, recomputed fresh on every analysis
///
/// Never partially mutated: a submission either produces a whole bundle or
/// none at all. Derives `PartialEq` so determinism is directly testable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultBundle {
    pub max_caffeine_mg: f64,
    pub actual_caffeine_mg: f64,
    pub dosage_feedback: DosageFeedback,
    pub sensitivity_score: u32,
    pub sensitivity_level: SensitivityLevel,
    /// One entry per medication, in submission order
    pub drug_interactions: Vec<InteractionMessage>,
    pub timing_warnings: Vec<String>,
    pub safe_time_suggestion: String,
    /// Never empty; falls back to a default message
    pub recommendations: Vec<String>,
}
