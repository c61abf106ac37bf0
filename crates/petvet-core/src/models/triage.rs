//! Triage models: symptoms, urgency tiers and the consultation result.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical symptom identifier.
///
/// Drawn from the lexicon (e.g. `bleeding`, `loss_of_appetite`) or the
/// [`Symptom::GENERAL_CONCERN`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
    /// Sentinel returned when a description matches nothing.
    pub const GENERAL_CONCERN: &'static str = "general_concern";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn general_concern() -> Self {
        Self(Self::GENERAL_CONCERN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_general_concern(&self) -> bool {
        self.0 == Self::GENERAL_CONCERN
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symptom {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Matched symptoms. Ordered so identical input always yields identical output.
pub type SymptomSet = BTreeSet<Symptom>;

/// Urgency tier. Variant order gives `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::Low => "LOW",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of veterinary care recommended for an urgency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VetType {
    /// Immediate care
    Emergency,
    /// Scheduled visit
    General,
    /// Watch and wait, no visit yet
    Monitor,
}

impl VetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VetType::Emergency => "emergency",
            VetType::General => "general",
            VetType::Monitor => "monitor",
        }
    }

    /// Capitalized label for console output.
    pub fn title(&self) -> &'static str {
        match self {
            VetType::Emergency => "Emergency",
            VetType::General => "General",
            VetType::Monitor => "Monitor",
        }
    }
}

impl fmt::Display for VetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Assessed urgency tier
    pub urgency: UrgencyLevel,
    /// Matched symptoms (never empty)
    pub symptoms: SymptomSet,
    /// Recommended actions in presentation order
    pub actions: Vec<String>,
    /// Recommended care type
    pub vet_type: VetType,
    /// Advisory disclaimer attached to every result
    pub disclaimer: String,
}

impl TriageResult {
    /// Symptom names in display order.
    pub fn symptom_names(&self) -> Vec<&str> {
        self.symptoms.iter().map(Symptom::as_str).collect()
    }

    /// True when nothing in the description was recognized.
    pub fn is_general_concern(&self) -> bool {
        self.symptoms.len() == 1 && self.symptoms.iter().all(Symptom::is_general_concern)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
