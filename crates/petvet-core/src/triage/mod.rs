//! Symptom triage.
//!
//! Pipeline: Extraction → Urgency Assessment → Action / Care-Type Lookup
//!
//! Every stage is a pure function of its input and the lexicon, so a
//! description always produces the same [`TriageResult`].

mod advice;
mod assessor;
mod extractor;

pub use advice::*;
pub use assessor::*;
pub use extractor::*;

use crate::lexicon::{builtin_lexicon, Lexicon};
use crate::models::{Species, SymptomSet, TriageResult, UrgencyLevel, WellnessTask};
use crate::wellness;

/// Advisory text attached to every result.
pub const DISCLAIMER: &str =
    "⚠️ Not medical advice. Always consult a veterinarian for proper diagnosis.";

/// Triage a description with the built-in lexicon.
pub fn triage(description: &str) -> TriageResult {
    run_triage(builtin_lexicon(), description)
}

/// Extract symptoms with the built-in lexicon.
pub fn extract_symptoms(description: &str) -> SymptomSet {
    SymptomExtractor::new(builtin_lexicon()).extract(description)
}

/// Assess urgency with the built-in lexicon.
pub fn assess_urgency(symptoms: &SymptomSet) -> UrgencyLevel {
    UrgencyAssessor::new(builtin_lexicon()).assess(symptoms)
}

/// Triage assistant that owns its lexicon.
///
/// Use [`PetVetAssist::new`] for the reference lexicon or
/// [`PetVetAssist::with_lexicon`] for one loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct PetVetAssist {
    lexicon: Lexicon,
}

impl PetVetAssist {
    /// Create an assistant with the built-in lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assistant with a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract matched symptoms from a description.
    pub fn extract_symptoms(&self, description: &str) -> SymptomSet {
        SymptomExtractor::new(&self.lexicon).extract(description)
    }

    /// Determine the urgency tier for a symptom set.
    pub fn assess_urgency(&self, symptoms: &SymptomSet) -> UrgencyLevel {
        UrgencyAssessor::new(&self.lexicon).assess(symptoms)
    }

    /// Complete triage assessment.
    pub fn triage(&self, description: &str) -> TriageResult {
        run_triage(&self.lexicon, description)
    }

    /// Daily wellness tasks for a species.
    pub fn daily_tasks(&self, species: Species) -> Vec<WellnessTask> {
        wellness::daily_tasks(species)
    }
}

fn run_triage(lexicon: &Lexicon, description: &str) -> TriageResult {
    // Step 1: Extract symptoms
    let symptoms = SymptomExtractor::new(lexicon).extract(description);

    // Step 2: Assess urgency
    let urgency = UrgencyAssessor::new(lexicon).assess(&symptoms);

    // Step 3: Look up advice for the tier
    let actions = actions_for(urgency);
    let vet_type = vet_type_for(urgency);

    let names: Vec<&str> = symptoms.iter().map(|s| s.as_str()).collect();
    tracing::debug!(
        symptoms = ?names,
        urgency = %urgency,
        vet_type = %vet_type,
        "Triage complete"
    );

    TriageResult {
        urgency,
        symptoms,
        actions,
        vet_type,
        disclaimer: DISCLAIMER.to_string(),
    }
}
