//! PetVet Assist Core Library
//!
//! Rule-based triage of free-text pet symptom descriptions. Advisory only:
//! every result carries a disclaimer and nothing here is a diagnosis.
//!
//! # Architecture
//!
//! ```text
//! Description ──▶ Symptom Extraction ──▶ Urgency Assessment
//!                        │                       │
//!                    [Lexicon]          ┌────────┴────────┐
//!                                       ▼                 ▼
//!                                 Action Lookup    Care-Type Lookup
//!                                       │                 │
//!                                       └────────┬────────┘
//!                                                ▼
//!                                    TriageResult + Disclaimer
//! ```
//!
//! # Core Principle
//!
//! **Triage never fails.** Unrecognized or empty text degrades to
//! `general_concern` with LOW urgency and a "monitor" recommendation.
//!
//! # Modules
//!
//! - [`lexicon`]: Symptom term tables, built-in or loaded from JSON
//! - [`models`]: Domain types (Symptom, UrgencyLevel, TriageResult, etc.)
//! - [`triage`]: Extraction, assessment, advice and the orchestrator
//! - [`wellness`]: Daily care task checklist
//! - [`reference`]: Reference consultations for regression checks

pub mod lexicon;
pub mod models;
pub mod reference;
pub mod triage;
pub mod wellness;

// Re-export commonly used types
pub use lexicon::{builtin_lexicon, Lexicon, LexiconError};
pub use models::{
    Species, Symptom, SymptomSet, TaskCategory, TriageResult, UrgencyLevel, VetType,
    WellnessTask,
};
pub use reference::{run_reference_checks, CheckReport, REFERENCE_CASES};
pub use triage::{actions_for, triage, vet_type_for, PetVetAssist, DISCLAIMER};
pub use wellness::daily_tasks;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PetVetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<serde_json::Error> for PetVetError {
    fn from(e: serde_json::Error) -> Self {
        PetVetError::SerializationError(e.to_string())
    }
}

impl From<LexiconError> for PetVetError {
    fn from(e: LexiconError) -> Self {
        match e {
            LexiconError::InvalidTerm { .. } => PetVetError::InvalidInput(e.to_string()),
            LexiconError::Io(_) | LexiconError::Json(_) => {
                PetVetError::ConfigurationError(e.to_string())
            }
        }
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an assistant with the built-in lexicon.
#[uniffi::export]
pub fn new_assistant() -> Arc<PetVetCore> {
    Arc::new(PetVetCore {
        assistant: PetVetAssist::new(),
    })
}

/// Create an assistant from a lexicon JSON document.
#[uniffi::export]
pub fn assistant_with_lexicon_json(json: String) -> Result<Arc<PetVetCore>, PetVetError> {
    let lexicon = Lexicon::from_json(&json)?;
    Ok(Arc::new(PetVetCore {
        assistant: PetVetAssist::with_lexicon(lexicon),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Triage assistant handle for FFI. Immutable after construction.
#[derive(uniffi::Object)]
pub struct PetVetCore {
    assistant: PetVetAssist,
}

#[uniffi::export]
impl PetVetCore {
    /// Run a triage consultation.
    pub fn triage(&self, description: String) -> FfiTriageResult {
        self.assistant.triage(&description).into()
    }

    /// Run a triage consultation and return the result as JSON.
    pub fn triage_json(&self, description: String) -> Result<String, PetVetError> {
        Ok(self.assistant.triage(&description).to_json()?)
    }

    /// Daily wellness tasks. Unknown species get the generic checklist.
    pub fn daily_tasks(&self, species: String) -> Vec<FfiWellnessTask> {
        self.assistant
            .daily_tasks(Species::parse(&species))
            .into_iter()
            .map(|t| t.into())
            .collect()
    }

    /// The active lexicon as JSON.
    pub fn lexicon_json(&self) -> Result<String, PetVetError> {
        Ok(self.assistant.lexicon().to_json()?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe triage result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTriageResult {
    pub urgency: String,
    pub symptoms: Vec<String>,
    pub actions: Vec<String>,
    pub vet_type: String,
    pub disclaimer: String,
}

impl From<TriageResult> for FfiTriageResult {
    fn from(result: TriageResult) -> Self {
        Self {
            urgency: result.urgency.to_string(),
            symptoms: result.symptoms.iter().map(|s| s.to_string()).collect(),
            actions: result.actions,
            vet_type: result.vet_type.to_string(),
            disclaimer: result.disclaimer,
        }
    }
}

/// FFI-safe wellness task.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWellnessTask {
    pub task: String,
    pub duration: String,
    pub category: String,
}

impl From<WellnessTask> for FfiWellnessTask {
    fn from(task: WellnessTask) -> Self {
        Self {
            task: task.task,
            duration: task.duration,
            category: task.category.as_str().to_string(),
        }
    }
}
