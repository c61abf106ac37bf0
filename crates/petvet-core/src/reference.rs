//! Reference consultations with known urgency outcomes.
//!
//! Used by the `petvet check` command and the test suite to catch
//! classification regressions, including ones caused by a custom lexicon.

use serde::Serialize;

use crate::models::UrgencyLevel;
use crate::triage::PetVetAssist;

/// A description paired with the urgency it must produce.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCase {
    pub description: &'static str,
    pub expected_urgency: UrgencyLevel,
}

pub const REFERENCE_CASES: &[ReferenceCase] = &[
    ReferenceCase {
        description: "My dog has been vomiting for 2 days and won't eat",
        expected_urgency: UrgencyLevel::Medium,
    },
    ReferenceCase {
        description: "Emergency! My cat is bleeding and collapsed",
        expected_urgency: UrgencyLevel::High,
    },
    ReferenceCase {
        description: "My puppy is scratching more than usual",
        expected_urgency: UrgencyLevel::Low,
    },
    ReferenceCase {
        description: "My dog had a seizure and his gums look pale",
        expected_urgency: UrgencyLevel::High,
    },
    ReferenceCase {
        description: "My cat has been coughing occasionally",
        expected_urgency: UrgencyLevel::Medium,
    },
];

/// Result of one reference case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub description: String,
    pub expected: UrgencyLevel,
    pub actual: UrgencyLevel,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Summary of a reference run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub passed: usize,
    pub total: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl CheckReport {
    /// Percentage of cases that passed (0.0 - 100.0).
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64 * 100.0
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Run every reference case through an assistant.
pub fn run_reference_checks(assistant: &PetVetAssist) -> CheckReport {
    let outcomes: Vec<CaseOutcome> = REFERENCE_CASES
        .iter()
        .map(|case| CaseOutcome {
            description: case.description.to_string(),
            expected: case.expected_urgency,
            actual: assistant.triage(case.description).urgency,
        })
        .collect();

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    if passed < outcomes.len() {
        tracing::warn!(passed, total = outcomes.len(), "Reference checks failed");
    }

    CheckReport {
        passed,
        total: outcomes.len(),
        outcomes,
    }
}
