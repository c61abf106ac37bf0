//! Urgency assessment.
//!
//! A symptom counts toward a tier when any of that tier's lexicon terms is a
//! substring of the symptom name. Containment rather than equality means a
//! compound identifier such as `internal bleeding` still reaches HIGH, and
//! also that an identifier which merely contains an emergency term does too.

use crate::lexicon::Lexicon;
use crate::models::{SymptomSet, UrgencyLevel};

/// Assessor bound to a lexicon.
pub struct UrgencyAssessor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> UrgencyAssessor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Reduce a symptom set to one urgency tier. HIGH wins over MEDIUM over LOW.
    pub fn assess(&self, symptoms: &SymptomSet) -> UrgencyLevel {
        if any_contains(symptoms, self.lexicon.emergency_terms()) {
            return UrgencyLevel::High;
        }

        if any_contains(symptoms, self.lexicon.medium_terms()) {
            return UrgencyLevel::Medium;
        }

        UrgencyLevel::Low
    }
}

fn any_contains(symptoms: &SymptomSet, terms: &[String]) -> bool {
    symptoms
        .iter()
        .any(|symptom| terms.iter().any(|term| symptom.as_str().contains(term.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Symptom;

    fn set(names: &[&str]) -> SymptomSet {
        names.iter().map(|n| Symptom::from(*n)).collect()
    }

    #[test]
    fn test_assess_tiers() {
        let lexicon = Lexicon::builtin();
        let assessor = UrgencyAssessor::new(&lexicon);

        assert_eq!(assessor.assess(&set(&["seizure"])), UrgencyLevel::High);
        assert_eq!(assessor.assess(&set(&["coughing"])), UrgencyLevel::Medium);
        assert_eq!(assessor.assess(&set(&[Symptom::GENERAL_CONCERN])), UrgencyLevel::Low);
    }

    #[test]
    fn test_high_takes_precedence() {
        let lexicon = Lexicon::builtin();
        let assessor = UrgencyAssessor::new(&lexicon);

        let symptoms = set(&["vomiting", "diarrhea", "limping", "poisoning"]);
        assert_eq!(assessor.assess(&symptoms), UrgencyLevel::High);
    }

    #[test]
    fn test_substring_containment() {
        let lexicon = Lexicon::builtin();
        let assessor = UrgencyAssessor::new(&lexicon);

        assert_eq!(assessor.assess(&set(&["internal bleeding"])), UrgencyLevel::High);
        assert_eq!(assessor.assess(&set(&["mild coughing fit"])), UrgencyLevel::Medium);
        // Underscore-joined names do not contain the spaced term
        assert_eq!(assessor.assess(&set(&["loss_of_appetite"])), UrgencyLevel::Low);
        // Equality is not required, so unrelated identifiers can trip a tier
        assert_eq!(assessor.assess(&set(&["nosebleeding_risk"])), UrgencyLevel::High);
    }

    #[test]
    fn test_empty_set_is_low() {
        let lexicon = Lexicon::builtin();
        let assessor = UrgencyAssessor::new(&lexicon);

        assert_eq!(assessor.assess(&SymptomSet::new()), UrgencyLevel::Low);
    }
}
