//! Care advice: action lists and care type per urgency tier.
//!
//! Both depend on the urgency tier alone, never on which symptoms matched.

use crate::models::{UrgencyLevel, VetType};

const HIGH_ACTIONS: [&str; 4] = [
    "Seek immediate veterinary care",
    "Keep pet calm and comfortable",
    "Do not give food or water unless instructed",
    "Call vet clinic ahead of arrival",
];

const MEDIUM_ACTIONS: [&str; 4] = [
    "Schedule vet appointment within 24-48 hours",
    "Monitor symptoms closely",
    "Ensure pet has access to fresh water",
    "Keep pet in quiet, comfortable area",
];

const LOW_ACTIONS: [&str; 4] = [
    "Monitor pet for changes",
    "Maintain normal feeding schedule",
    "Consider vet consultation if symptoms worsen",
    "Document any changes in behavior",
];

/// Recommended actions, most urgent first.
pub fn actions_for(urgency: UrgencyLevel) -> Vec<String> {
    let actions = match urgency {
        UrgencyLevel::High => &HIGH_ACTIONS,
        UrgencyLevel::Medium => &MEDIUM_ACTIONS,
        UrgencyLevel::Low => &LOW_ACTIONS,
    };
    actions.iter().map(|a| a.to_string()).collect()
}

/// Recommended type of veterinary care.
pub fn vet_type_for(urgency: UrgencyLevel) -> VetType {
    match urgency {
        UrgencyLevel::High => VetType::Emergency,
        UrgencyLevel::Medium => VetType::General,
        UrgencyLevel::Low => VetType::Monitor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_order() {
        let high = actions_for(UrgencyLevel::High);
        assert_eq!(high.len(), 4);
        assert_eq!(high[0], "Seek immediate veterinary care");
        assert_eq!(high[3], "Call vet clinic ahead of arrival");

        let medium = actions_for(UrgencyLevel::Medium);
        assert_eq!(medium[0], "Schedule vet appointment within 24-48 hours");

        let low = actions_for(UrgencyLevel::Low);
        assert_eq!(
            low,
            vec![
                "Monitor pet for changes",
                "Maintain normal feeding schedule",
                "Consider vet consultation if symptoms worsen",
                "Document any changes in behavior",
            ]
        );
    }

    #[test]
    fn test_vet_type_mapping() {
        assert_eq!(vet_type_for(UrgencyLevel::High), VetType::Emergency);
        assert_eq!(vet_type_for(UrgencyLevel::Medium), VetType::General);
        assert_eq!(vet_type_for(UrgencyLevel::Low), VetType::Monitor);
    }
}
