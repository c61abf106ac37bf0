//! Symptom extraction from free-text descriptions.
//!
//! Lexicon terms are matched with all whitespace removed from both the term
//! and the description, so "difficultybreathing" and "difficulty  breathing"
//! both hit `difficulty breathing`. Phrasings are matched as plain substrings
//! of the lowercased description with whitespace intact.

use crate::lexicon::Lexicon;
use crate::models::{Symptom, SymptomSet};

/// Extractor bound to a lexicon.
pub struct SymptomExtractor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SymptomExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Extract matched symptoms. Never returns an empty set.
    pub fn extract(&self, description: &str) -> SymptomSet {
        let text = description.to_lowercase();
        let compact = strip_whitespace(&text);
        let mut found = SymptomSet::new();

        // Emergency terms first, then medium
        for term in self
            .lexicon
            .emergency_terms()
            .iter()
            .chain(self.lexicon.medium_terms())
        {
            if compact.contains(&strip_whitespace(term)) {
                found.insert(Symptom::new(term.as_str()));
            }
        }

        for phrasing in self.lexicon.phrasings() {
            if phrasing.keywords.iter().any(|k| text.contains(k.as_str())) {
                found.insert(Symptom::new(phrasing.symptom.as_str()));
            }
        }

        if found.is_empty() {
            found.insert(Symptom::general_concern());
        }
        found
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &SymptomSet) -> Vec<&str> {
        set.iter().map(Symptom::as_str).collect()
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("pale gums"), "palegums");
        assert_eq!(strip_whitespace(" a\tb\nc  "), "abc");
        assert_eq!(strip_whitespace(""), "");
    }

    #[test]
    fn test_extract_lexicon_terms() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        let found = extractor.extract("Emergency! My cat is bleeding and collapsed");
        assert_eq!(names(&found), vec!["bleeding", "collapse"]);
    }

    #[test]
    fn test_extract_phrasings() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        let found = extractor.extract("My dog has been vomiting for 2 days and won't eat");
        assert_eq!(names(&found), vec!["loss_of_appetite", "vomiting"]);

        let found = extractor.extract("She seems TIRED and has a runny nose");
        assert_eq!(names(&found), vec!["diarrhea", "lethargy"]);
    }

    #[test]
    fn test_duplicate_matches_collapse() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        // "diarrhea" hits both the medium table and its own phrasing
        let found = extractor.extract("diarrhea, more diarrhea");
        assert_eq!(names(&found), vec!["diarrhea"]);
    }

    #[test]
    fn test_lexicon_terms_ignore_whitespace() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        assert!(extractor
            .extract("he has difficultybreathing")
            .contains(&Symptom::from("difficulty breathing")));
        assert!(extractor
            .extract("pale   gums\tand severe\npain")
            .contains(&Symptom::from("pale gums")));
        assert!(extractor
            .extract("seiz ure")
            .contains(&Symptom::from("seizure")));
    }

    #[test]
    fn test_phrasings_keep_whitespace() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        // "throwingup" only matches a phrasing if whitespace were stripped
        let found = extractor.extract("keeps throwingup");
        assert_eq!(names(&found), vec![Symptom::GENERAL_CONCERN]);

        let found = extractor.extract("keeps throwing up");
        assert_eq!(names(&found), vec!["vomiting"]);
    }

    #[test]
    fn test_word_order_matters() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        let found = extractor.extract("My dog had a seizure and his gums look pale");
        assert!(found.contains(&Symptom::from("seizure")));
        assert!(!found.contains(&Symptom::from("pale gums")));
    }

    #[test]
    fn test_no_match_yields_general_concern() {
        let lexicon = Lexicon::builtin();
        let extractor = SymptomExtractor::new(&lexicon);

        for text in ["", "   ", "My puppy is scratching more than usual", "🐶🐱"] {
            let found = extractor.extract(text);
            assert_eq!(names(&found), vec![Symptom::GENERAL_CONCERN], "input {text:?}");
        }
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::empty();
        let extractor = SymptomExtractor::new(&lexicon);

        let found = extractor.extract("bleeding everywhere");
        assert_eq!(names(&found), vec![Symptom::GENERAL_CONCERN]);
    }
}
