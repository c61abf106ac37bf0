//! Symptom lexicon.
//!
//! Three ordered tables drive classification:
//! - emergency-tier canonical terms
//! - medium-tier canonical terms
//! - alternate free-text phrasings per symptom
//!
//! The built-in tables are used unless a JSON lexicon is loaded at startup.
//! A lexicon is immutable once handed to the triage pipeline.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Emergency symptoms requiring immediate vet care.
pub const EMERGENCY_TERMS: &[&str] = &[
    "bleeding",
    "seizure",
    "collapse",
    "unconscious",
    "difficulty breathing",
    "pale gums",
    "poisoning",
    "not eating 24h",
    "severe pain",
];

/// Medium urgency symptoms.
pub const MEDIUM_TERMS: &[&str] = &[
    "vomiting",
    "diarrhea",
    "limping",
    "lethargy",
    "loss of appetite",
    "swelling",
    "coughing",
    "straining to urinate",
];

/// Symptom name → everyday phrasings owners use for it.
pub const SYMPTOM_PHRASINGS: &[(&str, &[&str])] = &[
    ("vomiting", &["vomit", "throwing up", "sick"]),
    ("diarrhea", &["loose stool", "runny", "diarrhea"]),
    ("lethargy", &["tired", "sleepy", "inactive", "lethargic"]),
    ("loss_of_appetite", &["not eating", "won't eat", "no appetite"]),
];

static BUILTIN_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::builtin);

/// Shared instance of the built-in lexicon.
pub fn builtin_lexicon() -> &'static Lexicon {
    &BUILTIN_LEXICON
}

/// Lexicon errors.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {table} term: {term:?}")]
    InvalidTerm { table: &'static str, term: String },
}

pub type LexiconResult<T> = Result<T, LexiconError>;

/// Alternate phrasings that map onto one symptom name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymptomPhrasing {
    /// Symptom name reported on a match (e.g. "loss_of_appetite")
    pub symptom: String,
    /// Plain substrings searched for in the lowercased description
    pub keywords: Vec<String>,
}

/// The classification tables.
///
/// Every deserialization path validates and lowercases the terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLexicon")]
pub struct Lexicon {
    emergency: Vec<String>,
    medium: Vec<String>,
    phrasings: Vec<SymptomPhrasing>,
}

/// Lexicon JSON as written, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLexicon {
    #[serde(default)]
    emergency: Vec<String>,
    #[serde(default)]
    medium: Vec<String>,
    #[serde(default)]
    phrasings: Vec<SymptomPhrasing>,
}

impl TryFrom<RawLexicon> for Lexicon {
    type Error = LexiconError;

    fn try_from(raw: RawLexicon) -> LexiconResult<Self> {
        let emergency = normalize_all("emergency", raw.emergency)?;
        let medium = normalize_all("medium", raw.medium)?;
        let phrasings = raw
            .phrasings
            .into_iter()
            .map(|p| {
                Ok(SymptomPhrasing {
                    symptom: normalize_term("symptom", &p.symptom)?,
                    keywords: normalize_all("phrasing", p.keywords)?,
                })
            })
            .collect::<LexiconResult<Vec<_>>>()?;

        Ok(Self {
            emergency,
            medium,
            phrasings,
        })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The reference lexicon.
    pub fn builtin() -> Self {
        Self {
            emergency: EMERGENCY_TERMS.iter().map(|t| t.to_string()).collect(),
            medium: MEDIUM_TERMS.iter().map(|t| t.to_string()).collect(),
            phrasings: SYMPTOM_PHRASINGS
                .iter()
                .map(|(symptom, keywords)| SymptomPhrasing {
                    symptom: symptom.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// A lexicon with no terms. Everything classifies as general concern.
    pub fn empty() -> Self {
        Self {
            emergency: Vec::new(),
            medium: Vec::new(),
            phrasings: Vec::new(),
        }
    }

    /// Parse and validate a lexicon from JSON.
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        let raw: RawLexicon = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load a lexicon file.
    pub fn load<P: AsRef<Path>>(path: P) -> LexiconResult<Self> {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(LexiconError::from)
            .and_then(|json| Self::from_json(&json));

        match &loaded {
            Ok(lexicon) => tracing::info!(
                path = %path.display(),
                emergency = lexicon.emergency.len(),
                medium = lexicon.medium.len(),
                phrasings = lexicon.phrasings.len(),
                "Loaded custom lexicon"
            ),
            Err(e) => tracing::warn!(path = %path.display(), "Failed to load lexicon: {e}"),
        }

        loaded
    }

    /// Serialize to indented JSON (the same shape `from_json` accepts).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn emergency_terms(&self) -> &[String] {
        &self.emergency
    }

    pub fn medium_terms(&self) -> &[String] {
        &self.medium
    }

    pub fn phrasings(&self) -> &[SymptomPhrasing] {
        &self.phrasings
    }

    /// Add an emergency-tier term.
    pub fn add_emergency_term(&mut self, term: &str) -> LexiconResult<()> {
        let term = normalize_term("emergency", term)?;
        self.emergency.push(term);
        Ok(())
    }

    /// Add a medium-tier term.
    pub fn add_medium_term(&mut self, term: &str) -> LexiconResult<()> {
        let term = normalize_term("medium", term)?;
        self.medium.push(term);
        Ok(())
    }

    /// Add a phrasing for a symptom, creating the symptom entry if needed.
    pub fn add_phrasing(&mut self, symptom: &str, keyword: &str) -> LexiconResult<()> {
        let symptom = normalize_term("symptom", symptom)?;
        let keyword = normalize_term("phrasing", keyword)?;

        match self.phrasings.iter_mut().find(|p| p.symptom == symptom) {
            Some(entry) => entry.keywords.push(keyword),
            None => self.phrasings.push(SymptomPhrasing {
                symptom,
                keywords: vec![keyword],
            }),
        }
        Ok(())
    }
}

fn normalize_all(table: &'static str, terms: Vec<String>) -> LexiconResult<Vec<String>> {
    terms.iter().map(|t| normalize_term(table, t)).collect()
}

/// Lowercase a term. Blank terms would match every description and are rejected.
fn normalize_term(table: &'static str, term: &str) -> LexiconResult<String> {
    if term.trim().is_empty() {
        return Err(LexiconError::InvalidTerm {
            table,
            term: term.to_string(),
        });
    }
    Ok(term.to_lowercase())
}
