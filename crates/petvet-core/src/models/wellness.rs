//! Daily wellness task models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Species the wellness generator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Other,
}

impl Species {
    /// Parse a species name. Anything other than dog or cat is `Other`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            _ => Species::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other => "other",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of care a wellness task covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Hydration,
    Monitoring,
    Grooming,
    Mental,
    Hygiene,
    Exercise,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Hydration => "hydration",
            TaskCategory::Monitoring => "monitoring",
            TaskCategory::Grooming => "grooming",
            TaskCategory::Mental => "mental",
            TaskCategory::Hygiene => "hygiene",
            TaskCategory::Exercise => "exercise",
        }
    }
}

/// A single daily care task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessTask {
    /// What to do
    pub task: String,
    /// Rough time needed (e.g. "2 min")
    pub duration: String,
    pub category: TaskCategory,
}

impl WellnessTask {
    pub fn new(task: &str, duration: &str, category: TaskCategory) -> Self {
        Self {
            task: task.to_string(),
            duration: duration.to_string(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_parse() {
        assert_eq!(Species::parse("dog"), Species::Dog);
        assert_eq!(Species::parse(" Cat "), Species::Cat);
        assert_eq!(Species::parse("rabbit"), Species::Other);
        assert_eq!(Species::parse(""), Species::Other);
        assert_eq!(Species::default(), Species::Dog);
    }

    #[test]
    fn test_task_serialization() {
        let task = WellnessTask::new("Clean litter box", "3 min", TaskCategory::Hygiene);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"task":"Clean litter box","duration":"3 min","category":"hygiene"}"#
        );
    }
}
