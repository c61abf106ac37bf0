//! Console rendering.

use std::fmt;

use petvet_core::{CheckReport, TriageResult, WellnessTask};

const RULE_WIDTH: usize = 50;

/// Full consultation report.
pub struct Consultation<'a> {
    pub description: &'a str,
    pub result: &'a TriageResult,
}

impl fmt::Display for Consultation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "🐾 PetVet Assist Consultation")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "📝 Description: {}", self.description)?;
        writeln!(f)?;
        writeln!(f, "🔍 Symptoms Found: {}", result.symptom_names().join(", "))?;
        writeln!(f, "🚨 Urgency Level: {}", result.urgency)?;
        writeln!(f, "🏥 Recommended Care: {}", result.vet_type.title())?;
        writeln!(f)?;
        writeln!(f, "💡 Recommended Actions:")?;
        for action in &result.actions {
            writeln!(f, "  • {action}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", result.disclaimer)
    }
}

/// Wellness checklist.
pub struct TaskList<'a>(pub &'a [WellnessTask]);

impl fmt::Display for TaskList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📅 Daily Wellness Tasks:")?;
        for task in self.0 {
            writeln!(f, "  • {} ({})", task.task, task.duration)?;
        }
        Ok(())
    }
}

/// Reference check report.
pub struct Report<'a>(pub &'a CheckReport);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "🧪 Running PetVet Assist Tests")?;
        writeln!(f, "{}", "=".repeat(40))?;

        for (i, outcome) in report.outcomes.iter().enumerate() {
            let mark = if outcome.passed() { "✅" } else { "❌" };
            let preview: String = outcome.description.chars().take(50).collect();

            writeln!(f)?;
            writeln!(f, "Test {}: {mark}", i + 1)?;
            writeln!(f, "Input: {preview}...")?;
            writeln!(f, "Expected: {} | Got: {}", outcome.expected, outcome.actual)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "📊 Results: {}/{} ({:.1}% accuracy)",
            report.passed,
            report.total,
            report.accuracy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petvet_core::{daily_tasks, run_reference_checks, triage, PetVetAssist, Species};

    #[test]
    fn test_render_consultation() {
        let description = "Emergency! My cat is bleeding and collapsed";
        let result = triage(description);
        let text = Consultation {
            description,
            result: &result,
        }
        .to_string();

        assert!(text.contains("Symptoms Found: bleeding, collapse"));
        assert!(text.contains("Urgency Level: HIGH"));
        assert!(text.contains("Recommended Care: Emergency"));
        assert!(text.contains("  • Seek immediate veterinary care"));
        assert!(text.trim_end().ends_with("proper diagnosis."));
    }

    #[test]
    fn test_render_tasks() {
        let text = TaskList(&daily_tasks(Species::Dog)).to_string();
        assert!(text.contains("  • Check and refill water bowl (2 min)"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_report() {
        let text = Report(&run_reference_checks(&PetVetAssist::new())).to_string();
        assert!(text.contains("Test 5: ✅"));
        assert!(text.contains("📊 Results: 5/5 (100.0% accuracy)"));
    }
}
