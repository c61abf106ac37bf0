//! Daily wellness task generator.
//!
//! Independent of triage: a short fixed checklist per species.

use crate::models::{Species, TaskCategory, WellnessTask};

/// Number of tasks returned per day.
pub const MAX_DAILY_TASKS: usize = 4;

/// Generate the daily wellness tasks for a species.
///
/// The species-specific task is appended after the base checklist and then
/// cut by the [`MAX_DAILY_TASKS`] cap. With four base tasks it never appears.
pub fn daily_tasks(species: Species) -> Vec<WellnessTask> {
    let mut tasks = base_tasks();

    match species {
        Species::Cat => tasks.push(WellnessTask::new(
            "Clean litter box",
            "3 min",
            TaskCategory::Hygiene,
        )),
        Species::Dog => tasks.push(WellnessTask::new(
            "Brief walk or outdoor time",
            "15 min",
            TaskCategory::Exercise,
        )),
        Species::Other => {}
    }

    tasks.truncate(MAX_DAILY_TASKS);
    tasks
}

fn base_tasks() -> Vec<WellnessTask> {
    vec![
        WellnessTask::new("Check and refill water bowl", "2 min", TaskCategory::Hydration),
        WellnessTask::new("Quick health visual check", "3 min", TaskCategory::Monitoring),
        WellnessTask::new("Basic grooming (brush/pet)", "5 min", TaskCategory::Grooming),
        WellnessTask::new("Short play or training session", "10 min", TaskCategory::Mental),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_four_tasks() {
        for species in [Species::Dog, Species::Cat, Species::Other] {
            assert_eq!(daily_tasks(species).len(), MAX_DAILY_TASKS);
        }
    }

    #[test]
    fn test_species_task_is_truncated() {
        let dog = daily_tasks(Species::Dog);
        let cat = daily_tasks(Species::Cat);
        let other = daily_tasks(Species::Other);

        assert_eq!(dog, other);
        assert_eq!(cat, other);
        assert!(dog.iter().all(|t| t.category != TaskCategory::Exercise));
        assert!(cat.iter().all(|t| t.category != TaskCategory::Hygiene));
    }

    #[test]
    fn test_base_task_order() {
        let tasks = daily_tasks(Species::default());
        assert_eq!(tasks[0].task, "Check and refill water bowl");
        assert_eq!(tasks[0].duration, "2 min");
        assert_eq!(tasks[3].category, TaskCategory::Mental);
    }
}
