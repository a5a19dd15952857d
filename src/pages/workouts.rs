//! Workouts page

use std::collections::HashSet;

use super::render::{self, Table};
use super::Page;
use crate::endpoint::Resource;
use crate::models::Workout;

/// Workout categories broken out on the page: (type key, label)
pub const CATEGORIES: [(&str, &str); 4] = [
    ("cardio", "Cardio"),
    ("strength", "Strength"),
    ("flexibility", "Flexibility"),
    ("hiit", "HIIT"),
];

/// Averages and category counts across all workouts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkoutSummary {
    pub total: usize,
    /// Minutes; 0 for an empty list
    pub average_duration: f64,
    /// 0 for an empty list
    pub average_calories: f64,
    pub distinct_types: usize,
    /// Counts in [`CATEGORIES`] order
    pub category_counts: [usize; 4],
}

impl WorkoutSummary {
    pub fn from_records(workouts: &[Workout]) -> Self {
        let total = workouts.len();
        let average = |sum: f64| if total == 0 { 0.0 } else { sum / total as f64 };

        let types: HashSet<String> = workouts
            .iter()
            .filter_map(|w| w.kind.as_deref())
            .map(str::to_lowercase)
            .collect();

        let mut category_counts = [0; 4];
        for (count, (key, _)) in category_counts.iter_mut().zip(CATEGORIES) {
            *count = workouts
                .iter()
                .filter(|w| w.kind.as_deref().is_some_and(|k| k.eq_ignore_ascii_case(key)))
                .count();
        }

        Self {
            total,
            average_duration: average(workouts.iter().map(Workout::duration_or_zero).sum()),
            average_calories: average(workouts.iter().map(Workout::calories_or_zero).sum()),
            distinct_types: types.len(),
            category_counts,
        }
    }

    /// Count for a category key such as `"hiit"`
    pub fn category(&self, key: &str) -> usize {
        CATEGORIES
            .iter()
            .position(|(k, _)| *k == key)
            .map(|i| self.category_counts[i])
            .unwrap_or(0)
    }
}

pub struct WorkoutsPage;

impl Page for WorkoutsPage {
    type Record = Workout;
    const RESOURCE: Resource = Resource::Workouts;
    const EMPTY_MESSAGE: &'static str =
        "No workouts available yet. Check back soon for personalized suggestions!";

    fn render_records(workouts: &[Workout]) -> String {
        let summary = WorkoutSummary::from_records(workouts);
        let mut out = render::stat_line(&[
            ("Workouts", summary.total.to_string()),
            ("Avg duration (min)", render::whole(summary.average_duration)),
            ("Avg calories", render::whole(summary.average_calories)),
            ("Types", summary.distinct_types.to_string()),
        ]);
        out.push('\n');

        let categories: Vec<(&str, String)> = CATEGORIES
            .iter()
            .zip(summary.category_counts)
            .map(|((_, label), count)| (*label, count.to_string()))
            .collect();
        out.push_str(&render::stat_line(&categories));
        out.push('\n');

        let mut table = Table::new()
            .column("Workout")
            .column("Type")
            .column("Difficulty")
            .numeric("Duration (min)")
            .numeric("Calories")
            .column("Description");

        for workout in workouts {
            table.row(vec![
                workout.display_name().to_string(),
                render::text_or_dash(workout.kind.as_deref()),
                render::text_or_dash(workout.difficulty.as_deref()),
                render::number_or_dash(workout.duration),
                render::number_or_dash(workout.calories_burned),
                render::text_or_dash(workout.description.as_deref()),
            ]);
        }
        out.push_str(&render::section("Suggested Workouts"));
        out.push_str(&table.render());
        out
    }
}
