//! Activities page

use super::render::{self, Table};
use super::Page;
use crate::endpoint::Resource;
use crate::models::{fields, Activity};

/// Totals across all logged activities
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivitySummary {
    pub total: usize,
    /// Minutes
    pub total_duration: f64,
    pub total_calories: f64,
}

impl ActivitySummary {
    /// Missing or unparseable numbers count as 0
    pub fn from_records(activities: &[Activity]) -> Self {
        Self {
            total: activities.len(),
            total_duration: activities.iter().map(Activity::duration_or_zero).sum(),
            total_calories: activities.iter().map(Activity::calories_or_zero).sum(),
        }
    }
}

pub struct ActivitiesPage;

impl Page for ActivitiesPage {
    type Record = Activity;
    const RESOURCE: Resource = Resource::Activities;
    const EMPTY_MESSAGE: &'static str =
        "No activities logged yet. Log your first workout to start tracking!";

    fn render_records(activities: &[Activity]) -> String {
        let summary = ActivitySummary::from_records(activities);

        let mut out = render::stat_line(&[
            ("Total activities", summary.total.to_string()),
            ("Total minutes", render::whole(summary.total_duration)),
            ("Calories burned", render::whole(summary.total_calories)),
        ]);
        out.push('\n');

        let mut table = Table::new()
            .column("Activity")
            .column("User")
            .numeric("Duration (min)")
            .numeric("Calories")
            .column("Date");

        for activity in activities {
            table.row(vec![
                activity.activity_display().to_string(),
                activity.user_display().to_string(),
                render::number_or_dash(activity.duration),
                render::number_or_dash(activity.calories_burned),
                display_date(activity.date.as_deref()),
            ]);
        }

        out.push_str(&render::section("Recent Activities"));
        out.push_str(&table.render());
        out
    }
}

/// Dates as "Jan 05, 2024"; unparseable values pass through
pub fn display_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => fields::parse_timestamp(raw)
            .map(|dt| dt.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => "-".to_string(),
    }
}
