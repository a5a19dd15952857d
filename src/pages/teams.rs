//! Teams page

use super::render::{self, Table};
use super::Page;
use crate::endpoint::Resource;
use crate::models::Team;

/// One row of the points ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam<'a> {
    pub rank: usize,
    pub team: &'a Team,
    /// Points per member, 0 for teams without members
    pub average_points: f64,
}

/// Rank teams by total points, highest first.
///
/// Sorts a copy of the references; ties keep server order. The records
/// themselves are left untouched.
pub fn rank_teams(teams: &[Team]) -> Vec<RankedTeam<'_>> {
    let mut sorted: Vec<&Team> = teams.iter().collect();
    sorted.sort_by(|a, b| b.points_or_zero().total_cmp(&a.points_or_zero()));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, team)| RankedTeam {
            rank: i + 1,
            team,
            average_points: team.average_points(),
        })
        .collect()
}

/// Totals across all teams
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeamSummary {
    pub teams: usize,
    pub members: u64,
    pub total_points: f64,
}

impl TeamSummary {
    pub fn from_records(teams: &[Team]) -> Self {
        Self {
            teams: teams.len(),
            members: teams.iter().map(Team::members_or_zero).sum(),
            total_points: teams.iter().map(Team::points_or_zero).sum(),
        }
    }
}

pub struct TeamsPage;

impl Page for TeamsPage {
    type Record = Team;
    const RESOURCE: Resource = Resource::Teams;
    const EMPTY_MESSAGE: &'static str = "No teams yet. Create a team and invite your friends!";

    fn render_records(teams: &[Team]) -> String {
        let summary = TeamSummary::from_records(teams);
        let mut out = render::stat_line(&[
            ("Teams", summary.teams.to_string()),
            ("Members", summary.members.to_string()),
            ("Total points", render::whole(summary.total_points)),
        ]);
        out.push('\n');

        let mut ranking = Table::new()
            .numeric("#")
            .column("Team")
            .numeric("Points")
            .numeric("Members")
            .numeric("Avg/Member");
        for row in rank_teams(teams) {
            ranking.row(vec![
                row.rank.to_string(),
                row.team.display_name().to_string(),
                render::whole(row.team.points_or_zero()),
                row.team.members_or_zero().to_string(),
                render::whole(row.average_points),
            ]);
        }
        out.push_str(&render::section("Team Rankings"));
        out.push_str(&ranking.render());

        out.push_str(&render::section("All Teams"));
        for team in teams {
            out.push_str(&format!("* {}", team.display_name()));
            if let Some(description) = &team.description {
                out.push_str(&format!(" - {}", description));
            }
            out.push('\n');
            if !team.members.is_empty() {
                out.push_str(&format!("  Members: {}\n", team.members.join(", ")));
            }
            if let Some(created_at) = &team.created_at {
                out.push_str(&format!("  Created: {}\n", created_at));
            }
        }
        out
    }
}
