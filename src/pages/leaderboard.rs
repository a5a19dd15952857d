//! Leaderboard page
//!
//! Ranks come from the server's ordering; the page never re-sorts by points.

use super::render::{self, Table};
use super::Page;
use crate::endpoint::Resource;
use crate::models::LeaderboardEntry;

/// Pair each entry with its 1-based position in server order
pub fn ranked(entries: &[LeaderboardEntry]) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
    entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
}

/// Medal for the podium places
pub fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("Gold"),
        2 => Some("Silver"),
        3 => Some("Bronze"),
        _ => None,
    }
}

pub struct LeaderboardPage;

impl Page for LeaderboardPage {
    type Record = LeaderboardEntry;
    const RESOURCE: Resource = Resource::Leaderboard;
    const EMPTY_MESSAGE: &'static str =
        "No rankings yet. Complete an activity to claim the top spot!";

    fn render_records(entries: &[LeaderboardEntry]) -> String {
        let mut out = render::stat_line(&[
            ("Competitors", entries.len().to_string()),
            (
                "Leader",
                entries
                    .first()
                    .map(|e| e.display_name().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
        out.push('\n');

        let mut table = Table::new()
            .numeric("Rank")
            .column("Medal")
            .column("Name")
            .column("Team")
            .numeric("Points")
            .numeric("Activities");

        for (rank, entry) in ranked(entries) {
            table.row(vec![
                rank.to_string(),
                medal(rank).unwrap_or("").to_string(),
                entry.display_name().to_string(),
                render::text_or_dash(entry.team_name.as_deref()),
                render::whole(entry.points_or_zero()),
                entry
                    .activity_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        out.push_str(&render::section("Standings"));
        out.push_str(&table.render());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            user_name: Some(name.to_string()),
            total_points: Some(points),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_follow_server_order() {
        let entries = vec![
            entry("a", 10.0),
            entry("b", 500.0),
            entry("c", 20.0),
            entry("d", 999.0),
            entry("e", 0.0),
        ];

        let ranks: Vec<(usize, &str)> = ranked(&entries)
            .map(|(rank, e)| (rank, e.display_name()))
            .collect();
        assert_eq!(ranks, vec![(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]);
    }

    #[test]
    fn test_podium_medals() {
        assert_eq!(medal(1), Some("Gold"));
        assert_eq!(medal(3), Some("Bronze"));
        assert_eq!(medal(4), None);
    }

    #[test]
    fn test_render_rows() {
        let out = LeaderboardPage::render_records(&[entry("Iron Man", 120.0), entry("Batman", 300.0)]);
        assert!(out.contains("Competitors: 2 | Leader: Iron Man"));
        let iron = out.find("Iron Man  ").unwrap();
        let batman = out.find("Batman").unwrap();
        assert!(iron < batman);
    }
}
