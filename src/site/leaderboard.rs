// Leaderboard view: top-N players by a metric over career rows.

use crate::convert::aggregate::{PlayerTable, StatDomain};
use crate::format::format_stat;

const BATTING_AVG: &str = "타율";
const ERA: &str = "ERA";
const WAR: &str = "WAR";

/// One ranked line.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub value: f64,
}

/// A titled ranking with its display precision.
#[derive(Debug, Clone)]
pub struct LeaderboardSection {
    pub title: String,
    pub digits: usize,
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSection {
    pub fn display_value(&self, entry: &LeaderboardEntry) -> String {
        format_stat(Some(entry.value), self.digits, true)
    }
}

/// Rank players by a career metric in one domain. Players missing the metric
/// are excluded; ties break by name so rankings are stable.
pub fn top_players(
    players: &PlayerTable,
    domain: StatDomain,
    metric: &str,
    ascending: bool,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .filter_map(|(name, record)| {
            let value = record.career(domain)?.number(metric)?;
            Some(LeaderboardEntry {
                name: name.clone(),
                value,
            })
        })
        .collect();

    rank(&mut entries, ascending);
    entries.truncate(limit);
    entries
}

/// Rank players by combined WAR: the better of the two domain career WARs.
pub fn top_war(players: &PlayerTable, limit: usize) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .filter_map(|(name, record)| {
            let hitter = record.career(StatDomain::Hitter).and_then(|r| r.number(WAR));
            let pitcher = record
                .career(StatDomain::Pitcher)
                .and_then(|r| r.number(WAR));
            let value = match (hitter, pitcher) {
                (Some(h), Some(p)) => h.max(p),
                (Some(h), None) => h,
                (None, Some(p)) => p,
                (None, None) => return None,
            };
            Some(LeaderboardEntry {
                name: name.clone(),
                value,
            })
        })
        .collect();

    rank(&mut entries, false);
    entries.truncate(limit);
    entries
}

fn rank(entries: &mut [LeaderboardEntry], ascending: bool) {
    entries.sort_by(|a, b| {
        let ord = a
            .value
            .partial_cmp(&b.value)
            .unwrap_or(std::cmp::Ordering::Equal);
        let ord = if ascending { ord } else { ord.reverse() };
        ord.then_with(|| a.name.cmp(&b.name))
    });
}

/// The leaderboard page's default sections: batting average and ERA in their
/// home domains, WAR across both.
pub fn default_sections(players: &PlayerTable, limit: usize) -> Vec<LeaderboardSection> {
    vec![
        LeaderboardSection {
            title: format!("{BATTING_AVG} TOP {limit}"),
            digits: 3,
            entries: top_players(players, StatDomain::Hitter, BATTING_AVG, false, limit),
        },
        LeaderboardSection {
            title: format!("{ERA} TOP {limit}"),
            digits: 2,
            entries: top_players(players, StatDomain::Pitcher, ERA, true, limit),
        },
        LeaderboardSection {
            title: format!("{WAR} TOP {limit}"),
            digits: 2,
            entries: top_war(players, limit),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
