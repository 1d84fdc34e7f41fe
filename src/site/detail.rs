// Player detail view: profile card plus season-by-season stat tables.

use crate::convert::aggregate::StatDomain;
use crate::convert::profile::Profile;
use crate::convert::season::SeasonKey;
use crate::format::{format_innings, format_stat, PLACEHOLDER};
use crate::sheet::StatRow;
use crate::site::SiteData;

const ON_BASE: &str = "출루율";
const SLUGGING: &str = "장타율";
const ERA: &str = "ERA";
const WAR: &str = "WAR";

// ---------------------------------------------------------------------------
// Field specs
// ---------------------------------------------------------------------------

/// How one stat column renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Counting stat, truncated to an integer.
    Count,
    /// Rate stat with a fixed decimal precision.
    Rate(usize),
    /// Innings pitched, rendered with the thirds suffix.
    Innings,
    /// OPS, computed from on-base plus slugging per season.
    ComputedOps,
}

/// One column of a season table. The label doubles as the row key; labels
/// are the verbatim source-language column names.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn count(label: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        kind: FieldKind::Count,
    }
}

const fn rate(label: &'static str, digits: usize) -> FieldSpec {
    FieldSpec {
        label,
        kind: FieldKind::Rate(digits),
    }
}

/// Hitter season-table columns.
pub const HITTER_FIELDS: &[FieldSpec] = &[
    count("타석"),
    count("타수"),
    count("안타"),
    count("1루타"),
    count("2루타"),
    count("3루타"),
    count("홈런"),
    count("타점"),
    count("득점"),
    rate("출루율", 3),
    rate("장타율", 3),
    FieldSpec {
        label: "OPS",
        kind: FieldKind::ComputedOps,
    },
    rate("wRC+", 1),
    rate("oWAR", 2),
    rate("dWAR", 2),
    rate("WAR", 2),
];

/// Pitcher season-table columns.
pub const PITCHER_FIELDS: &[FieldSpec] = &[
    count("경기"),
    count("선발"),
    count("승"),
    count("패"),
    count("세"),
    count("홀"),
    FieldSpec {
        label: "이닝",
        kind: FieldKind::Innings,
    },
    count("삼진"),
    count("볼넷"),
    count("사구"),
    rate("ERA", 2),
    rate("FIP", 2),
    rate("WHIP", 2),
    rate("K/9", 2),
    rate("BB/9", 2),
    rate("K/BB", 2),
    rate("WAR", 2),
];

fn format_field(row: &StatRow, spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Count => format_stat(row.number(spec.label), 0, false),
        FieldKind::Rate(digits) => format_stat(row.number(spec.label), digits, true),
        FieldKind::Innings => format_innings(row.number(spec.label)),
        FieldKind::ComputedOps => match (row.number(ON_BASE), row.number(SLUGGING)) {
            (Some(obp), Some(slg)) => format_stat(Some(obp + slg), 3, true),
            _ => PLACEHOLDER.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// One formatted season line.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonLine {
    pub season: SeasonKey,
    pub cells: Vec<String>,
}

/// Everything the detail page shows for one player.
#[derive(Debug, Clone)]
pub struct PlayerDetail {
    pub name: String,
    pub profile: Option<Profile>,
    /// Combined career WAR (hitter + pitcher, absent counted as zero).
    pub combined_war: String,
    /// Career OPS, present only when both rate components exist.
    pub career_ops: Option<String>,
    /// Career ERA, present only when the player has pitched.
    pub career_era: Option<String>,
    pub hitter_lines: Vec<SeasonLine>,
    pub pitcher_lines: Vec<SeasonLine>,
}

/// Season display label: `"누적"` for career, `"<yy>시즌"` otherwise.
pub fn season_label(season: &SeasonKey) -> String {
    match season {
        SeasonKey::Career => "누적".to_string(),
        SeasonKey::Year(y) => format!("{y}시즌"),
    }
}

/// Order seasons for display: career first, then years newest-first. Only
/// seasons actually present in the data appear.
fn season_lines(
    rows: &std::collections::BTreeMap<SeasonKey, StatRow>,
    fields: &[FieldSpec],
) -> Vec<SeasonLine> {
    let mut keys: Vec<&SeasonKey> = rows.keys().collect();
    // BTreeMap order is career, then years ascending; flip the year block.
    keys.reverse();
    if let Some(pos) = keys.iter().position(|k| **k == SeasonKey::Career) {
        let career = keys.remove(pos);
        keys.insert(0, career);
    }

    keys.into_iter()
        .map(|season| {
            let row = &rows[season];
            SeasonLine {
                season: season.clone(),
                cells: fields.iter().map(|spec| format_field(row, spec)).collect(),
            }
        })
        .collect()
}

/// Build the detail view for one player name. An unknown name yields a
/// detail with empty tables rather than an error, matching the site's
/// missing-route behavior.
pub fn build_detail(data: &SiteData, name: &str) -> PlayerDetail {
    let record = data.players.get(name);
    let hitter = record.map(|r| &r.hitter);
    let pitcher = record.map(|r| &r.pitcher);

    let hitter_career = record.and_then(|r| r.career(StatDomain::Hitter));
    let pitcher_career = record.and_then(|r| r.career(StatDomain::Pitcher));

    let combined_war = hitter_career.and_then(|r| r.number(WAR)).unwrap_or(0.0)
        + pitcher_career.and_then(|r| r.number(WAR)).unwrap_or(0.0);

    let career_ops = hitter_career.and_then(|row| {
        match (row.number(ON_BASE), row.number(SLUGGING)) {
            (Some(obp), Some(slg)) => Some(format_stat(Some(obp + slg), 3, true)),
            _ => None,
        }
    });
    let career_era = pitcher_career
        .and_then(|row| row.number(ERA))
        .map(|era| format_stat(Some(era), 2, true));

    PlayerDetail {
        name: name.to_string(),
        profile: data.profiles.iter().find(|p| p.name == name).cloned(),
        combined_war: format_stat(Some(combined_war), 2, true),
        career_ops,
        career_era,
        hitter_lines: hitter
            .map(|rows| season_lines(rows, HITTER_FIELDS))
            .unwrap_or_default(),
        pitcher_lines: pitcher
            .map(|rows| season_lines(rows, PITCHER_FIELDS))
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
