// Summary view: one line per rostered player, career numbers only.
//
// The roster joins against the player table by exact name; a player missing
// from a domain simply shows placeholders for that domain's columns.

use crate::convert::aggregate::StatDomain;
use crate::format::{format_innings, format_stat};
use crate::site::SiteData;

const BATTING_AVG: &str = "타율";
const ON_BASE: &str = "출루율";
const SLUGGING: &str = "장타율";
const HOME_RUNS: &str = "홈런";
const RBIS: &str = "타점";
const INNINGS: &str = "이닝";
const STRIKEOUTS: &str = "삼진";
const ERA: &str = "ERA";
const WHIP: &str = "WHIP";
const WAR: &str = "WAR";

// ---------------------------------------------------------------------------
// SummaryRow
// ---------------------------------------------------------------------------

/// One summary line. Numeric fields stay numeric so sorting works on values,
/// not display strings; `display_cells` renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub number: String,
    pub position: String,
    /// Combined career WAR: hitter + pitcher, absent counted as zero.
    pub war: f64,
    pub avg: Option<f64>,
    pub ops: Option<f64>,
    pub hr: f64,
    pub rbi: f64,
    pub ip: Option<f64>,
    pub so: Option<f64>,
    pub era: Option<f64>,
    pub whip: Option<f64>,
}

impl SummaryRow {
    /// Render the row the way the summary table shows it.
    pub fn display_cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.number.clone(),
            self.position.clone(),
            format_stat(Some(self.war), 2, true),
            format_stat(self.avg, 3, true),
            format_stat(self.ops, 3, true),
            format_stat(Some(self.hr), 0, false),
            format_stat(Some(self.rbi), 0, false),
            format_innings(self.ip),
            format_stat(self.so, 0, false),
            format_stat(self.era, 2, true),
            format_stat(self.whip, 2, true),
        ]
    }
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// A sortable summary column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryColumn {
    Name,
    Number,
    Position,
    War,
    Avg,
    Ops,
    Hr,
    Rbi,
    Ip,
    So,
    Era,
    Whip,
}

impl SummaryColumn {
    /// Table headers, verbatim from the site.
    pub const ALL: &'static [SummaryColumn] = &[
        SummaryColumn::Name,
        SummaryColumn::Number,
        SummaryColumn::Position,
        SummaryColumn::War,
        SummaryColumn::Avg,
        SummaryColumn::Ops,
        SummaryColumn::Hr,
        SummaryColumn::Rbi,
        SummaryColumn::Ip,
        SummaryColumn::So,
        SummaryColumn::Era,
        SummaryColumn::Whip,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SummaryColumn::Name => "이름",
            SummaryColumn::Number => "등번호",
            SummaryColumn::Position => "포지션",
            SummaryColumn::War => "WAR",
            SummaryColumn::Avg => "타율",
            SummaryColumn::Ops => "OPS",
            SummaryColumn::Hr => "홈런",
            SummaryColumn::Rbi => "타점",
            SummaryColumn::Ip => "이닝",
            SummaryColumn::So => "삼진",
            SummaryColumn::Era => "ERA",
            SummaryColumn::Whip => "WHIP",
        }
    }

    /// Lower-is-better columns sort ascending by default.
    pub fn ascending_by_default(&self) -> bool {
        matches!(self, SummaryColumn::Era | SummaryColumn::Whip)
    }

    fn numeric_key(&self, row: &SummaryRow) -> Option<f64> {
        match self {
            SummaryColumn::War => Some(row.war),
            SummaryColumn::Avg => row.avg,
            SummaryColumn::Ops => row.ops,
            SummaryColumn::Hr => Some(row.hr),
            SummaryColumn::Rbi => Some(row.rbi),
            SummaryColumn::Ip => row.ip,
            SummaryColumn::So => row.so,
            SummaryColumn::Era => row.era,
            SummaryColumn::Whip => row.whip,
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Build the summary rows in roster order.
pub fn build_summary(data: &SiteData) -> Vec<SummaryRow> {
    data.profiles
        .iter()
        .map(|profile| {
            let record = data.players.get(&profile.name);
            let hitter = record.and_then(|r| r.career(StatDomain::Hitter));
            let pitcher = record.and_then(|r| r.career(StatDomain::Pitcher));

            let war = hitter.and_then(|r| r.number(WAR)).unwrap_or(0.0)
                + pitcher.and_then(|r| r.number(WAR)).unwrap_or(0.0);
            let ops = match (
                hitter.and_then(|r| r.number(ON_BASE)),
                hitter.and_then(|r| r.number(SLUGGING)),
            ) {
                (Some(obp), Some(slg)) => Some(obp + slg),
                _ => None,
            };

            SummaryRow {
                name: profile.name.clone(),
                number: profile.number.clone(),
                position: profile.position.clone(),
                war,
                avg: hitter.and_then(|r| r.number(BATTING_AVG)),
                ops,
                hr: hitter.and_then(|r| r.number(HOME_RUNS)).unwrap_or(0.0),
                rbi: hitter.and_then(|r| r.number(RBIS)).unwrap_or(0.0),
                ip: pitcher.and_then(|r| r.number(INNINGS)),
                so: pitcher.and_then(|r| r.number(STRIKEOUTS)),
                era: pitcher.and_then(|r| r.number(ERA)),
                whip: pitcher.and_then(|r| r.number(WHIP)),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sort / filter
// ---------------------------------------------------------------------------

/// Sort in place by one column. Numeric columns sort on the underlying
/// values with missing entries last regardless of direction; text columns
/// sort lexicographically.
pub fn sort_summary(rows: &mut [SummaryRow], column: SummaryColumn, descending: bool) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            SummaryColumn::Name => a.name.cmp(&b.name),
            SummaryColumn::Number => a.number.cmp(&b.number),
            SummaryColumn::Position => a.position.cmp(&b.position),
            _ => {
                let ka = column.numeric_key(a);
                let kb = column.numeric_key(b);
                return match (ka, kb) {
                    (Some(x), Some(y)) => {
                        let ord = x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal);
                        let ord = if descending { ord.reverse() } else { ord };
                        ord.then_with(|| a.name.cmp(&b.name))
                    }
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => a.name.cmp(&b.name),
                };
            }
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Case-insensitive name-substring filter.
pub fn filter_summary<'a>(rows: &'a [SummaryRow], filter_text: &str) -> Vec<&'a SummaryRow> {
    let text_lower = filter_text.to_lowercase();
    rows.iter()
        .filter(|row| text_lower.is_empty() || row.name.to_lowercase().contains(&text_lower))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
