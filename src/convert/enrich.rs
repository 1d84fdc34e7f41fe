// WAR / wRC+ enrichment from the aggregate record sheets.
//
// Each stats workbook carries "기록" (record) sheets holding advanced metrics
// per player label. After a row is aggregated, the matching record row is
// looked up and its WAR (and, for hitters, wRC+) copied in. Any missing
// sheet, row, or field silently skips that part of the enrichment.

use crate::convert::aggregate::StatDomain;
use crate::convert::season::SeasonKey;
use crate::sheet::{StatRow, Workbook};

/// Name column shared by the record sheets and the profile sheet.
pub const NAME_COLUMN: &str = "이름";

const WAR_COLUMN: &str = "WAR";
const WRC_PLUS_COLUMN: &str = "wRC+";

/// Record-sheet name for a domain and season: `"타자 기록"` / `"투수 기록"`,
/// prefixed with the year for season rows.
pub fn record_sheet_name(domain: StatDomain, season: &SeasonKey) -> String {
    let base = match domain {
        StatDomain::Hitter => "타자 기록",
        StatDomain::Pitcher => "투수 기록",
    };
    match season {
        SeasonKey::Career => base.to_string(),
        SeasonKey::Year(y) => format!("{y} {base}"),
    }
}

/// Record-row label for a season and player name: `"<year> <name>"` for a
/// season row, the bare name for career.
pub fn record_row_label(season: &SeasonKey, name: &str) -> String {
    match season {
        SeasonKey::Career => name.to_string(),
        SeasonKey::Year(y) => format!("{y} {name}"),
    }
}

/// Copy WAR (and wRC+ for hitters) from the matching record row into `row`,
/// overwriting any existing values at those keys. Absent sheet, row, or
/// field leaves the target untouched.
pub fn apply_record_stats(
    row: &mut StatRow,
    source: &Workbook,
    domain: StatDomain,
    season: &SeasonKey,
    name: &str,
) {
    let sheet_name = record_sheet_name(domain, season);
    let Some(sheet) = source.sheet(&sheet_name) else {
        return;
    };

    let label = record_row_label(season, name);
    let Some(found) = sheet
        .rows
        .iter()
        .find(|r| r.text(NAME_COLUMN) == Some(label.as_str()))
    else {
        return;
    };

    if let Some(war) = found.get(WAR_COLUMN) {
        row.insert(WAR_COLUMN, war.clone());
    }
    if domain == StatDomain::Hitter {
        if let Some(wrc) = found.get(WRC_PLUS_COLUMN) {
            row.insert(WRC_PLUS_COLUMN, wrc.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
