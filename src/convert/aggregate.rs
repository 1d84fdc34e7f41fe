// Player aggregation: fold workbook rows into the per-player season tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::enrich;
use crate::convert::season::{split_label, SeasonKey};
use crate::sheet::{CellValue, StatRow, Workbook};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which stats workbook a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatDomain {
    Hitter,
    Pitcher,
}

/// A player's season tables, one sub-mapping per domain. A player may have
/// entries in one, both, or neither domain; both keys always appear in the
/// JSON artifact, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub hitter: BTreeMap<SeasonKey, StatRow>,
    #[serde(default)]
    pub pitcher: BTreeMap<SeasonKey, StatRow>,
}

impl PlayerRecord {
    pub fn rows(&self, domain: StatDomain) -> &BTreeMap<SeasonKey, StatRow> {
        match domain {
            StatDomain::Hitter => &self.hitter,
            StatDomain::Pitcher => &self.pitcher,
        }
    }

    fn rows_mut(&mut self, domain: StatDomain) -> &mut BTreeMap<SeasonKey, StatRow> {
        match domain {
            StatDomain::Hitter => &mut self.hitter,
            StatDomain::Pitcher => &mut self.pitcher,
        }
    }

    /// Career row for a domain, the line most views read.
    pub fn career(&self, domain: StatDomain) -> Option<&StatRow> {
        self.rows(domain).get(&SeasonKey::Career)
    }
}

/// Player name to season tables, ordered by name so output is byte-stable.
pub type PlayerTable = BTreeMap<String, PlayerRecord>;

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Fold every row of every sheet into a freshly built `PlayerTable`.
///
/// The row's first column must be a text cell; its label resolves to a
/// `(season, name)` pair and the row is inserted at that triple, overwriting
/// any previous row — last write wins. Rows with a missing or non-text first
/// cell are skipped. The aggregate "기록" sheets are iterated like any other
/// sheet; they double as the enrichment source for WAR and wRC+.
pub fn build_player_table(workbook: &Workbook, domain: StatDomain) -> PlayerTable {
    let mut players = PlayerTable::new();

    for sheet in workbook.sheets() {
        for row in &sheet.rows {
            let Some((_, cell)) = row.first() else {
                continue;
            };
            let CellValue::Text(label) = cell else {
                debug!("sheet '{}': skipping row with non-text label", sheet.name);
                continue;
            };
            let (season, name) = split_label(label);

            let mut row = row.clone();
            enrich::apply_record_stats(&mut row, workbook, domain, &season, name);

            players
                .entry(name.to_string())
                .or_default()
                .rows_mut(domain)
                .insert(season, row);
        }
    }

    players
}

/// Union two single-domain tables by player name. Season maps merge with
/// last-write-wins per season key.
pub fn merge_tables(hitters: PlayerTable, pitchers: PlayerTable) -> PlayerTable {
    let mut all = hitters;
    for (name, record) in pitchers {
        let entry = all.entry(name).or_default();
        entry.hitter.extend(record.hitter);
        entry.pitcher.extend(record.pitcher);
    }
    all
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::sheet_from_reader;

    fn hitter_workbook() -> Workbook {
        // One per-player sheet plus the record sheets it is enriched from.
        let season_records = sheet_from_reader(
            "24 타자 기록",
            "이름,WAR,wRC+\n24 홍길동,2.1,128.0".as_bytes(),
        )
        .unwrap();
        let career_records = sheet_from_reader(
            "타자 기록",
            "이름,WAR,wRC+\n홍길동,5.2,141.3".as_bytes(),
        )
        .unwrap();
        let player = sheet_from_reader(
            "홍길동",
            "이름,타석,홈런,타율\n홍길동,200,9,0.331\n24 홍길동,120,5,0.345".as_bytes(),
        )
        .unwrap();
        Workbook::new(vec![season_records, career_records, player])
    }

    #[test]
    fn rows_land_under_season_and_name() {
        let players = build_player_table(&hitter_workbook(), StatDomain::Hitter);

        let record = players.get("홍길동").expect("player aggregated");
        let career = record.hitter.get(&SeasonKey::Career).unwrap();
        assert_eq!(career.number("타석"), Some(200.0));
        let season = record.hitter.get(&SeasonKey::Year("24".into())).unwrap();
        assert_eq!(season.number("타석"), Some(120.0));
        assert!(record.pitcher.is_empty());
    }

    #[test]
    fn rows_are_enriched_from_record_sheets() {
        let players = build_player_table(&hitter_workbook(), StatDomain::Hitter);

        let record = players.get("홍길동").unwrap();
        let career = record.hitter.get(&SeasonKey::Career).unwrap();
        assert_eq!(career.number("WAR"), Some(5.2));
        assert_eq!(career.number("wRC+"), Some(141.3));
        let season = record.hitter.get(&SeasonKey::Year("24".into())).unwrap();
        assert_eq!(season.number("WAR"), Some(2.1));
    }

    #[test]
    fn record_sheet_rows_are_aggregated_too() {
        // The record sheets are not special-cased: their rows land under the
        // players their labels name, and the per-player sheet (loaded later)
        // overwrites the shared keys.
        let players = build_player_table(&hitter_workbook(), StatDomain::Hitter);

        let record = players.get("홍길동").unwrap();
        // Per-player sheet row won the (홍길동, hitter, career) slot.
        assert_eq!(
            record.hitter.get(&SeasonKey::Career).unwrap().number("타석"),
            Some(200.0)
        );
    }

    #[test]
    fn last_row_wins_for_same_triple() {
        let sheet = sheet_from_reader(
            "홍길동",
            "이름,타석\n홍길동,100\n홍길동,250".as_bytes(),
        )
        .unwrap();
        let wb = Workbook::new(vec![sheet]);
        let players = build_player_table(&wb, StatDomain::Hitter);

        let career = players.get("홍길동").unwrap().career(StatDomain::Hitter).unwrap();
        assert_eq!(career.number("타석"), Some(250.0));
    }

    #[test]
    fn non_text_first_cell_is_skipped() {
        let sheet = sheet_from_reader("s", "이름,타석\n42,100\n홍길동,120".as_bytes()).unwrap();
        let wb = Workbook::new(vec![sheet]);
        let players = build_player_table(&wb, StatDomain::Hitter);

        assert_eq!(players.len(), 1);
        assert!(players.contains_key("홍길동"));
    }

    #[test]
    fn merge_unions_domains() {
        let hitter_sheet =
            sheet_from_reader("홍길동", "이름,타석\n홍길동,200".as_bytes()).unwrap();
        let pitcher_sheet =
            sheet_from_reader("김철수", "이름,이닝\n김철수,45.33".as_bytes()).unwrap();
        let both_sheet =
            sheet_from_reader("홍길동", "이름,이닝\n홍길동,12.0".as_bytes()).unwrap();

        let hitters = build_player_table(&Workbook::new(vec![hitter_sheet]), StatDomain::Hitter);
        let pitchers = build_player_table(
            &Workbook::new(vec![pitcher_sheet, both_sheet]),
            StatDomain::Pitcher,
        );
        let all = merge_tables(hitters, pitchers);

        assert_eq!(all.len(), 2);
        let two_way = all.get("홍길동").unwrap();
        assert!(!two_way.hitter.is_empty());
        assert!(!two_way.pitcher.is_empty());
        let pitcher_only = all.get("김철수").unwrap();
        assert!(pitcher_only.hitter.is_empty());
        assert_eq!(
            pitcher_only.career(StatDomain::Pitcher).unwrap().number("이닝"),
            Some(45.33)
        );
    }

    #[test]
    fn player_record_serializes_both_domains() {
        let players = build_player_table(&hitter_workbook(), StatDomain::Hitter);
        let json = serde_json::to_string(players.get("홍길동").unwrap()).unwrap();

        // The pitcher map is empty but still present, matching the artifact
        // shape the site consumes.
        assert!(json.contains("\"pitcher\":{}"));
        // Career precedes the season keys in the serialized map.
        let career_at = json.find("\"career\":").unwrap();
        let season_at = json.find("\"24\":").unwrap();
        assert!(career_at < season_at);
    }
}
