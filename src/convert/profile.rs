// Profile roster conversion and the typed view the site joins against.

use crate::convert::enrich::NAME_COLUMN;
use crate::sheet::{StatRow, Workbook, WorkbookError};

/// Jersey number column label.
pub const NUMBER_COLUMN: &str = "등번호";
/// Fielding position column label.
pub const POSITION_COLUMN: &str = "포지션";

/// A roster entry parsed from a profile row. Profiles are the authoritative
/// list of known players; the summary view joins them against the player
/// table by exact name.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub number: String,
    pub position: String,
}

/// The profile workbook's first sheet, converted verbatim: every row becomes
/// one object in the flat profiles artifact, column labels preserved.
pub fn profile_rows(workbook: &Workbook) -> Result<&[StatRow], WorkbookError> {
    let sheet = workbook
        .sheets()
        .first()
        .ok_or_else(|| WorkbookError::Validation("profile workbook has no sheets".into()))?;
    Ok(&sheet.rows)
}

/// Typed view over profile rows. Rows without a name are dropped; missing
/// number or position degrade to an empty display value.
pub fn parse_profiles(rows: &[StatRow]) -> Vec<Profile> {
    rows.iter()
        .filter_map(|row| {
            let name = row.text(NAME_COLUMN)?.to_string();
            let number = row
                .get(NUMBER_COLUMN)
                .map(|c| c.to_string())
                .unwrap_or_default();
            let position = row
                .get(POSITION_COLUMN)
                .map(|c| c.to_string())
                .unwrap_or_default();
            Some(Profile {
                name,
                number,
                position,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
