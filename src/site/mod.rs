// Site view models: pure transforms over the converted JSON snapshot.

pub mod detail;
pub mod leaderboard;
pub mod summary;

use std::path::Path;

use crate::convert::aggregate::PlayerTable;
use crate::convert::profile::{parse_profiles, Profile};
use crate::convert::{PLAYERS_FILE, PROFILES_FILE};
use crate::sheet::StatRow;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// SiteData
// ---------------------------------------------------------------------------

/// The immutable data snapshot every view reads: the player table and the
/// profile roster, loaded from the artifacts the converter wrote. Loaded once
/// and never mutated.
#[derive(Debug, Clone)]
pub struct SiteData {
    pub players: PlayerTable,
    pub profiles: Vec<Profile>,
}

impl SiteData {
    /// Load the converted artifacts from the output directory.
    pub fn load(output_dir: &Path) -> Result<SiteData, SiteError> {
        let players: PlayerTable = read_json(&output_dir.join(PLAYERS_FILE))?;
        let profile_rows: Vec<StatRow> = read_json(&output_dir.join(PROFILES_FILE))?;

        Ok(SiteData {
            players,
            profiles: parse_profiles(&profile_rows),
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SiteError> {
    let text = std::fs::read_to_string(path).map_err(|e| SiteError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| SiteError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
