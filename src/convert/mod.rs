// Batch conversion: workbooks in, JSON artifacts out.
//
// A run either completes and writes both artifacts or fails with no
// partial-output guarantees; there is no retry or incremental mode.

pub mod aggregate;
pub mod enrich;
pub mod profile;
pub mod season;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::sheet::Workbook;

use aggregate::{build_player_table, merge_tables, StatDomain};

/// Player-table artifact file name.
pub const PLAYERS_FILE: &str = "players.json";
/// Profile-array artifact file name.
pub const PROFILES_FILE: &str = "profiles.json";

/// What a conversion run produced, for the completion report.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub players: usize,
    pub hitter_sheets: usize,
    pub pitcher_sheets: usize,
    pub profiles: usize,
    pub output_dir: PathBuf,
}

/// Run the whole batch transform: load the three workbooks, aggregate and
/// merge the player tables, and write the JSON artifacts.
///
/// Output is deterministic: sheets load in filename order, player and season
/// maps are ordered, and rows keep column order, so converting the same
/// workbooks twice produces byte-identical files.
pub fn run(config: &Config) -> Result<ConvertSummary> {
    let hitter_wb = Workbook::load_dir(&config.data.hitter_workbook)
        .context("failed to load hitter workbook")?;
    let pitcher_wb = Workbook::load_dir(&config.data.pitcher_workbook)
        .context("failed to load pitcher workbook")?;
    let profile_wb = Workbook::load_dir(&config.data.profile_workbook)
        .context("failed to load profile workbook")?;
    info!(
        "Workbooks loaded: {} hitter, {} pitcher, {} profile sheets",
        hitter_wb.sheets().len(),
        pitcher_wb.sheets().len(),
        profile_wb.sheets().len()
    );

    let hitters = build_player_table(&hitter_wb, StatDomain::Hitter);
    let pitchers = build_player_table(&pitcher_wb, StatDomain::Pitcher);
    let players = merge_tables(hitters, pitchers);
    let profiles = profile::profile_rows(&profile_wb)?;
    info!(
        "Aggregated {} players, {} profile rows",
        players.len(),
        profiles.len()
    );

    let output_dir = &config.data.output_dir;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let players_path = output_dir.join(PLAYERS_FILE);
    let players_json =
        serde_json::to_string_pretty(&players).context("failed to serialize player table")?;
    std::fs::write(&players_path, players_json)
        .with_context(|| format!("failed to write {}", players_path.display()))?;

    let profiles_path = output_dir.join(PROFILES_FILE);
    let profiles_json =
        serde_json::to_string_pretty(&profiles).context("failed to serialize profiles")?;
    std::fs::write(&profiles_path, profiles_json)
        .with_context(|| format!("failed to write {}", profiles_path.display()))?;

    info!(
        "Conversion complete: {} and {} written to {}",
        PLAYERS_FILE,
        PROFILES_FILE,
        output_dir.display()
    );

    Ok(ConvertSummary {
        players: players.len(),
        hitter_sheets: hitter_wb.sheets().len(),
        pitcher_sheets: pitcher_wb.sheets().len(),
        profiles: profiles.len(),
        output_dir: output_dir.clone(),
    })
}
