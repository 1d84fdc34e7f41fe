// Integration tests for the stats pipeline.
//
// These tests exercise the full system end-to-end using the library crate's
// public API: workbook loading, aggregation, enrichment, artifact writing,
// and the site views over the converted output. The fixture workbooks under
// tests/fixtures mirror the real spreadsheet layout: per-player sheets plus
// the aggregate "기록" sheets used for WAR/wRC+ lookups.

use std::path::PathBuf;

use orca_stats::config::{Config, DataConfig, SiteConfig};
use orca_stats::convert::aggregate::StatDomain;
use orca_stats::convert::season::SeasonKey;
use orca_stats::convert::{self, PLAYERS_FILE, PROFILES_FILE};
use orca_stats::site::detail::build_detail;
use orca_stats::site::leaderboard::default_sections;
use orca_stats::site::summary::build_summary;
use orca_stats::site::SiteData;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to the package root, which is the cwd
/// for `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn fixture_config(output_dir: PathBuf) -> Config {
    Config {
        data: DataConfig {
            hitter_workbook: PathBuf::from(FIXTURES).join("hitter"),
            pitcher_workbook: PathBuf::from(FIXTURES).join("pitcher"),
            profile_workbook: PathBuf::from(FIXTURES).join("profile"),
            output_dir,
        },
        site: SiteConfig { leaderboard_size: 5 },
    }
}

fn temp_output(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn converted(name: &str) -> (SiteData, Config) {
    let config = fixture_config(temp_output(name));
    convert::run(&config).expect("conversion should succeed");
    let data = SiteData::load(&config.data.output_dir).expect("artifacts should load");
    (data, config)
}

fn cleanup(config: &Config) {
    let _ = std::fs::remove_dir_all(&config.data.output_dir);
}

// ===========================================================================
// Conversion pipeline
// ===========================================================================

#[test]
fn convert_writes_both_artifacts() {
    let config = fixture_config(temp_output("orca_it_artifacts"));
    let summary = convert::run(&config).expect("conversion should succeed");

    assert_eq!(summary.hitter_sheets, 5);
    assert_eq!(summary.pitcher_sheets, 4);
    assert_eq!(summary.profiles, 4);
    // 홍길동, 이몽룡, 한지민 appear in the stats workbooks.
    assert_eq!(summary.players, 3);

    assert!(config.data.output_dir.join(PLAYERS_FILE).exists());
    assert!(config.data.output_dir.join(PROFILES_FILE).exists());

    cleanup(&config);
}

#[test]
fn season_rows_land_under_player_and_year() {
    let (data, config) = converted("orca_it_seasons");

    let record = data.players.get("홍길동").expect("홍길동 aggregated");
    let career = record.hitter.get(&SeasonKey::Career).unwrap();
    assert_eq!(career.number("타석"), Some(320.0));
    assert_eq!(career.number("타율"), Some(0.333));

    // The "24 홍길동" rows populate the 24 season.
    let s24 = record.hitter.get(&SeasonKey::Year("24".into())).unwrap();
    assert_eq!(s24.number("타석"), Some(120.0));
    let s25 = record.hitter.get(&SeasonKey::Year("25".into())).unwrap();
    assert_eq!(s25.number("홈런"), Some(9.0));

    cleanup(&config);
}

#[test]
fn rows_are_enriched_from_record_sheets() {
    let (data, config) = converted("orca_it_enrich");

    let record = data.players.get("홍길동").unwrap();
    let career = record.hitter.get(&SeasonKey::Career).unwrap();
    assert_eq!(career.number("WAR"), Some(5.2));
    assert_eq!(career.number("wRC+"), Some(141.3));

    let s24 = record.hitter.get(&SeasonKey::Year("24".into())).unwrap();
    assert_eq!(s24.number("WAR"), Some(2.1));
    assert_eq!(s24.number("wRC+"), Some(128.0));

    // Pitchers get WAR but never wRC+.
    let pitcher_career = record.pitcher.get(&SeasonKey::Career).unwrap();
    assert_eq!(pitcher_career.number("WAR"), Some(0.3));
    assert!(pitcher_career.get("wRC+").is_none());

    let han = data.players.get("한지민").unwrap();
    let han24 = han.pitcher.get(&SeasonKey::Year("24".into())).unwrap();
    assert_eq!(han24.number("WAR"), Some(1.1));

    cleanup(&config);
}

#[test]
fn later_sheets_overwrite_earlier_rows() {
    // 이몽룡's per-player sheet sorts before the "타자 기록" record sheet, so
    // the record sheet's thin career row wins the (이몽룡, hitter, career)
    // slot. Last write wins is the contract; sheet order decides.
    let (data, config) = converted("orca_it_overwrite");

    let career = data
        .players
        .get("이몽룡")
        .unwrap()
        .hitter
        .get(&SeasonKey::Career)
        .unwrap();
    assert_eq!(career.number("WAR"), Some(3.9));
    assert_eq!(career.number("wRC+"), Some(150.2));
    assert!(career.get("타석").is_none());

    cleanup(&config);
}

#[test]
fn profiles_are_converted_verbatim() {
    let (data, config) = converted("orca_it_profiles");

    assert_eq!(data.profiles.len(), 4);
    let names: Vec<&str> = data.profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["홍길동", "한지민", "이몽룡", "박지훈"]);
    assert_eq!(data.profiles[0].number, "10");
    assert_eq!(data.profiles[3].position, "포수");

    // The artifact keeps the source column labels verbatim.
    let raw = std::fs::read_to_string(config.data.output_dir.join(PROFILES_FILE)).unwrap();
    assert!(raw.contains("\"등번호\""));
    assert!(raw.contains("\"포지션\""));

    cleanup(&config);
}

#[test]
fn converting_twice_is_byte_identical() {
    let config_a = fixture_config(temp_output("orca_it_determinism_a"));
    let config_b = fixture_config(temp_output("orca_it_determinism_b"));
    convert::run(&config_a).unwrap();
    convert::run(&config_b).unwrap();

    for file in [PLAYERS_FILE, PROFILES_FILE] {
        let a = std::fs::read(config_a.data.output_dir.join(file)).unwrap();
        let b = std::fs::read(config_b.data.output_dir.join(file)).unwrap();
        assert_eq!(a, b, "{file} should be byte-identical across runs");
    }

    cleanup(&config_a);
    cleanup(&config_b);
}

#[test]
fn career_key_precedes_season_keys_in_artifact() {
    let (_, config) = converted("orca_it_key_order");

    let raw = std::fs::read_to_string(config.data.output_dir.join(PLAYERS_FILE)).unwrap();
    // Career rows serialize ahead of any season key.
    let hitter_at = raw.find("\"hitter\"").unwrap();
    let career_at = raw[hitter_at..].find("\"career\"").unwrap();
    let season_at = raw[hitter_at..].find("\"24\"").unwrap();
    assert!(career_at < season_at);

    cleanup(&config);
}

#[test]
fn missing_workbook_aborts_the_run() {
    let mut config = fixture_config(temp_output("orca_it_missing_wb"));
    config.data.pitcher_workbook = PathBuf::from("tests/fixtures/does_not_exist");

    let err = convert::run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("pitcher workbook"));
    // Nothing was written.
    assert!(!config.data.output_dir.join(PLAYERS_FILE).exists());
}

// ===========================================================================
// Site views over converted data
// ===========================================================================

#[test]
fn summary_joins_profiles_with_career_rows() {
    let (data, config) = converted("orca_it_summary");

    let rows = build_summary(&data);
    assert_eq!(rows.len(), 4);

    let hong = &rows[0];
    assert_eq!(hong.name, "홍길동");
    let cells = hong.display_cells();
    assert_eq!(cells[3], "5.50"); // combined WAR 5.2 + 0.3
    assert_eq!(cells[4], "0.333"); // 타율
    assert_eq!(cells[5], "0.920"); // OPS
    assert_eq!(cells[6], "14"); // 홈런
    assert_eq!(cells[8], "21 2/3"); // 이닝
    assert_eq!(cells[10], "3.32"); // ERA

    let han = &rows[1];
    assert_eq!(han.name, "한지민");
    let cells = han.display_cells();
    assert_eq!(cells[4], "-"); // no hitting line
    assert_eq!(cells[8], "95 2/3"); // 이닝 95.67
    assert_eq!(cells[10], "2.98");

    // 박지훈 has a profile but no stats at all.
    let park = &rows[3];
    let cells = park.display_cells();
    assert_eq!(cells[3], "0.00");
    assert_eq!(cells[4], "-");
    assert_eq!(cells[6], "0");

    cleanup(&config);
}

#[test]
fn detail_orders_seasons_newest_first_after_career() {
    let (data, config) = converted("orca_it_detail");

    let detail = build_detail(&data, "홍길동");
    let seasons: Vec<String> = detail
        .hitter_lines
        .iter()
        .map(|l| l.season.to_string())
        .collect();
    assert_eq!(seasons, vec!["career", "25", "24"]);

    assert_eq!(detail.combined_war, "5.50");
    assert_eq!(detail.career_ops.as_deref(), Some("0.920"));
    assert_eq!(detail.career_era.as_deref(), Some("3.32"));
    assert_eq!(detail.profile.as_ref().unwrap().number, "10");

    cleanup(&config);
}

#[test]
fn leaderboard_sections_rank_career_metrics() {
    let (data, config) = converted("orca_it_leaderboard");

    let sections = default_sections(&data.players, 5);
    assert_eq!(sections.len(), 3);

    // 타율: only 홍길동 kept a full career hitting line.
    assert_eq!(sections[0].entries.len(), 1);
    assert_eq!(sections[0].entries[0].name, "홍길동");
    assert_eq!(
        sections[0].display_value(&sections[0].entries[0]),
        "0.333"
    );

    // ERA ascends: 한지민 2.98 ahead of 홍길동 3.32.
    let era_names: Vec<&str> = sections[1].entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(era_names, vec!["한지민", "홍길동"]);

    // WAR uses the better domain per player.
    let war_names: Vec<&str> = sections[2].entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(war_names, vec!["홍길동", "이몽룡", "한지민"]);

    cleanup(&config);
}

#[test]
fn two_way_player_appears_in_both_domains() {
    let (data, config) = converted("orca_it_two_way");

    let record = data.players.get("홍길동").unwrap();
    assert!(!record.rows(StatDomain::Hitter).is_empty());
    assert!(!record.rows(StatDomain::Pitcher).is_empty());

    let detail = build_detail(&data, "홍길동");
    assert!(!detail.hitter_lines.is_empty());
    assert!(!detail.pitcher_lines.is_empty());

    cleanup(&config);
}
