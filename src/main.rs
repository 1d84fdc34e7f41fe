// Stats site entry point.
//
// Two subcommands share one config:
// - `orca convert` runs the batch workbook-to-JSON transform
// - `orca view` opens the terminal viewer over the converted artifacts

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use orca_stats::config;
use orca_stats::convert;
use orca_stats::site;
use orca_stats::tui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Convert,
    View,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, base_dir)) = parse_args(&args) else {
        print_usage();
        std::process::exit(2);
    };

    match command {
        Command::Convert => {
            init_stderr_tracing()?;
            let config = config::load_config(&base_dir).context("failed to load configuration")?;
            let summary = convert::run(&config)?;

            println!("Conversion complete");
            println!("Output: {}", summary.output_dir.display());
            println!(
                "Sheets: {} hitter, {} pitcher",
                summary.hitter_sheets, summary.pitcher_sheets
            );
            println!("Players: {}", summary.players);
            println!("Profiles: {}", summary.profiles);
        }
        Command::View => {
            // Log to a file: the terminal belongs to the TUI.
            init_file_tracing()?;
            info!("Viewer starting up");
            let config = config::load_config(&base_dir).context("failed to load configuration")?;
            let data = site::SiteData::load(&config.data.output_dir)
                .context("failed to load converted data (run `orca convert` first)")?;
            info!(
                "Loaded {} players, {} profiles",
                data.players.len(),
                data.profiles.len()
            );
            tui::run(&data, &config.site)?;
        }
    }

    Ok(())
}

/// Parse `<command> [--config-dir <path>]`. Returns `None` on anything
/// unrecognized so the caller can print usage.
fn parse_args(args: &[String]) -> Option<(Command, PathBuf)> {
    let mut command = None;
    let mut base_dir = None;

    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        if let Some(path) = arg.strip_prefix("--config-dir=") {
            if path.trim().is_empty() {
                return None;
            }
            base_dir = Some(PathBuf::from(path.trim()));
        } else if arg == "--config-dir" {
            let next = args.get(idx + 1)?;
            base_dir = Some(PathBuf::from(next));
            idx += 1;
        } else if command.is_none() {
            command = Some(match arg.as_str() {
                "convert" => Command::Convert,
                "view" => Command::View,
                _ => return None,
            });
        } else {
            return None;
        }
        idx += 1;
    }

    let base_dir = match base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().ok()?,
    };
    Some((command?, base_dir))
}

fn print_usage() {
    eprintln!("usage: orca <convert|view> [--config-dir <path>]");
    eprintln!();
    eprintln!("  convert   read the stat workbooks and write the JSON artifacts");
    eprintln!("  view      browse the converted data in the terminal");
}

/// Tracing for batch runs: straight to stderr.
fn init_stderr_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orca_stats=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

/// Tracing for the viewer: log to a file, not the terminal the TUI owns.
fn init_file_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("orca-stats.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orca_stats=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
