// LogReader - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Display selection (native dialog or stdout)
// 4. One aggregation run

use clap::Parser;
use logreader::app::present::present;
use logreader::platform::config::{self, AppConfig, PlatformPaths};
use logreader::platform::dialog::{ConsoleDisplay, DialogDisplay, InfoDisplay};
use logreader::util;
use std::path::PathBuf;

/// LogReader - show every log_*.txt in a directory as one popup report.
///
/// Files are listed newest-first by name, each under a `--- name ---` header.
#[derive(Parser, Debug)]
#[command(name = "LogReader", version, about)]
struct Cli {
    /// Directory to scan (default: "logs", or [reader] log_dir from config).
    dir: Option<PathBuf>,

    /// Print the report to stdout instead of showing a dialog.
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Maximum report length in characters.
    #[arg(
        short = 'm',
        long = "max-chars",
        value_parser = clap::value_parser!(u64).range(
            util::constants::MIN_MAX_REPORT_CHARS as u64
                ..=util::constants::ABSOLUTE_MAX_REPORT_CHARS as u64
        )
    )]
    max_chars: Option<u64>,

    /// End a cut-short report with a "(truncated)" marker.
    #[arg(long = "mark-truncation")]
    mark_truncation: bool,

    /// Path to config.toml (default: platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Layer CLI flags over the loaded config. CLI values win where given.
fn apply_cli(cli: &Cli, mut config: AppConfig) -> AppConfig {
    if let Some(ref dir) = cli.dir {
        config.log_dir = dir.clone();
    }
    if let Some(max) = cli.max_chars {
        config.report.max_chars = max as usize;
    }
    if cli.mark_truncation {
        config.report.mark_truncation = true;
    }
    config
}

/// Show one report for `config` on the display chosen by `--print`.
fn run(cli: &Cli, config: &AppConfig) -> util::error::Result<()> {
    let mut display: Box<dyn InfoDisplay> = if cli.print {
        Box::new(ConsoleDisplay::stdout())
    } else {
        Box::new(DialogDisplay)
    };

    present(&config.log_dir, &config.report, display.as_mut())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can take effect;
    // its warnings are emitted once the subscriber is up.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (file_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, file_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogReader starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let app_config = apply_cli(&cli, file_config);

    if let Err(e) = run(&cli, &app_config) {
        tracing::error!(error = %e, "Failed to show log report");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
