use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use stockpile::LogLevel;
use stockpile::core::config::{self, CliOverrides, ConfigSource, StockpileConfig};
use stockpile::tui;

#[derive(Parser)]
#[command(name = "stockpile", about = "Terminal inventory tracker")]
struct Args {
    /// Config file to use instead of ~/.stockpile/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// File to write logs to
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists; its warnings are held until
    // the logger is up
    let mut warnings = Vec::new();
    let (file_config, source) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => {
            warnings.extend(loaded.warnings);
            (loaded.config, loaded.source)
        }
        Err(e) => {
            warnings.push(format!("{e}; using defaults"));
            (StockpileConfig::default(), ConfigSource::Defaults)
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
        &mut warnings,
    );

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let logging = File::create(&resolved.log_file)
        .map_err(|e| e.to_string())
        .and_then(|log_file| {
            WriteLogger::init(resolved.log_level.filter(), log_config, log_file)
                .map_err(|e| e.to_string())
        });
    if let Err(e) = logging {
        eprintln!(
            "stockpile: cannot log to {}: {e}",
            resolved.log_file.display()
        );
        for warning in &warnings {
            eprintln!("stockpile: {warning}");
        }
    }

    log::info!("Stockpile starting up");
    log::info!("Config source: {}", source);
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(&resolved)
}
