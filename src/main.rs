//! Pocket calculator - Entry Point

use clap::Parser;
use pocketcalc::config::{self, ResolvedConfig};
use pocketcalc::integration;
use pocketcalc::model::AppError;
use pocketcalc::source::{self, InputSource};
use pocketcalc::state::CalculatorEngine;
use std::path::PathBuf;
use tracing::{info, warn};

/// Pocket calculator - type keys, get answers
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(version)]
#[command(about = "Immediate-evaluation pocket calculator driven by key tapes or the keyboard")]
pub struct Args {
    /// Keys to press, e.g. "12+7*2=" (reads stdin lines if not provided)
    pub keys: Option<String>,

    /// Start an interactive session even if keys or piped input are present
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the final state as JSON instead of the display text
    #[arg(long)]
    pub json: bool,

    /// Print completed calculations after the display
    #[arg(long)]
    pub history: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of completed calculations to keep (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub history_capacity: Option<u32>,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Resolve configuration: Defaults → Config File → Env Vars → CLI Args.
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    let resolved = config::apply_cli_overrides(
        with_env,
        args.history_capacity.map(|n| n as usize),
        args.log_file.clone(),
    );
    resolved.validate()?;
    Ok(resolved)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    // Logs go to a file so they never interleave with calculator output
    pocketcalc::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let bindings = config.key_bindings().map_err(AppError::from)?;
    let mut engine = CalculatorEngine::with_config(config.engine_config());

    match source::detect_input_source(args.keys.clone(), args.interactive).map_err(AppError::from)? {
        InputSource::Interactive => {
            source::terminal::run(&mut engine, &bindings).map_err(AppError::from)?;
        }
        InputSource::Tapes(tapes) => {
            for tape in &tapes {
                let outcome = integration::run_tape(&mut engine, &bindings, tape);
                if !outcome.skipped.is_empty() {
                    warn!(skipped = ?outcome.skipped, "Unmapped keys in tape");
                }
                if !args.json {
                    println!("{}", engine.current_display());
                }
                if outcome.quit {
                    break;
                }
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&engine.snapshot()).map_err(AppError::from)?;
        println!("{}", json);
    } else if args.history && !engine.current_history().is_empty() {
        println!("{}", integration::render_history(engine.current_history()));
    }

    Ok(())
}
