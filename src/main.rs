//! Signscribe - Fingerspelling session engine
//!
//! Replays hand-tracking frame logs through the symbol-assembly state
//! machine and talks to the grammar-correction service.

use signscribe::alphabet::Alphabet;
use signscribe::app::cli::{Cli, Commands, ConfigAction};
use signscribe::app::config::Config;
use signscribe::classify::CentroidModel;
use signscribe::correction::{HttpCorrector, TextCorrector};
use signscribe::replay::{replay_log, FrameLog};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Run {
            input,
            model,
            interval,
            json,
        } => {
            run_replay(&input, &model, interval, json, &config)?;
        }
        Commands::Correct { text, endpoint } => {
            run_correct(&text, endpoint, &config)?;
        }
        Commands::Validate { input } => {
            run_validate(&input)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_replay(
    input: &PathBuf,
    model_path: &PathBuf,
    interval: Option<f64>,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let log = FrameLog::load(input)?;
    info!(
        name = %log.metadata.name,
        frames = log.metadata.frame_count,
        "loaded frame log"
    );

    let alphabet = Alphabet::from_charset(&config.session.alphabet)?;
    let model = CentroidModel::load(model_path, config.feature_width())?;
    model.validate_alphabet(&alphabet)?;
    info!(classes = model.class_count(), "loaded centroid model");

    let interval = interval.unwrap_or(config.session.capture_interval_secs);
    let summary = replay_log(&log, model, interval)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary.final_snapshot)?);
    } else {
        println!(
            "Processed {} frames, committed {} symbols",
            summary.frames_processed, summary.commits
        );
        println!("Sentence: {}", summary.final_snapshot.committed_text);
        if let Some(pending) = summary.final_snapshot.pending {
            println!("Pending:  {pending}");
        }
    }
    Ok(())
}

fn run_correct(text: &str, endpoint: Option<String>, config: &Config) -> anyhow::Result<()> {
    let endpoint = endpoint.unwrap_or_else(|| config.correction.endpoint.clone());
    let corrector = HttpCorrector::new(
        endpoint,
        config.correction.max_length,
        config.correction.timeout_secs,
    )?;

    let rt = tokio::runtime::Runtime::new()?;
    let corrected = rt.block_on(corrector.correct(text))?;
    println!("{corrected}");
    Ok(())
}

fn run_validate(input: &PathBuf) -> anyhow::Result<()> {
    let log = FrameLog::load(input)?;
    log.validate()?;
    println!(
        "OK: {} frames, {} keypoints per hand (format {})",
        log.metadata.frame_count, log.metadata.keypoint_count, log.metadata.format_version
    );
    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let path = Config::default_path();
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    config.save(&path)?;
    println!("Wrote config to {}", path.display());
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::default_path().display());
        }
    }
    Ok(())
}
