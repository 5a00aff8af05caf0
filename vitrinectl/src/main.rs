use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_config::{CarouselFile, ConfigLoader, ConfigSource, Preset};
use vitrinectl::{Script, replay, report};

#[derive(Parser)]
#[command(
    name = "vitrinectl",
    version,
    about = "Vitrine carousel config checks and input replay"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a carousel config through every layer and report the result
    Check {
        /// TOML or JSON config document
        config: PathBuf,
        #[arg(long)]
        env_file: Option<PathBuf>,
        /// Start from a named preset instead of the one in the file
        #[arg(long)]
        preset: Option<Preset>,
        /// Print the effective configuration as TOML
        #[arg(long)]
        print: bool,
    },
    /// Replay a timed input script against a fresh engine
    Replay {
        script: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        preset: Option<Preset>,
        /// Emit one JSON object per outcome
        #[arg(long)]
        json: bool,
        /// Interleave synthetic frames every N milliseconds
        #[arg(long, value_name = "MS")]
        frame_ms: Option<u64>,
    },
    /// List the built-in presets
    Presets,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            config,
            env_file,
            preset,
            print,
        } => check(config, env_file, preset, print),
        Command::Replay {
            script,
            config,
            preset,
            json,
            frame_ms,
        } => run_replay(script, config, preset, json, frame_ms),
        Command::Presets => {
            for preset in Preset::ALL {
                println!("{:<10} {}", preset.name(), preset.description());
            }
            Ok(())
        }
    }
}

fn check(
    config: PathBuf,
    env_file: Option<PathBuf>,
    preset: Option<Preset>,
    print: bool,
) -> Result<()> {
    let mut loader = ConfigLoader::new()
        .without_discovery()
        .with_config_path(&config);
    if let Some(env_file) = env_file {
        loader = loader.with_env_file(env_file);
    }
    if let Some(preset) = preset {
        loader = loader.with_preset(preset);
    }
    let load = loader
        .load()
        .with_context(|| format!("config {} rejected", config.display()))?;

    let source = match &load.metadata.source {
        ConfigSource::Default => "defaults".to_string(),
        other => other
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    };
    println!("ok: {source}");
    if let Some(preset) = load.metadata.preset {
        println!("preset: {preset}");
    }
    if !load.metadata.env_overrides.is_empty() {
        println!("env: {}", load.metadata.env_overrides.join(", "));
    }
    for warning in load.warnings.iter() {
        println!("warning: {}", warning.message);
        if let Some(hint) = &warning.hint {
            println!("  hint: {hint}");
        }
    }
    if print {
        let doc = CarouselFile::from_config(&load.config)
            .to_toml()
            .context("failed to render config")?;
        print!("{doc}");
    }
    Ok(())
}

fn run_replay(
    path: PathBuf,
    config: Option<PathBuf>,
    preset: Option<Preset>,
    json: bool,
    frame_ms: Option<u64>,
) -> Result<()> {
    let script = Script::from_path(&path)?;

    let mut loader = ConfigLoader::new().without_discovery();
    if let Some(config) = config {
        loader = loader.with_config_path(config);
    }
    if let Some(preset) = preset.or(script.preset) {
        loader = loader.with_preset(preset);
    }
    let load = loader.load().context("carousel config rejected")?;

    let summary = replay(&script, load.config, frame_ms)
        .with_context(|| format!("replay of {} failed", path.display()))?;
    if json {
        for record in &summary.records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        for record in &summary.records {
            println!("{}", report::line(record));
        }
        println!("{}", report::summary(&summary));
    }
    Ok(())
}
