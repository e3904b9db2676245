use anyhow::Context;
use clap::Parser;
use log::info;
use solitaire_cards::{
    animation::{Scheduler, SystemClock},
    render::Canvas,
    terminal::{TerminalGuard, TerminalHost},
    CardAnimation, Config,
};
use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

/// Run a terminal card animation: every tap moves on to the next card.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// The path to the configuration file.
    #[clap(short, long, env = "SOLITAIRE_CARDS_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file. The level is taken from RUST_LOG.
    #[clap(long, env = "SOLITAIRE_CARDS_LOG")]
    log_file: Option<PathBuf>,

    /// Validate the configuration and exit.
    #[clap(long)]
    validate_config: bool,
}

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    // the terminal belongs to the animation so logs can only go to a file
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path).with_context(|| format!("loading config from {}", path.display()));
    }
    match Config::default_path() {
        Some(path) if path.exists() => {
            Config::load(&path).with_context(|| format!("loading config from {}", path.display()))
        }
        _ => Ok(Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let config = load_config(&cli)?;
    if cli.validate_config {
        println!("configuration is valid: {} cards", config.palette.colors.len());
        return Ok(());
    }

    let palette_size = config.palette.colors.len();
    let animation = CardAnimation::new(palette_size, &config.animation, Scheduler::new(SystemClock))?;
    info!("animating {palette_size} cards, ticking every {:?}", config.animation.tick_delay());

    let mut host = TerminalHost::new(animation, Canvas::new(&config));
    let mut guard = TerminalGuard::enter().context("setting up terminal")?;
    host.run(&mut guard).context("running animation")
}
