use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use thumbox_core::console::Thumby;
use thumbox_games::registry;
use tracing::{Level, info};
use tracing_subscriber::util::SubscriberInitExt;

mod config;
mod input;
mod runner;
mod screenshot;
mod video;

use crate::config::Config;
use crate::input::KeyMap;
use crate::runner::RunOptions;

#[derive(Parser)]
#[command(name = "thumbox")]
#[command(version, about = "Run handheld console games in a desktop window", long_about = None)]
struct Cli {
    /// Game to run (see --list)
    #[arg(default_value = "pong")]
    game: String,

    /// Window pixels per console pixel
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: Option<u32>,

    /// Frame rate override, 0 for uncapped
    #[arg(long)]
    fps: Option<u32>,

    /// Config file (default: <config dir>/thumbox/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root directory for save data
    #[arg(long)]
    saves_dir: Option<PathBuf>,

    /// List available games and exit
    #[arg(long)]
    list: bool,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn setup_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .finish()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    if cli.list {
        for entry in registry::all() {
            println!("{:<12} {}", entry.name, entry.title);
        }
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if let Some(dir) = cli.saves_dir {
        config.saves_dir = dir;
    }
    if config.scale == 0 {
        bail!("scale must be at least 1");
    }
    let key_map = KeyMap::from_bindings(&config.keys).context("resolving [keys]")?;

    let Some(entry) = registry::find(&cli.game) else {
        bail!(
            "unknown game {:?}; available: {}",
            cli.game,
            registry::names().join(", ")
        );
    };

    let mut thumby = Thumby::new(&config.saves_dir);
    let mut game = (entry.create)(&mut thumby)
        .with_context(|| format!("starting {}", entry.name))?;
    info!(game = entry.name, saves = %config.saves_dir.display(), "starting");

    let options = RunOptions {
        name: entry.name,
        title: entry.title,
        scale: config.scale,
        fps: cli.fps,
        screenshot_dir: config.screenshot_dir,
    };
    runner::run(game.as_mut(), &mut thumby, &key_map, &options)
}
