//! # Creature Tamers Main Entry Point
//!
//! Parses the command line, sets up logging, builds the game state and hands
//! it to the scene manager.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use std::path::PathBuf;
use tamers::{config, GameConfig, GameState, InputHandler, SceneManager, TamersResult};

/// Command line arguments for Creature Tamers.
#[derive(Parser, Debug)]
#[command(name = "tamers")]
#[command(about = "Explore a field, battle wild creatures and catch them")]
#[command(version)]
struct Args {
    /// Random seed for creature spawns and battles
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulation rate in ticks per second
    #[arg(long)]
    ticks_per_second: Option<u32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_string(),
        window_width: config::FIELD_WIDTH,
        window_height: config::FIELD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> TamersResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Creature Tamers v{}", tamers::VERSION);

    if let Err(e) = run_game(&args).await {
        error!("Game aborted: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Initializes `env_logger`, letting `RUST_LOG` override the CLI level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Builds the configuration from file and flags.
fn load_config(args: &Args) -> TamersResult<GameConfig> {
    let mut game_config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };

    if args.seed.is_some() {
        game_config.seed = args.seed;
    }
    if let Some(tps) = args.ticks_per_second {
        game_config.ticks_per_second = tps;
    }
    game_config.validate()?;
    Ok(game_config)
}

/// Runs the game until the player quits.
async fn run_game(args: &Args) -> TamersResult<()> {
    let game_config = load_config(args)?;

    request_new_screen_size(game_config.field_width as f32, game_config.field_height as f32);

    let game_state = GameState::new(game_config)?;
    let mut scene_manager = SceneManager::new(game_state, InputHandler::new());
    scene_manager.run().await?;

    info!("Game loop ended");
    Ok(())
}
