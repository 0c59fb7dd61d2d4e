use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameStatus};
use grid_snake::modes::HumanMode;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a fixed grid, in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "25")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "25")]
    height: usize,

    /// Snake moves per second
    #[arg(long, default_value = "10")]
    speed: f32,

    /// Render frames per second
    #[arg(long, default_value = "120")]
    fps: u32,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log file; the terminal itself is taken by the game
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    // Create game configuration from CLI arguments
    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        moves_per_second: cli.speed,
        frame_rate: cli.fps,
        seed: cli.seed,
    };
    config.validate().context("Invalid game configuration")?;
    info!("starting with {config:?}");

    let mut human_mode = HumanMode::new(config);
    let summary = human_mode.run().await?;
    info!("session ended: {summary:?}");

    match summary.status {
        GameStatus::Lost => println!("You lost! Score: {}", summary.score),
        GameStatus::Won => println!("You won! Well played."),
        GameStatus::Running => {}
    }

    Ok(())
}
