//! Reversi GUI and headless runner
//!
//! Without arguments a window opens with the human on Black and the engine
//! on White. `--headless` plays an engine-vs-engine game in the terminal and
//! prints the move record as JSON.

use anyhow::Result;
use clap::Parser;
use log::info;
use serde_json::json;

use reversi::config::{DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH};
use reversi::ui::ReversiApp;
use reversi::{GameConfig, GameState, SeatControl};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Reversi against an alpha-beta engine", long_about = None)]
struct Args {
    /// Who plays Black
    #[arg(long, value_enum, default_value_t = SeatControl::Human)]
    black: SeatControl,

    /// Who plays White
    #[arg(long, value_enum, default_value_t = SeatControl::Agent)]
    white: SeatControl,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH,
          value_parser = clap::value_parser!(u8).range(MIN_DEPTH as i64..=MAX_DEPTH as i64))]
    depth: u8,

    /// Play engine against engine without a window (both seats become agents,
    /// `--black` and `--white` are ignored)
    #[arg(long)]
    headless: bool,
}

impl Args {
    /// Seat configuration for the selected mode
    fn game_config(&self) -> GameConfig {
        if self.headless {
            GameConfig::agents(self.depth)
        } else {
            GameConfig::new(self.black, self.white, self.depth)
        }
    }
}

fn run_headless(config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config);

    while !game.is_over() {
        game = game.play_agent_turn()?;
    }

    let (black, white) = game.score();
    info!("game over after {} plies: {}", game.history().len() - 1, game.turn_message());

    let report = json!({
        "config": game.config(),
        "moves": game.move_table(),
        "status": game.status(),
        "score": { "black": black, "white": white },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = args.game_config();

    if args.headless {
        if args.black != SeatControl::Agent || args.white != SeatControl::Agent {
            info!("headless mode: both seats played by the engine");
        }
        return run_headless(config);
    }

    info!("starting GUI: black={:?} white={:?} depth={}", config.black, config.white, config.depth);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(move |cc| Ok(Box::new(ReversiApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
