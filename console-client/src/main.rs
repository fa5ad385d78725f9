mod config;
mod controls;
mod input;
mod surface;

use std::io::stdout;

use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::execute;

use duel_engine::config::{ConfigFile, Validate};
use duel_engine::game::{Competition, GridSurface, SessionRng};
use duel_engine::logger;

use config::ClientConfig;
use controls::ControlMap;
use surface::TerminalSurface;

#[derive(Parser)]
#[command(name = "snake-duel", about = "Two-player snake duel in the terminal")]
struct Args {
    /// Path to the YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed; identical seeds replay identical games
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured grid side length
    #[arg(long)]
    grid_cells: Option<u32>,

    /// Override the configured tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Override the configured winning body length
    #[arg(long)]
    win_length: Option<usize>,

    /// Log simulation events to stderr (redirect with 2>duel.log)
    #[arg(long)]
    verbose: bool,
}

/// Restores the terminal no matter how the game ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        logger::init_logger(None);
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let mut client_config: ClientConfig = ConfigFile::new(&config_path).load_or_default()?;

    if let Some(cells) = args.grid_cells {
        client_config.competition.grid_cells = cells;
    }
    if let Some(tick_ms) = args.tick_ms {
        client_config.competition.tick_interval_ms = tick_ms;
    }
    if let Some(win_length) = args.win_length {
        client_config.competition.win_length = win_length;
    }
    client_config.validate()?;

    let control_map = ControlMap::from_config(&client_config)?;
    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let grid = client_config.competition.grid();
    let (columns, rows) = terminal::size()?;
    surface::layout_check(grid, columns, rows)?;

    let guard = TerminalGuard::enter()?;

    let mut left = TerminalSurface::new(
        grid,
        0,
        0,
        surface::random_snake_color(&mut rng),
        client_config.player_one.name.clone(),
    );
    let mut right = TerminalSurface::new(
        grid,
        surface::board_width(grid) + surface::BOARD_GAP,
        0,
        surface::random_snake_color(&mut rng),
        client_config.player_two.name.clone(),
    );
    left.draw_frame()?;
    right.draw_frame()?;
    execute!(
        stdout(),
        MoveTo(0, surface::board_height(grid)),
        Print("Esc quits"),
    )?;

    let names = [
        client_config.player_one.name.clone(),
        client_config.player_two.name.clone(),
    ];
    let surfaces: [Box<dyn GridSurface>; 2] = [Box::new(left), Box::new(right)];
    let competition = Competition::new(&client_config.competition, names, surfaces, rng)?;

    let (command_sender, command_receiver) = tokio::sync::mpsc::unbounded_channel();
    let (quit_sender, mut quit_receiver) = tokio::sync::mpsc::unbounded_channel();
    let _input_thread = input::spawn_input_thread(control_map, command_sender, quit_sender);

    let mut game = tokio::spawn(competition.run(command_receiver));
    let outcome = tokio::select! {
        result = &mut game => Some(result?),
        _ = quit_receiver.recv() => {
            game.abort();
            None
        }
    };

    drop(guard);

    match outcome {
        Some(outcome) => {
            println!("{} has won!", outcome.winner_name);
            for entry in &outcome.scores {
                println!("  {}: score {}, length {}", entry.name, entry.score, entry.length);
            }
        }
        None => println!("Game aborted."),
    }

    Ok(())
}
