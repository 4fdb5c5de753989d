//! Omok engine CLI
//!
//! Drives the engine from the terminal: self-play games, a walkthrough of
//! tactical scenarios, and a view of the forbidden-move overlay.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Strength};
use omok::{AIEngine, Board, EngineConfig, Game, MoveResult, PlaceOutcome, Pos, SearchType, Stone, BOARD_SIZE};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Selfplay {
            seed,
            black,
            white,
            max_moves,
            verbose,
        } => run_selfplay(config, seed, black, white, max_moves, verbose),
        Command::Demo => run_demo(config),
        Command::Overlay => run_overlay(),
    }
}

/// Engine against itself until a win, a double pass or the move cap
fn run_selfplay(
    config: EngineConfig,
    seed: Option<u64>,
    black: Strength,
    white: Strength,
    max_moves: usize,
    verbose: bool,
) -> Result<()> {
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    info!(?config, ?black, ?white, max_moves, "starting self-play");
    let mut engine = AIEngine::with_config(config);
    let mut game = Game::new();
    let mut passes = 0;

    while game.history().len() < max_moves && !game.is_over() {
        let color = game.current_turn();
        let strength = if color == Stone::Black { black } else { white };

        match game.ai_move_with(&mut engine, strength.is_deep())? {
            Some((pos, outcome)) => {
                passes = 0;
                if verbose {
                    println!("{color} plays {pos}\n{}", game.board());
                }
                if let PlaceOutcome::Won { winner, line } = outcome {
                    println!("{winner} wins after {} moves", game.history().len());
                    if let Some(line) = line {
                        let cells: Vec<String> = line.iter().map(Pos::to_string).collect();
                        println!("Winning line: {}", cells.join(" "));
                    }
                }
            }
            None => {
                warn!(%color, "no move available, passing");
                game.pass_turn();
                passes += 1;
                if passes >= 2 {
                    break;
                }
            }
        }
    }

    if !game.is_over() {
        println!("No winner after {} moves", game.history().len());
    }
    println!("{}", game.board());
    Ok(())
}

fn report(label: &str, result: &MoveResult, expected: Option<Pos>, expected_type: SearchType) {
    println!("--- {label} ---");
    match result.best_move {
        Some(m) => println!("  Plays: {m}"),
        None => println!("  No move found"),
    }
    println!("  Search type: {:?}", result.search_type);
    println!("  Score: {}, nodes: {}, time: {}ms", result.score, result.nodes, result.time_ms);
    let pass = result.search_type == expected_type && (expected.is_none() || result.best_move == expected);
    println!("  Result: {}\n", if pass { "PASS" } else { "DIFFERENT" });
}

/// Tactical scenarios, one per tier of the cascade
fn run_demo(config: EngineConfig) -> Result<()> {
    let mut engine = AIEngine::with_config(config);

    println!("===========================================");
    println!("       Omok engine scenarios");
    println!("===========================================\n");

    let mut board = Board::new();
    let result = engine.get_move_with_stats(&mut board, Stone::Black, Stone::White, true);
    report("Empty board", &result, Some(Pos::CENTER), SearchType::Center);

    let mut board = Board::new();
    for c in 0..4 {
        board.place_stone(Pos::new(9, c), Stone::White);
    }
    board.place_stone(Pos::new(10, 5), Stone::Black);
    let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, true);
    report("White completes five", &result, Some(Pos::new(9, 4)), SearchType::ImmediateWin);

    let result = engine.get_move_with_stats(&mut board, Stone::Black, Stone::White, true);
    report("Black blocks the four", &result, Some(Pos::new(9, 4)), SearchType::Block);

    let mut board = Board::new();
    for c in 8..11 {
        board.place_stone(Pos::new(9, c), Stone::Black);
    }
    board.place_stone(Pos::new(8, 8), Stone::White);
    let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, true);
    report("White stops an open three", &result, None, SearchType::DefendForce);

    let mut board = Board::new();
    for &(r, c) in &[(9, 8), (9, 10), (8, 9), (10, 9)] {
        board.place_stone(Pos::new(r, c), Stone::Black);
    }
    for &(r, c) in &[(3, 3), (15, 15), (3, 15), (15, 3)] {
        board.place_stone(Pos::new(r, c), Stone::White);
    }
    let result = engine.get_move_with_stats(&mut board, Stone::Black, Stone::White, true);
    let avoided = result.best_move != Some(Pos::CENTER);
    report("Black avoids a double-three", &result, None, SearchType::Maximin);
    println!("  Double-three at {} avoided: {avoided}\n", Pos::CENTER);

    Ok(())
}

/// Scripted opening, then the board with Black's forbidden cells marked
fn run_overlay() -> Result<()> {
    let mut game = Game::new();
    let opening = [(9, 8), (5, 5), (9, 10), (5, 13), (8, 9), (13, 5), (10, 9), (13, 13)];
    for (r, c) in opening {
        game.place_at(r, c)?;
    }

    let overlay = game.overlay();
    println!("Forbidden cells for black: {}", overlay.forbidden_count());
    for (pos, kind) in overlay.iter_forbidden() {
        println!("  {pos}: {kind}");
    }
    println!();

    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{c:2}");
    }
    println!();
    for pos in Pos::all() {
        if pos.col == 0 {
            print!("{:2} ", pos.row);
        }
        let mark = match (game.board().get(pos), overlay.get(pos).is_forbidden()) {
            (Stone::Black, _) => " X",
            (Stone::White, _) => " O",
            (Stone::Empty, true) => " #",
            (Stone::Empty, false) => " .",
        };
        print!("{mark}");
        if pos.col as usize == BOARD_SIZE - 1 {
            println!();
        }
    }
    Ok(())
}
