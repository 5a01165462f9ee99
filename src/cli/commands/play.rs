//! Play command - an interactive game against the tree-search engine

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    cli::output::{print_kv, print_section},
    engine::choose_move,
    game::{setup, unique_reachable_cells, Board, Coord, Game, GameOutcome, Move, Player},
};

/// Invalid inputs tolerated before a turn's input is abandoned
const MAX_INPUT_RETRIES: usize = 5;

/// How the initial pieces are placed
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Placement {
    /// Random empty cells (seedable)
    Random,
    /// Coordinates typed one piece at a time
    Manual,
}

/// Which side the human plays
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Number of pieces per side
    #[arg(long, default_value_t = 4)]
    pub pieces: usize,

    /// Turn budget per player
    #[arg(long, default_value_t = 5)]
    pub turns: u32,

    /// Initial placement mode
    #[arg(long, value_enum, default_value = "random")]
    pub placement: Placement,

    /// Side the human plays (X always moves first)
    #[arg(long, value_enum, default_value = "x")]
    pub human: Side,

    /// Random seed for reproducible placement
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = Player::from(args.human);

    let board = match args.placement {
        Placement::Random => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            setup::random_board(args.pieces, &mut rng)?
        }
        Placement::Manual => read_manual_board(args.pieces)?,
    };

    let mut game = Game::new(board, args.turns)?;

    for _round in 0..args.turns {
        for side in [Player::X, Player::O] {
            println!("\n{}\n", game.board());

            if game.is_immobilized(side) {
                println!("{side} has no legal move. {} wins!", side.opponent());
                return Ok(());
            }

            if side == human {
                let mv = prompt_move(&game, side)?;
                game.play_move(side, mv)?;
                println!("You move the piece at {} to {}", mv.from, mv.to);
            } else {
                match choose_move(game.board(), side, game.turns_remaining(side)) {
                    Some(mv) => {
                        game.play_move(side, mv)?;
                        println!("Computer moves the piece at {} to {}", mv.from, mv.to);
                    }
                    None => {
                        println!("{side} has no legal move. {} wins!", side.opponent());
                        return Ok(());
                    }
                }
            }
        }
    }

    println!("\n{}\n", game.board());
    report_final_score(&game);
    Ok(())
}

/// Read a manually placed board, one coordinate per piece, X first.
fn read_manual_board(pieces_per_side: usize) -> Result<Board> {
    let mut board = Board::new();
    for player in [Player::X, Player::O] {
        for piece in 1..=pieces_per_side {
            println!("\n{}\n", board);
            let coord = prompt_coordinate(
                &board,
                &format!("Coordinates for piece {player}-{piece} (e.g. a1): "),
            )?;
            board = setup::place_piece(&board, player, coord)?;
        }
    }
    Ok(board)
}

/// Prompt for an empty cell, re-prompting iteratively up to the retry cap.
fn prompt_coordinate(board: &Board, prompt: &str) -> Result<Coord> {
    for _ in 0..MAX_INPUT_RETRIES {
        let line = read_line(prompt)?;
        match Coord::parse(&line) {
            Ok(coord) if board.is_empty(coord) => return Ok(coord),
            Ok(coord) => println!("Cell {coord} is already occupied. Try again."),
            Err(e) => println!("{e}. Try again."),
        }
    }
    Err(anyhow!("too many invalid inputs"))
}

/// Prompt for a legal move, re-prompting iteratively up to the retry cap.
fn prompt_move(game: &Game, player: Player) -> Result<Move> {
    for _ in 0..MAX_INPUT_RETRIES {
        let line = read_line(&format!("{player} to move (from and to, e.g. 'c4 c5'): "))?;
        match parse_move(&line) {
            Ok(mv) if game.board().is_legal_move(player, mv) => return Ok(mv),
            Ok(mv) => println!("Illegal move: {} to {}. Try again.", mv.from, mv.to),
            Err(e) => println!("{e}. Try again."),
        }
    }
    Err(anyhow!("too many invalid inputs"))
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}

fn parse_move(line: &str) -> crate::error::Result<Move> {
    let mut parts = line.split_whitespace();
    let from = Coord::parse(parts.next().unwrap_or(""))?;
    let to = Coord::parse(parts.next().unwrap_or(""))?;
    if parts.next().is_some() {
        return Err(crate::Error::InvalidCoordinate {
            text: line.trim().to_string(),
        });
    }
    Ok(Move::new(from, to))
}

fn report_final_score(game: &Game) {
    print_section("Final score");

    let x_cells = unique_reachable_cells(game.board(), Player::X);
    let o_cells = unique_reachable_cells(game.board(), Player::O);
    println!("X can move to \"{}\"", format_cells(&x_cells));
    println!("O can move to \"{}\"", format_cells(&o_cells));
    print_kv("X reachable cells", &x_cells.len().to_string());
    print_kv("O reachable cells", &o_cells.len().to_string());

    match game.outcome() {
        GameOutcome::Win(player) => println!("\n{player} wins!"),
        GameOutcome::Draw => println!("\nThe game is a draw."),
    }
}

fn format_cells(cells: &[Coord]) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
