//! Atomic chess terminal front-end.
//!
//! Thin shell over `atomic_core`: reads coordinate moves from stdin,
//! prints the board, and optionally plays one side with a random mover
//! and records a JSON transcript. All rules live in the engine; this
//! binary only consumes `MoveResult`s.

use atomic_core::{
    all_legal_moves, coord_to_sq, sq_to_coord, AtomicGame, Color, GameOver, MoveKind, MoveResult,
    PieceKind,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};

/// One transcript line, written out with `--save`.
#[derive(Debug, Clone, Serialize)]
struct MoveEntry {
    ply: u32,
    color: String,
    from: String,
    to: String,
    kind: String,
    exploded: Vec<String>,
    promoted_to: Option<String>,
}

struct Options {
    random_side: Option<Color>,
    repetition_rule: bool,
    save_path: Option<String>,
}

fn print_usage() {
    println!("Atomic Chess");
    println!();
    println!("Usage:");
    println!("  atomic_cli [--random white|black] [--repetition] [--save FILE]");
    println!();
    println!("Commands:");
    println!("  e2e4         play a move (from/to coordinates)");
    println!("  moves e2     list legal destinations from a square");
    println!("  board        reprint the board");
    println!("  fen          print the current position as FEN");
    println!("  quit         exit");
}

fn parse_args() -> Option<Options> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Options {
        random_side: None,
        repetition_rule: false,
        save_path: None,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--random" | "-r" => {
                i += 1;
                match args.get(i).map(|s| s.as_str()) {
                    Some("white") => opts.random_side = Some(Color::White),
                    Some("black") => opts.random_side = Some(Color::Black),
                    _ => {
                        eprintln!("Error: --random requires 'white' or 'black'");
                        return None;
                    }
                }
            }
            "--repetition" => opts.repetition_rule = true,
            "--save" | "-s" => {
                i += 1;
                match args.get(i) {
                    Some(path) => opts.save_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --save requires a file path");
                        return None;
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                return None;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return None;
            }
        }
        i += 1;
    }
    Some(opts)
}

fn color_name(c: Color) -> &'static str {
    match c {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn kind_name(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Standard => "move",
        MoveKind::DoublePush => "double push",
        MoveKind::Capture => "capture",
        MoveKind::EnPassant => "en passant",
        MoveKind::CastleKingside => "kingside castle",
        MoveKind::CastleQueenside => "queenside castle",
    }
}

fn record(transcript: &mut Vec<MoveEntry>, ply: u32, mover: Color, mv: &MoveResult) {
    transcript.push(MoveEntry {
        ply,
        color: color_name(mover).to_string(),
        from: sq_to_coord(mv.from),
        to: sq_to_coord(mv.to),
        kind: kind_name(mv.kind).to_string(),
        exploded: mv.exploded.iter().copied().map(sq_to_coord).collect(),
        promoted_to: None,
    });
}

fn announce(mv: &MoveResult) {
    println!(
        "{} {} {}{}",
        color_name(mv.piece.color),
        kind_name(mv.kind),
        sq_to_coord(mv.from),
        sq_to_coord(mv.to)
    );
    if !mv.exploded.is_empty() {
        let squares: Vec<String> = mv.exploded.iter().copied().map(sq_to_coord).collect();
        println!("  exploded: {}", squares.join(" "));
    }
}

fn announce_game_over(result: GameOver) {
    match result {
        GameOver::WhiteWin => println!("Game over: white wins"),
        GameOver::BlackWin => println!("Game over: black wins"),
        GameOver::Draw => println!("Game over: draw"),
        GameOver::Stalemate => println!("Game over: stalemate"),
    }
}

/// Ask the user for a promotion piece on stdin.
fn prompt_promotion(lines: &mut impl Iterator<Item = io::Result<String>>) -> PieceKind {
    loop {
        print!("promote to (q/r/b/n): ");
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => return PieceKind::Queen,
        };
        match line.trim() {
            "q" => return PieceKind::Queen,
            "r" => return PieceKind::Rook,
            "b" => return PieceKind::Bishop,
            "n" => return PieceKind::Knight,
            _ => println!("enter one of q, r, b, n"),
        }
    }
}

fn list_moves(game: &AtomicGame, coord: &str) {
    let Some(from) = coord_to_sq(coord) else {
        println!("bad square: {}", coord);
        return;
    };
    let dests = game.legal_destinations_from(from);
    if dests.is_empty() {
        println!("no legal moves from {}", coord);
        return;
    }
    let quiet: Vec<String> = dests
        .iter()
        .filter(|(_, capture)| !capture)
        .map(|&(to, _)| sq_to_coord(to))
        .collect();
    let captures: Vec<String> = dests
        .iter()
        .filter(|(_, capture)| *capture)
        .map(|&(to, _)| sq_to_coord(to))
        .collect();
    if !quiet.is_empty() {
        println!("moves:    {}", quiet.join(" "));
    }
    if !captures.is_empty() {
        println!("captures: {}", captures.join(" "));
    }
}

/// Pick a uniformly random legal move for the side to move.
fn random_move(game: &AtomicGame) -> Option<(u8, u8)> {
    let moves = all_legal_moves(game.state());
    moves.choose(&mut thread_rng()).map(|mv| (mv.from, mv.to))
}

fn save_transcript(path: &str, transcript: &[MoveEntry]) {
    match serde_json::to_string_pretty(transcript) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                eprintln!("Failed to write {}: {}", path, e);
            } else {
                println!("Transcript saved to {}", path);
            }
        }
        Err(e) => eprintln!("Failed to serialize transcript: {}", e),
    }
}

fn main() {
    let Some(opts) = parse_args() else {
        return;
    };

    let mut game = if opts.repetition_rule {
        AtomicGame::with_repetition_rule()
    } else {
        AtomicGame::new()
    };
    let mut transcript: Vec<MoveEntry> = Vec::new();
    let mut ply: u32 = 0;

    println!("{}", game.state().board);
    println!("{} to move (type 'quit' to exit)", color_name(game.state().active_color));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Let the random opponent move first if it owns the turn.
        if game.game_over().is_none() && opts.random_side == Some(game.state().active_color) {
            let mover = game.state().active_color;
            if let Some((from, to)) = random_move(&game) {
                if let Some(mv) = game.try_move(from, to) {
                    ply += 1;
                    announce(&mv);
                    record(&mut transcript, ply, mover, &mv);
                    if let Some(sq_) = game.pending_promotion() {
                        // The random mover always takes a queen.
                        game.promote(sq_, PieceKind::Queen);
                        if let Some(entry) = transcript.last_mut() {
                            entry.promoted_to = Some("queen".to_string());
                        }
                    }
                    println!("{}", game.state().board);
                }
            }
        }

        if let Some(result) = game.game_over() {
            announce_game_over(result);
            break;
        }

        print!("{}> ", color_name(game.state().active_color));
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "quit" | "exit" => break,
            "board" => println!("{}", game.state().board),
            "fen" => println!("{}", game.state().to_fen()),
            "moves" => {
                if parts.len() < 2 {
                    println!("usage: moves <square>");
                } else {
                    list_moves(&game, parts[1]);
                }
            }
            "help" => print_usage(),
            coord if coord.len() == 4 && coord.is_ascii() => {
                let (Some(from), Some(to)) = (coord_to_sq(&coord[0..2]), coord_to_sq(&coord[2..4]))
                else {
                    println!("bad move: {}", coord);
                    continue;
                };
                let mover = game.state().active_color;
                match game.try_move(from, to) {
                    None => println!("illegal move: {}", coord),
                    Some(mv) => {
                        ply += 1;
                        announce(&mv);
                        record(&mut transcript, ply, mover, &mv);
                        if let Some(sq_) = game.pending_promotion() {
                            let kind = prompt_promotion(&mut lines);
                            game.promote(sq_, kind);
                            if let Some(entry) = transcript.last_mut() {
                                entry.promoted_to = Some(format!("{:?}", kind).to_lowercase());
                            }
                        }
                        println!("{}", game.state().board);
                    }
                }
            }
            other => println!("unknown command: {} (try 'help')", other),
        }
    }

    if let Some(path) = opts.save_path.as_deref() {
        save_transcript(path, &transcript);
    }
}
