//! Pure board-copy-in/board-copy-out mutation primitives, one per move
//! kind. These apply an already-decided move; they never judge legality.
//!
//! Atomic rule: every capture detonates. The capturing piece
//! self-destructs along with the captured piece, and every non-pawn
//! occupant of the eight squares adjacent to the destination is cleared.
//! Pawns are explosion-immune as bystanders but still die as the direct
//! captured or capturing piece.

use crate::board::Board;
use crate::patterns::{castle_geometry, promotion_rank};
use crate::types::*;

/// Adjacent squares whose occupant would be destroyed by a detonation at
/// `sq`: occupied, and not by a pawn.
pub fn surrounding_explosions(board: &Board, sq_: u8) -> Vec<u8> {
    Board::neighbors(sq_)
        .filter(|&adj| match board.piece_at(adj) {
            Some(pc) => pc.kind != PieceKind::Pawn,
            None => false,
        })
        .collect()
}

/// Relocate from -> to on a copy. No explosion.
pub fn apply_standard(board: &Board, from: u8, to: u8) -> Board {
    let mut result = board.clone();
    let pc = result.piece_at(from);
    result.set_piece(from, None);
    result.set_piece(to, pc);
    result
}

/// Capture on `to`: the mover vanishes from its origin, the victim
/// vanishes from the destination, and the blast clears the non-pawn
/// neighborhood. Returns the copy and every square the detonation
/// emptied.
pub fn apply_capture(board: &Board, from: u8, to: u8) -> (Board, Vec<u8>) {
    let mut result = board.clone();
    // Vacate the origin first so an adjacent capturer is not listed twice.
    result.set_piece(from, None);
    let mut exploded = vec![from, to];
    exploded.extend(surrounding_explosions(&result, to));
    for &sq_ in &exploded {
        result.set_piece(sq_, None);
    }
    (result, exploded)
}

/// En passant: identical blast semantics to a capture, except the victim
/// sits beside the destination, on the capturing pawn's starting rank.
/// The destination itself still ends empty; the capturing pawn detonates
/// like any other capturer.
pub fn apply_en_passant(board: &Board, from: u8, to: u8) -> (Board, Vec<u8>) {
    let mut result = board.clone();
    result.set_piece(from, None);
    let mut exploded = vec![from, to];
    if let Some(victim) = sq(file_of(to), rank_of(from)) {
        exploded.push(victim);
    }
    exploded.extend(surrounding_explosions(&result, to));
    for &sq_ in &exploded {
        result.set_piece(sq_, None);
    }
    (result, exploded)
}

/// Castle: relocate king and rook along their fixed paths. The only move
/// kind touching two origin/destination pairs, and never an explosion.
pub fn apply_castle(board: &Board, color: Color, side: CastleSide) -> Board {
    let geo = castle_geometry(color, side);
    let mut result = board.clone();
    let king = result.piece_at(geo.king_from);
    let rook = result.piece_at(geo.rook_from);
    result.set_piece(geo.king_from, None);
    result.set_piece(geo.rook_from, None);
    result.set_piece(geo.king_to, king);
    result.set_piece(geo.rook_to, rook);
    result
}

/// A pawn sitting on its farthest rank is promotion-eligible.
pub fn can_promote_at(board: &Board, sq_: u8) -> bool {
    match board.piece_at(sq_) {
        Some(pc) => pc.kind == PieceKind::Pawn && rank_of(sq_) == promotion_rank(pc.color),
        None => false,
    }
}

#[cfg(test)]
#[path = "explosion_tests.rs"]
mod explosion_tests;
