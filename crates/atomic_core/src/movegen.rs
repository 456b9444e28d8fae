//! The legality oracle: pseudo-legal candidate enumeration per square and
//! move kind, materialized into full [`MoveResult`]s and filtered by the
//! atomic king-safety predicate.
//!
//! Every candidate is evaluated on a disposable board copy; the
//! authoritative game state is never touched here.

use crate::board::Board;
use crate::explosion::{
    apply_capture, apply_castle, apply_en_passant, apply_standard, can_promote_at,
};
use crate::game::GameState;
use crate::patterns::{capture_pattern, castle_geometry, double_push, move_pattern};
use crate::types::*;

/// The per-move output: resulting board, explosion list and derived
/// flags. A value object, discarded after the caller consumes it.
#[derive(Clone, Debug)]
pub struct MoveResult {
    pub from: u8,
    pub to: u8,
    pub piece: Piece,
    pub kind: MoveKind,
    pub board: Board,
    /// Squares vacated by the detonation, origin included. Empty for
    /// non-capturing moves.
    pub exploded: Vec<u8>,
    pub flags: MoveFlags,
    /// Skipped square to expose for en passant, set only on double pushes.
    pub en_passant_target: Option<u8>,
}

// Ray walking. `ray_between` yields the empty squares reachable before
// the first occupant; `ray_last` yields the first occupant itself.

fn ray_between(board: &Board, from: u8, (df, dr): (i8, i8), steps: u8) -> Vec<u8> {
    let mut out = Vec::new();
    let mut f = file_of(from) + df;
    let mut r = rank_of(from) + dr;
    for _ in 0..steps {
        let Some(to) = sq(f, r) else { break };
        if board.piece_at(to).is_some() {
            break;
        }
        out.push(to);
        f += df;
        r += dr;
    }
    out
}

fn ray_last(board: &Board, from: u8, (df, dr): (i8, i8), steps: u8) -> Option<u8> {
    let mut f = file_of(from) + df;
    let mut r = rank_of(from) + dr;
    for _ in 0..steps {
        let to = sq(f, r)?;
        if board.piece_at(to).is_some() {
            return Some(to);
        }
        f += df;
        r += dr;
    }
    None
}

/// Would a king of `color` standing on `sq_` be under atomic attack?
///
/// Walks each enemy kind's capture vectors backward from the square up to
/// the kind's step limit; the first occupant encountered must be exactly
/// that enemy piece. Two overrides specific to atomic chess: adjacency to
/// the enemy king means no attack at all (kings can never capture, so
/// king-vs-king proximity is never check), and a missing enemy king means
/// the game is already decided, so nothing counts as an attack.
pub fn is_attacked_for_king(board: &Board, sq_: u8, color: Color) -> bool {
    let enemy = color.other();
    let Some(enemy_king) = board.king_sq(enemy) else {
        return false;
    };
    if Board::is_adjacent(sq_, enemy_king) {
        return false;
    }
    for kind in [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ] {
        let pc = Piece::new(enemy, kind);
        let pat = capture_pattern(pc);
        for &(df, dr) in pat.deltas {
            if let Some(found) = ray_last(board, sq_, (-df, -dr), pat.steps)
                && board.piece_at(found) == Some(pc)
            {
                return true;
            }
        }
    }
    false
}

/// Atomic check: the king is present and under atomic attack.
pub fn is_atomic_check(board: &Board, color: Color) -> bool {
    match board.king_sq(color) {
        Some(king) => is_attacked_for_king(board, king, color),
        None => false,
    }
}

/// King-safety predicate applied to every candidate's resulting board:
/// the mover's king must still exist and must not be under atomic attack.
pub fn is_legal_position(board: &Board, color: Color) -> bool {
    board.king_sq(color).is_some() && !is_atomic_check(board, color)
}

/// Castling-right invalidation as a pure function of the pre-move board
/// and the squares a move touched (origins, destinations, explosions).
/// A touched king clears both of its color's rights; a touched rook on
/// its home square clears that side. Invoked uniformly for every move
/// kind, so rights are lost identically whether a rook moves, is
/// captured, or is swept away by an explosion.
pub fn castling_disables(pre: &Board, touched: &[u8]) -> MoveFlags {
    let mut flags = MoveFlags::default();
    for &sq_ in touched {
        let Some(pc) = pre.piece_at(sq_) else { continue };
        match (pc.color, pc.kind) {
            (Color::White, PieceKind::King) => {
                flags.disable_wk = true;
                flags.disable_wq = true;
            }
            (Color::Black, PieceKind::King) => {
                flags.disable_bk = true;
                flags.disable_bq = true;
            }
            (color, PieceKind::Rook) => {
                for side in [CastleSide::Kingside, CastleSide::Queenside] {
                    if sq_ == castle_geometry(color, side).rook_from {
                        match (color, side) {
                            (Color::White, CastleSide::Kingside) => flags.disable_wk = true,
                            (Color::White, CastleSide::Queenside) => flags.disable_wq = true,
                            (Color::Black, CastleSide::Kingside) => flags.disable_bk = true,
                            (Color::Black, CastleSide::Queenside) => flags.disable_bq = true,
                        }
                    }
                }
            }
            _ => {}
        }
    }
    flags
}

/// All pseudo-legal candidates from one square, not yet filtered for
/// king safety.
pub fn pseudo_moves_from(state: &GameState, from: u8) -> Vec<MoveResult> {
    let mut out = Vec::new();
    let Some(pc) = state.board.piece_at(from) else {
        return out;
    };
    if pc.color != state.active_color {
        return out;
    }
    castle_candidates(state, from, pc, CastleSide::Kingside, &mut out);
    castle_candidates(state, from, pc, CastleSide::Queenside, &mut out);
    double_push_candidates(state, from, pc, &mut out);
    en_passant_candidates(state, from, pc, &mut out);
    capture_candidates(state, from, pc, &mut out);
    standard_candidates(state, from, pc, &mut out);
    out
}

/// Candidates from one square that survive the king-safety filter.
pub fn legal_moves_from(state: &GameState, from: u8) -> Vec<MoveResult> {
    let mut moves = pseudo_moves_from(state, from);
    moves.retain(|mv| is_legal_position(&mv.board, state.active_color));
    moves
}

/// Every legal move for the active color.
pub fn all_legal_moves(state: &GameState) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for from in 0..64 {
        out.extend(legal_moves_from(state, from));
    }
    out
}

pub fn has_legal_moves(state: &GameState) -> bool {
    (0..64).any(|from| !legal_moves_from(state, from).is_empty())
}

/// Checkmate for the active color: attacked king and no legal moves.
pub fn is_checkmate(state: &GameState) -> bool {
    is_atomic_check(&state.board, state.active_color) && !has_legal_moves(state)
}

/// Stalemate for the active color: safe king, no legal moves, and the
/// king still on the board. A missing king is an explosion loss, scored
/// as a win for the opponent, never a stalemate.
pub fn is_stalemate(state: &GameState) -> bool {
    !is_atomic_check(&state.board, state.active_color)
        && state.board.king_sq(state.active_color).is_some()
        && !has_legal_moves(state)
}

fn standard_candidates(state: &GameState, from: u8, pc: Piece, out: &mut Vec<MoveResult>) {
    let pat = move_pattern(pc);
    for &delta in pat.deltas {
        for to in ray_between(&state.board, from, delta, pat.steps) {
            let board = apply_standard(&state.board, from, to);
            let mut flags = castling_disables(&state.board, &[from, to]);
            flags.pawn_move = pc.kind == PieceKind::Pawn;
            flags.promotion = can_promote_at(&board, to);
            out.push(MoveResult {
                from,
                to,
                piece: pc,
                kind: MoveKind::Standard,
                board,
                exploded: Vec::new(),
                flags,
                en_passant_target: None,
            });
        }
    }
}

fn capture_candidates(state: &GameState, from: u8, pc: Piece, out: &mut Vec<MoveResult>) {
    let pat = capture_pattern(pc);
    for &delta in pat.deltas {
        let Some(to) = ray_last(&state.board, from, delta, pat.steps) else {
            continue;
        };
        let is_enemy = state
            .board
            .piece_at(to)
            .is_some_and(|found| found.color != pc.color);
        if !is_enemy {
            continue;
        }
        let (board, exploded) = apply_capture(&state.board, from, to);
        let mut flags = castling_disables(&state.board, &exploded);
        flags.capture = true;
        flags.pawn_move = pc.kind == PieceKind::Pawn;
        out.push(MoveResult {
            from,
            to,
            piece: pc,
            kind: MoveKind::Capture,
            board,
            exploded,
            flags,
            en_passant_target: None,
        });
    }
}

fn double_push_candidates(state: &GameState, from: u8, pc: Piece, out: &mut Vec<MoveResult>) {
    if pc.kind != PieceKind::Pawn {
        return;
    }
    let Some((between, to)) = double_push(pc.color, from) else {
        return;
    };
    if state.board.piece_at(between).is_some() || state.board.piece_at(to).is_some() {
        return;
    }
    let board = apply_standard(&state.board, from, to);
    let flags = MoveFlags {
        pawn_move: true,
        double_push: true,
        ..MoveFlags::default()
    };
    out.push(MoveResult {
        from,
        to,
        piece: pc,
        kind: MoveKind::DoublePush,
        board,
        exploded: Vec::new(),
        flags,
        en_passant_target: Some(between),
    });
}

fn en_passant_candidates(state: &GameState, from: u8, pc: Piece, out: &mut Vec<MoveResult>) {
    if pc.kind != PieceKind::Pawn {
        return;
    }
    let Some(target) = state.en_passant else {
        return;
    };
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in capture_pattern(pc).deltas {
        let Some(to) = sq(f + df, r + dr) else { continue };
        if to != target {
            continue;
        }
        let (board, exploded) = apply_en_passant(&state.board, from, to);
        let mut flags = castling_disables(&state.board, &exploded);
        flags.capture = true;
        flags.pawn_move = true;
        out.push(MoveResult {
            from,
            to,
            piece: pc,
            kind: MoveKind::EnPassant,
            board,
            exploded,
            flags,
            en_passant_target: None,
        });
    }
}

fn castle_candidates(
    state: &GameState,
    from: u8,
    pc: Piece,
    side: CastleSide,
    out: &mut Vec<MoveResult>,
) {
    if pc.kind != PieceKind::King {
        return;
    }
    let color = pc.color;
    let geo = castle_geometry(color, side);
    if from != geo.king_from || !state.castling.has(color, side) {
        return;
    }
    // King and rook must both sit on their home squares.
    if state.board.piece_at(geo.rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
        return;
    }
    if geo
        .between
        .iter()
        .any(|&sq_| state.board.piece_at(sq_).is_some())
    {
        return;
    }
    // Cannot castle out of check, and the king's path (destination
    // included) must be unattacked. The only move kind held to "no square
    // attacked" rather than merely "destination safe".
    if is_atomic_check(&state.board, color) {
        return;
    }
    if geo
        .king_path
        .iter()
        .any(|&sq_| is_attacked_for_king(&state.board, sq_, color))
    {
        return;
    }
    let board = apply_castle(&state.board, color, side);
    let flags = castling_disables(
        &state.board,
        &[geo.king_from, geo.king_to, geo.rook_from, geo.rook_to],
    );
    out.push(MoveResult {
        from,
        to: geo.king_to,
        piece: pc,
        kind: match side {
            CastleSide::Kingside => MoveKind::CastleKingside,
            CastleSide::Queenside => MoveKind::CastleQueenside,
        },
        board,
        exploded: Vec::new(),
        flags,
        en_passant_target: None,
    });
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
