//! Static per-piece movement and capture geometry.
//!
//! Everything here is data, not behavior: step-vector tables with a max
//! step count, plus the fixed castling and double-push geometry. The
//! legality oracle is one uniform ray-walking algorithm parameterized by
//! these tables, rather than per-piece dispatch.

use crate::board::KING_DELTAS;
use crate::types::*;

/// Step vectors and how far they may be repeated. Sliding pieces carry
/// `steps: 7` (unbounded on an 8x8 board); king, knight and pawn are
/// single-step.
#[derive(Clone, Copy, Debug)]
pub struct MovePattern {
    pub steps: u8,
    pub deltas: &'static [(i8, i8)],
}

const ORTHO_DELTAS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAG_DELTAS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const WHITE_PAWN_PUSH: [(i8, i8); 1] = [(0, 1)];
const BLACK_PAWN_PUSH: [(i8, i8); 1] = [(0, -1)];
const WHITE_PAWN_CAPTURES: [(i8, i8); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_CAPTURES: [(i8, i8); 2] = [(-1, -1), (1, -1)];

/// How a piece relocates onto empty squares.
pub fn move_pattern(pc: Piece) -> MovePattern {
    match pc.kind {
        PieceKind::King => MovePattern {
            steps: 1,
            deltas: &KING_DELTAS,
        },
        PieceKind::Queen => MovePattern {
            steps: 7,
            deltas: &KING_DELTAS,
        },
        PieceKind::Bishop => MovePattern {
            steps: 7,
            deltas: &DIAG_DELTAS,
        },
        PieceKind::Knight => MovePattern {
            steps: 1,
            deltas: &KNIGHT_DELTAS,
        },
        PieceKind::Rook => MovePattern {
            steps: 7,
            deltas: &ORTHO_DELTAS,
        },
        PieceKind::Pawn => MovePattern {
            steps: 1,
            deltas: match pc.color {
                Color::White => &WHITE_PAWN_PUSH,
                Color::Black => &BLACK_PAWN_PUSH,
            },
        },
    }
}

/// How a piece captures. Differs from `move_pattern` for pawns (diagonal
/// only) and for the king: a king may move but never capture, because the
/// resulting explosion would detonate next to itself, so its capture
/// vector set is empty.
pub fn capture_pattern(pc: Piece) -> MovePattern {
    match pc.kind {
        PieceKind::King => MovePattern {
            steps: 1,
            deltas: &[],
        },
        PieceKind::Pawn => MovePattern {
            steps: 1,
            deltas: match pc.color {
                Color::White => &WHITE_PAWN_CAPTURES,
                Color::Black => &BLACK_PAWN_CAPTURES,
            },
        },
        _ => move_pattern(pc),
    }
}

/// Fixed king/rook paths for one castle, plus the squares that must be
/// empty between them and the squares the king passes through (which must
/// not be attacked).
#[derive(Clone, Copy, Debug)]
pub struct CastleGeometry {
    pub king_from: u8,
    pub king_to: u8,
    pub rook_from: u8,
    pub rook_to: u8,
    pub between: &'static [u8],
    pub king_path: &'static [u8],
}

const WHITE_KINGSIDE: CastleGeometry = CastleGeometry {
    king_from: 4,  // e1
    king_to: 6,    // g1
    rook_from: 7,  // h1
    rook_to: 5,    // f1
    between: &[5, 6],
    king_path: &[5, 6],
};
const WHITE_QUEENSIDE: CastleGeometry = CastleGeometry {
    king_from: 4, // e1
    king_to: 2,   // c1
    rook_from: 0, // a1
    rook_to: 3,   // d1
    between: &[3, 2, 1],
    king_path: &[3, 2],
};
const BLACK_KINGSIDE: CastleGeometry = CastleGeometry {
    king_from: 60, // e8
    king_to: 62,   // g8
    rook_from: 63, // h8
    rook_to: 61,   // f8
    between: &[61, 62],
    king_path: &[61, 62],
};
const BLACK_QUEENSIDE: CastleGeometry = CastleGeometry {
    king_from: 60, // e8
    king_to: 58,   // c8
    rook_from: 56, // a8
    rook_to: 59,   // d8
    between: &[59, 58, 57],
    king_path: &[59, 58],
};

pub fn castle_geometry(color: Color, side: CastleSide) -> &'static CastleGeometry {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => &WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => &BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => &BLACK_QUEENSIDE,
    }
}

pub fn pawn_dir(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

pub fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// For a pawn on its starting rank: the skipped square and the
/// destination of a double step. None elsewhere.
pub fn double_push(color: Color, from: u8) -> Option<(u8, u8)> {
    if rank_of(from) != pawn_start_rank(color) {
        return None;
    }
    let f = file_of(from);
    let r = rank_of(from);
    let dir = pawn_dir(color);
    let between = sq(f, r + dir)?;
    let to = sq(f, r + 2 * dir)?;
    Some((between, to))
}

pub const PROMOTABLE_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod patterns_tests;
