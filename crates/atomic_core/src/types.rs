//! Core vocabulary: colors, piece kinds, squares, move kinds and flags.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Pieces are values, not identities: the engine only ever asks
/// "what occupies this square", never "where did this piece go".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// The closed set of move kinds the legality oracle can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Standard,
    DoublePush,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

impl MoveKind {
    /// Captures and en passant detonate; everything else relocates quietly.
    pub fn explodes(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// Derived per-move flags, computed by the legality oracle and consumed
/// by the game state machine when committing a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub pawn_move: bool,
    pub capture: bool,
    pub promotion: bool,
    pub double_push: bool,
    pub disable_wk: bool,
    pub disable_wq: bool,
    pub disable_bk: bool,
    pub disable_bq: bool,
}

/// Per color, two independent booleans. Monotonically decreasing within
/// a game: once cleared, never re-set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    /// AND-out rights from a move's disable flags.
    pub fn disable(&mut self, flags: &MoveFlags) {
        self.wk &= !flags.disable_wk;
        self.wq &= !flags.disable_wq;
        self.bk &= !flags.disable_bk;
        self.bq &= !flags.disable_bq;
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.wk,
            (Color::White, CastleSide::Queenside) => self.wq,
            (Color::Black, CastleSide::Kingside) => self.bk,
            (Color::Black, CastleSide::Queenside) => self.bq,
        }
    }
}

// Square helpers. Squares are 0..63, rank-major: a1 = 0, h1 = 7, a8 = 56.
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}

/// Build a square from (file, rank), yielding None for anything off the
/// board. Off-board arithmetic is a normal loop-termination condition,
/// never a wrapped index.
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
