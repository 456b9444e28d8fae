use crate::types::*;
use std::fmt;

/// A total mapping from square to occupant. Exactly one king per color is
/// expected in a well-formed in-progress game, but the board tolerates
/// zero kings of either color (the explosion-win state): every query
/// treats a missing king as "not found", never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board(pub [Option<Piece>; 64]);

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Board {
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// Standard symmetric opening placement.
    pub fn startpos() -> Self {
        let mut b = Board([None; 64]);

        // Pawns
        for f in 0..8 {
            b.0[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.0[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.0[f] = Some(Piece::new(Color::White, kind));
            b.0[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.0[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.0[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.0[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    /// The up-to-8 geometrically adjacent squares, each individually
    /// validated against the board edge.
    pub fn neighbors(sq_: u8) -> impl Iterator<Item = u8> {
        let f = file_of(sq_);
        let r = rank_of(sq_);
        KING_DELTAS
            .iter()
            .filter_map(move |&(df, dr)| sq(f + df, r + dr))
    }

    pub fn is_adjacent(a: u8, b: u8) -> bool {
        let df = (file_of(a) - file_of(b)).abs();
        let dr = (rank_of(a) - rank_of(b)).abs();
        df <= 1 && dr <= 1 && (df, dr) != (0, 0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let ch = match self.0[(rank * 8 + file) as usize] {
                    None => '.',
                    Some(pc) => {
                        let c = match pc.kind {
                            PieceKind::Pawn => 'p',
                            PieceKind::Knight => 'n',
                            PieceKind::Bishop => 'b',
                            PieceKind::Rook => 'r',
                            PieceKind::Queen => 'q',
                            PieceKind::King => 'k',
                        };
                        match pc.color {
                            Color::White => c.to_ascii_uppercase(),
                            Color::Black => c,
                        }
                    }
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
