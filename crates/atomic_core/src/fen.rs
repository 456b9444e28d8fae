//! Forsyth-Edwards Notation encode/decode.
//!
//! Not required for play; used for test fixtures, debugging, and as the
//! repetition-counting key (the placement substring).

use crate::board::Board;
use crate::game::GameState;
use crate::types::*;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    MissingFields(usize),
    BadPiece(char),
    BadRankCount(usize),
    BadRankWidth(usize),
    BadSideToMove(String),
    BadCastling(char),
    BadEnPassant(String),
    BadClock(String),
}

impl Display for FenError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingFields(n) => write!(f, "expected at least 4 FEN fields, got {n}"),
            Self::BadPiece(c) => write!(f, "invalid piece char {c}"),
            Self::BadRankCount(n) => write!(f, "expected 8 ranks, got {n}"),
            Self::BadRankWidth(n) => write!(f, "rank does not span 8 files (got {n})"),
            Self::BadSideToMove(s) => write!(f, "invalid side to move {s}"),
            Self::BadCastling(c) => write!(f, "invalid castling char {c}"),
            Self::BadEnPassant(s) => write!(f, "invalid en passant square {s}"),
            Self::BadClock(s) => write!(f, "invalid clock value {s}"),
        }
    }
}

impl std::error::Error for FenError {}

fn piece_char(pc: Piece) -> char {
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

fn char_piece(c: char) -> Option<Piece> {
    let color = if c.is_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

/// The piece-placement field alone (ranks 8 down to 1). Used as the
/// repetition key.
pub fn placement(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let mut empties = 0;
        for file in 0..8 {
            match board.piece_at((rank * 8 + file) as u8) {
                None => empties += 1,
                Some(pc) => {
                    if empties > 0 {
                        out.push(char::from_digit(empties, 10).unwrap_or('0'));
                        empties = 0;
                    }
                    out.push(piece_char(pc));
                }
            }
        }
        if empties > 0 {
            out.push(char::from_digit(empties, 10).unwrap_or('0'));
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

pub fn to_fen(state: &GameState) -> String {
    let stm = match state.active_color {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let mut castle = String::new();
    if state.castling.wk {
        castle.push('K');
    }
    if state.castling.wq {
        castle.push('Q');
    }
    if state.castling.bk {
        castle.push('k');
    }
    if state.castling.bq {
        castle.push('q');
    }
    if castle.is_empty() {
        castle.push('-');
    }
    let ep = match state.en_passant {
        Some(sq_) => sq_to_coord(sq_),
        None => "-".to_string(),
    };
    format!(
        "{} {} {} {} {} {}",
        placement(&state.board),
        stm,
        castle,
        ep,
        state.halfmove_clock,
        state.fullmove_number
    )
}

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(FenError::MissingFields(parts.len()));
    }

    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount(ranks.len()));
    }
    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let mut file: i8 = 0;
        let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let pc = char_piece(ch).ok_or(FenError::BadPiece(ch))?;
                let sq_ = sq(file, rank).ok_or(FenError::BadRankWidth(file as usize))?;
                board.set_piece(sq_, Some(pc));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::BadRankWidth(file as usize));
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth(file as usize));
        }
    }

    let active_color = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::BadSideToMove(other.to_string())),
    };

    let mut castling = CastlingRights::none();
    if parts[2] != "-" {
        for c in parts[2].chars() {
            match c {
                'K' => castling.wk = true,
                'Q' => castling.wq = true,
                'k' => castling.bk = true,
                'q' => castling.bq = true,
                _ => return Err(FenError::BadCastling(c)),
            }
        }
    }

    let en_passant = if parts[3] == "-" {
        None
    } else {
        Some(coord_to_sq(parts[3]).ok_or_else(|| FenError::BadEnPassant(parts[3].to_string()))?)
    };

    let halfmove_clock = parts
        .get(4)
        .copied()
        .unwrap_or("0")
        .parse()
        .map_err(|_| FenError::BadClock(parts[4].to_string()))?;
    let fullmove_number = parts
        .get(5)
        .copied()
        .unwrap_or("1")
        .parse()
        .map_err(|_| FenError::BadClock(parts[5].to_string()))?;

    Ok(GameState {
        board,
        active_color,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

impl GameState {
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        to_fen(self)
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
