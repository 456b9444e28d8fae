//! The game state machine: owns the one authoritative position, applies
//! confirmed-legal moves, and derives terminal states.

use crate::board::Board;
use crate::fen::placement;
use crate::movegen::{self, MoveResult};
use crate::patterns::PROMOTABLE_KINDS;
use crate::types::*;
use std::collections::HashMap;

/// The persistent position. Mutated exclusively by [`AtomicGame`] after a
/// move is confirmed legal; the legality oracle only ever sees it behind
/// a shared reference and works on board copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active_color: Color,
    pub castling: CastlingRights,
    /// Square skipped by the immediately preceding double step. At most
    /// one double step can occur per ply, so a single optional value
    /// suffices; it is cleared unconditionally on every commit before
    /// the new move's target (if any) is applied.
    pub en_passant: Option<u8>,
    /// Plies since the last pawn move or capture; draw trigger at 50.
    pub halfmove_clock: u32,
    /// Increments after Black completes a move.
    pub fullmove_number: u32,
}

impl GameState {
    /// The standard opening position.
    pub fn new() -> Self {
        GameState {
            board: Board::startpos(),
            active_color: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal game states. Explosion of a king is a win for the surviving
/// side, reported as `WhiteWin`/`BlackWin` like checkmate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOver {
    WhiteWin,
    BlackWin,
    Draw,
    Stalemate,
}

/// The engine's stateful entry point. Accepts moves, tracks a pending
/// promotion choice, and latches the terminal state (absorbing: once the
/// game is over no further moves are accepted).
#[derive(Clone, Debug)]
pub struct AtomicGame {
    state: GameState,
    pending_promotion: Option<u8>,
    over: Option<GameOver>,
    /// Piece-placement occurrence counts, present only when the optional
    /// threefold-repetition rule is enabled.
    repetition: Option<HashMap<String, u32>>,
}

impl AtomicGame {
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Same engine with the threefold-repetition draw rule switched on.
    /// The rule is an explicit toggle, not a default: positions are
    /// counted by piece-placement string from this point onward.
    pub fn with_repetition_rule() -> Self {
        let mut game = Self::new();
        game.repetition = Some(HashMap::new());
        game.record_position();
        game
    }

    /// Start from an arbitrary position (test fixtures, analysis).
    pub fn from_state(state: GameState) -> Self {
        let mut game = AtomicGame {
            state,
            pending_promotion: None,
            over: None,
            repetition: None,
        };
        game.over = game.derive_game_over();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Square awaiting a promotion choice, if any. While set, only
    /// [`promote`](Self::promote) is accepted.
    pub fn pending_promotion(&self) -> Option<u8> {
        self.pending_promotion
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.over
    }

    /// The sole state-mutating move entry point. Returns the applied
    /// move's result, or None for any rejection — in which case the game
    /// state is left byte-for-byte unchanged.
    pub fn try_move(&mut self, from: u8, to: u8) -> Option<MoveResult> {
        if self.over.is_some() || self.pending_promotion.is_some() {
            return None;
        }
        let mv = movegen::legal_moves_from(&self.state, from)
            .into_iter()
            .find(|mv| mv.to == to)?;
        self.commit(&mv);
        Some(mv)
    }

    /// Legal destination squares from one square, for UI highlighting.
    /// Each destination is paired with whether the move is a capture, so
    /// callers can style the two classes differently.
    pub fn legal_destinations_from(&self, from: u8) -> Vec<(u8, bool)> {
        if self.over.is_some() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        movegen::legal_moves_from(&self.state, from)
            .iter()
            .map(|mv| (mv.to, mv.flags.capture))
            .collect()
    }

    /// Resolve a pending promotion by overwriting the pawn in place. The
    /// turn already switched when the triggering move was committed.
    /// Returns false (and changes nothing) unless a promotion is pending
    /// on exactly this square with an admissible piece kind.
    pub fn promote(&mut self, square: u8, kind: PieceKind) -> bool {
        if self.pending_promotion != Some(square) || !PROMOTABLE_KINDS.contains(&kind) {
            return false;
        }
        let Some(pawn) = self.state.board.piece_at(square) else {
            return false;
        };
        self.state
            .board
            .set_piece(square, Some(Piece::new(pawn.color, kind)));
        self.pending_promotion = None;
        self.record_position();
        self.over = self.derive_game_over();
        true
    }

    fn commit(&mut self, mv: &MoveResult) {
        let mover = self.state.active_color;
        self.state.board = mv.board.clone();

        if mv.flags.pawn_move || mv.flags.capture {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.state.fullmove_number += 1;
        }
        self.state.castling.disable(&mv.flags);
        self.state.en_passant = mv.en_passant_target;
        self.state.active_color = mover.other();

        if mv.flags.promotion {
            // Terminal evaluation waits for the promotion choice; the
            // position is not final until the new piece is on the board.
            self.pending_promotion = Some(mv.to);
        } else {
            self.record_position();
            self.over = self.derive_game_over();
        }
    }

    fn record_position(&mut self) {
        if let Some(counts) = self.repetition.as_mut() {
            *counts.entry(placement(&self.state.board)).or_insert(0) += 1;
        }
    }

    fn is_threefold(&self) -> bool {
        let Some(counts) = self.repetition.as_ref() else {
            return false;
        };
        counts
            .get(&placement(&self.state.board))
            .is_some_and(|&n| n >= 3)
    }

    fn is_win(&self, color: Color) -> bool {
        let enemy = color.other();
        if self.state.board.king_sq(enemy).is_none() {
            return true;
        }
        enemy == self.state.active_color && movegen::is_checkmate(&self.state)
    }

    fn derive_game_over(&self) -> Option<GameOver> {
        if self.state.halfmove_clock >= 50 || self.is_threefold() {
            return Some(GameOver::Draw);
        }
        if movegen::is_stalemate(&self.state) {
            return Some(GameOver::Stalemate);
        }
        if self.is_win(Color::White) {
            return Some(GameOver::WhiteWin);
        }
        if self.is_win(Color::Black) {
            return Some(GameOver::BlackWin);
        }
        None
    }
}

impl Default for AtomicGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
