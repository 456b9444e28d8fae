//! Atomic chess rules engine.
//!
//! In atomic chess every capture detonates: the capturing piece, the
//! captured piece, and all non-pawn pieces on the eight squares around
//! the destination are destroyed. This crate decides move legality under
//! those rules, computes resulting boards, maintains the persistent game
//! state (castling rights, en passant, clocks), and detects terminal
//! states. Rendering, input handling and animation live in the consuming
//! front-end, driven entirely by the returned [`MoveResult`]s.

pub mod board;
pub mod explosion;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod patterns;
pub mod types;

// Re-export the engine surface
pub use board::*;
pub use explosion::*;
pub use fen::*;
pub use game::*;
pub use movegen::*;
pub use patterns::*;
pub use types::*;
