use super::*;
use crate::game::GameState;

#[test]
fn startpos_has_twenty_moves() {
    let state = GameState::new();
    assert_eq!(all_legal_moves(&state).len(), 20);
    assert!(has_legal_moves(&state));
}

#[test]
fn black_has_twenty_replies_after_e4() {
    let state =
        GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
    assert_eq!(all_legal_moves(&state).len(), 20);
}

#[test]
fn suicidal_capture_is_pseudo_legal_but_filtered() {
    // Qd8xd2 would blow up white's own king on e1.
    let state = GameState::from_fen("3Q3k/8/8/8/8/8/3r4/4K3 w - - 0 1").unwrap();
    assert!(pseudo_moves_from(&state, 59)
        .iter()
        .any(|mv| mv.to == 11 && mv.kind == MoveKind::Capture));
    assert!(!legal_moves_from(&state, 59).iter().any(|mv| mv.to == 11));
}

#[test]
fn exploding_the_enemy_king_is_legal() {
    // Rd1xd8: the blast takes the black king on e8 with it. Legal even
    // though the queen "defends" d8 - there is no board left to punish on.
    let state = GameState::from_fen("3qk3/8/8/8/8/8/8/K2R4 w - - 0 1").unwrap();
    let moves = legal_moves_from(&state, 3);
    let mv = moves
        .iter()
        .find(|mv| mv.to == 59)
        .expect("capture of d8 should be legal");
    assert_eq!(mv.kind, MoveKind::Capture);
    assert_eq!(mv.board.king_sq(Color::Black), None);
    assert!(mv.exploded.contains(&60)); // e8
}

#[test]
fn adjacent_kings_suppress_check() {
    // Black rook a4 "attacks" the white king on e4 along the rank, but
    // the kings on e4/e5 are adjacent, so there is no check at all, and
    // white is free to play moves that ignore the rook entirely.
    let state = GameState::from_fen("Q7/8/8/4k3/r3K3/8/8/8 w - - 0 1").unwrap();
    assert!(!is_atomic_check(&state.board, Color::White));

    // Qa8xa4 is legal; the explosion is nowhere near the white king.
    let moves = legal_moves_from(&state, 56);
    assert!(moves
        .iter()
        .any(|mv| mv.to == 24 && mv.kind == MoveKind::Capture));
}

#[test]
fn check_detection_walks_capture_rays() {
    // Rook on e3 checks the king on e1.
    let state = GameState::from_fen("7k/8/8/8/8/4r3/8/4K3 w - - 0 1").unwrap();
    assert!(is_atomic_check(&state.board, Color::White));
    // Blocked ray: a pawn interposed on e2 cancels it.
    let state = GameState::from_fen("7k/8/8/8/8/4r3/4P3/4K3 w - - 0 1").unwrap();
    assert!(!is_atomic_check(&state.board, Color::White));
}

#[test]
fn missing_kings_never_report_check() {
    let state = GameState::from_fen("8/8/8/8/8/4r3/8/4K3 w - - 0 1").unwrap();
    // No black king on the board: white cannot be in check.
    assert!(!is_atomic_check(&state.board, Color::White));
    assert!(!is_atomic_check(&state.board, Color::Black));
}

#[test]
fn kings_cannot_capture() {
    let state = GameState::from_fen("7k/8/8/8/4p3/4K3/8/8 w - - 0 1").unwrap();
    // The pawn on e4 is adjacent but untakeable.
    assert!(!legal_moves_from(&state, 20).iter().any(|mv| mv.to == 28));
    assert!(!pseudo_moves_from(&state, 20).iter().any(|mv| mv.to == 28));
}

#[test]
fn castling_both_sides_when_clear() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = legal_moves_from(&state, 4);
    assert!(moves
        .iter()
        .any(|mv| mv.kind == MoveKind::CastleKingside && mv.to == 6));
    assert!(moves
        .iter()
        .any(|mv| mv.kind == MoveKind::CastleQueenside && mv.to == 2));
}

#[test]
fn castling_blocked_by_attacked_path() {
    // Black rook f3 covers f1: kingside is off, queenside still works.
    let state = GameState::from_fen("7k/8/8/8/8/5r2/8/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves_from(&state, 4);
    assert!(!moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
    assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));
}

#[test]
fn no_castling_out_of_check() {
    let state = GameState::from_fen("7k/8/8/8/8/4r3/8/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves_from(&state, 4);
    assert!(!moves
        .iter()
        .any(|mv| matches!(mv.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)));
}

#[test]
fn no_castling_without_rights() {
    let state = GameState::from_fen("7k/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    let moves = legal_moves_from(&state, 4);
    assert!(!moves
        .iter()
        .any(|mv| matches!(mv.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)));
}

#[test]
fn rights_invalidation_covers_explosions() {
    // Any touched home square of a rook clears that side, whether the
    // rook moved, was captured, or was swept by a blast.
    let board = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
        .unwrap()
        .board;
    let flags = castling_disables(&board, &[7]); // h1
    assert!(flags.disable_wk && !flags.disable_wq);
    let flags = castling_disables(&board, &[56]); // a8
    assert!(flags.disable_bq && !flags.disable_bk);
    let flags = castling_disables(&board, &[4]); // e1: king clears both
    assert!(flags.disable_wk && flags.disable_wq);
    let flags = castling_disables(&board, &[28]); // empty square
    assert_eq!(flags, MoveFlags::default());
}

#[test]
fn checkmate_detection() {
    // Qg7 supported by Kf6; the black king has no safe square and no
    // piece to throw into an explosion.
    let state = GameState::from_fen("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(is_atomic_check(&state.board, Color::Black));
    assert!(is_checkmate(&state));
    assert!(!is_stalemate(&state));
}

#[test]
fn stalemate_detection() {
    // Qg6 boxes in the bare king without checking it.
    let state = GameState::from_fen("7k/8/6Q1/8/8/8/8/K7 b - - 0 1").unwrap();
    assert!(!is_atomic_check(&state.board, Color::Black));
    assert!(!has_legal_moves(&state));
    assert!(is_stalemate(&state));
    assert!(!is_checkmate(&state));
}

#[test]
fn stalemate_requires_a_king() {
    // Same shape of "no legal moves", but the black king has already
    // been exploded: that is a loss, not a stalemate.
    let state = GameState::from_fen("8/8/8/8/8/8/5p2/K7 b - - 0 1").unwrap();
    assert!(!has_legal_moves(&state));
    assert!(!is_stalemate(&state));
}

#[test]
fn sliding_capture_stops_at_first_occupant() {
    // Rook a1 may take the knight on a4 but not the rook behind it.
    let state = GameState::from_fen("7k/8/8/r7/n7/8/8/R3K3 w - - 0 1").unwrap();
    let moves = legal_moves_from(&state, 0);
    assert!(moves
        .iter()
        .any(|mv| mv.to == 24 && mv.kind == MoveKind::Capture));
    assert!(!moves.iter().any(|mv| mv.to == 32));
}

#[test]
fn double_push_requires_both_squares_empty() {
    // Blocker on e3 kills both the single and the double push.
    let state =
        GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/4n3/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
    let moves = legal_moves_from(&state, 12);
    assert!(!moves.iter().any(|mv| mv.to == 28));
    assert!(!moves.iter().any(|mv| mv.to == 20 && mv.kind == MoveKind::Standard));
}

#[test]
fn en_passant_only_against_live_target() {
    // White pawn e5, black just played d7d5: ep target is d6.
    let state =
        GameState::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .unwrap();
    let moves = legal_moves_from(&state, 36);
    assert!(moves
        .iter()
        .any(|mv| mv.to == 43 && mv.kind == MoveKind::EnPassant));

    // Same position without the target: no en passant.
    let state =
        GameState::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3")
            .unwrap();
    assert!(!legal_moves_from(&state, 36)
        .iter()
        .any(|mv| mv.kind == MoveKind::EnPassant));
}
