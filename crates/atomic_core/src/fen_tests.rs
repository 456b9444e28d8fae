use super::*;

#[test]
fn startpos_round_trip() {
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let state = parse_fen(start).unwrap();
    assert_eq!(state, GameState::new());
    assert_eq!(to_fen(&state), start);
}

#[test]
fn empty_board_placement() {
    assert_eq!(placement(&Board::empty()), "8/8/8/8/8/8/8/8");
}

#[test]
fn mid_game_round_trip() {
    let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
    let state = GameState::from_fen(fen).unwrap();
    assert_eq!(state.en_passant, Some(43)); // d6
    assert_eq!(state.fullmove_number, 3);
    assert_eq!(state.to_fen(), fen);
}

#[test]
fn clocks_default_when_omitted() {
    let state = parse_fen("8/8/8/8/8/8/8/K6k w - -").unwrap();
    assert_eq!(state.halfmove_clock, 0);
    assert_eq!(state.fullmove_number, 1);
}

#[test]
fn partial_castling_rights() {
    let state = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    assert!(state.castling.wk && !state.castling.wq);
    assert!(!state.castling.bk && state.castling.bq);
    assert_eq!(state.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8/8"),
        Err(FenError::MissingFields(1))
    );
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
        Err(FenError::BadPiece('x'))
    );
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::BadRankCount(7))
    );
    assert!(matches!(
        parse_fen("8/8/8/8/8/8/8/9 w - - 0 1"),
        Err(FenError::BadRankWidth(_))
    ));
    assert!(matches!(
        parse_fen("8/8/8/8/8/8/8/6k2 w - - 0 1"),
        Err(FenError::BadRankWidth(_))
    ));
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8/8 white - - 0 1"),
        Err(FenError::BadSideToMove("white".to_string()))
    );
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8/8 w X - 0 1"),
        Err(FenError::BadCastling('X'))
    );
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8/8 w - e9 0 1"),
        Err(FenError::BadEnPassant("e9".to_string()))
    );
    assert_eq!(
        parse_fen("8/8/8/8/8/8/8/8 w - - ten 1"),
        Err(FenError::BadClock("ten".to_string()))
    );
}
