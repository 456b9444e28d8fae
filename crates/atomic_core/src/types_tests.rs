use super::*;

#[test]
fn coord_round_trip() {
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h1"), Some(7));
    assert_eq!(coord_to_sq("e4"), Some(28));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(sq_to_coord(28), "e4");
    assert_eq!(sq_to_coord(63), "h8");
}

#[test]
fn coord_rejects_garbage() {
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("e"), None);
    assert_eq!(coord_to_sq("e44"), None);
}

#[test]
fn sq_arithmetic_never_wraps() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(-1, 0), None);
    assert_eq!(sq(8, 3), None);
    assert_eq!(sq(3, -2), None);
    assert_eq!(sq(5, 8), None);
}

#[test]
fn castling_rights_only_decrease() {
    let mut rights = CastlingRights::all();
    let flags = MoveFlags {
        disable_wk: true,
        ..MoveFlags::default()
    };
    rights.disable(&flags);
    assert!(!rights.wk);
    assert!(rights.wq && rights.bk && rights.bq);

    // A later move without disable flags must not restore anything.
    rights.disable(&MoveFlags::default());
    assert!(!rights.wk);
    assert!(rights.wq && rights.bk && rights.bq);
}

#[test]
fn color_other() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::Black.other(), Color::White);
}
