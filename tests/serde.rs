#![cfg(feature = "serde")]

use chessrules::{Board, CastlingMode, Color, Game, Move, Position, Role};

#[test]
fn test_vocabulary_json() {
    assert_eq!(serde_json::to_string(&Position::E4).unwrap(), r#""e4""#);
    assert_eq!(
        serde_json::from_str::<Position>(r#""h8""#).unwrap(),
        Position::H8
    );
    assert!(serde_json::from_str::<Position>(r#""i9""#).is_err());

    assert_eq!(serde_json::to_string(&Color::Black).unwrap(), r#""black""#);
    assert_eq!(serde_json::to_string(&Role::Knight).unwrap(), r#""knight""#);
    assert_eq!(
        serde_json::to_string(&CastlingMode::KingOrRook).unwrap(),
        r#""king-or-rook""#
    );
}

#[test]
fn test_board_json() {
    let board = Board::new();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#""rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR""#);
    assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    assert!(serde_json::from_str::<Board>(r#""8/8""#).is_err());
}

#[test]
fn test_move_json() {
    let m: Move = serde_json::from_str(r#"{"from":"b7","to":"b8","promotion":"rook"}"#).unwrap();
    assert_eq!(m, Move::promoting(Position::B7, Position::B8, Role::Rook));
    assert!(!m.is_castle());

    let m: Move = serde_json::from_str(r#"{"from":"e1","to":"g1","castle":true}"#).unwrap();
    assert!(m.is_castle());
}

#[test]
fn test_game_round_trip() {
    let mut game = Game::new();
    for (from, to) in [
        (Position::E2, Position::E4),
        (Position::D7, Position::D5),
        (Position::E4, Position::E5),
        (Position::F7, Position::F5),
    ] {
        game.make_move(Move::new(from, to)).unwrap();
    }

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);

    // History survives: en passant and undo both still work.
    assert!(restored
        .valid_moves(Position::E5)
        .unwrap()
        .contains(&Move::new(Position::E5, Position::F6)));
    assert_eq!(
        restored.undo_move(),
        Some(Move::new(Position::F7, Position::F5))
    );
    assert_eq!(restored.history_len(), 3);
}
