use chess_rules::board::{Piece, Square, START_FEN};
use chess_rules::{new_position, Color, FenError, GameStatus, Position, PositionBuilder, SharedPosition};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn new_position_round_trips_encoding() {
    let mut position = new_position(None).unwrap();
    for text in ["d2d4", "g8f6", "c2c4", "e7e6", "b1c3", "f8b4"] {
        position.make_move_text(text).unwrap();
    }
    let encoded = position.encode();
    let restored = new_position(Some(&encoded)).unwrap();
    assert!(restored.same_state(&position));
    assert_eq!(restored.encode(), encoded);
}

#[test]
fn malformed_encodings_are_rejected() {
    for bad in [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
    ] {
        let result = new_position(Some(bad));
        assert!(result.is_err(), "accepted '{bad}'");
    }
    assert!(matches!(
        new_position(Some("8/8/8/8/8/8/8/8 w - - 0 1")),
        Err(FenError::InvalidPosition(_))
    ));
}

#[test]
fn apply_move_rejects_and_leaves_position() {
    let mut position = Position::new();
    let black_reply = {
        let mut scratch = position.clone();
        scratch.make_move_text("e2e4").unwrap();
        scratch.parse_move("e7e5").unwrap()
    };
    assert!(!position.apply_move(black_reply));
    assert_eq!(position.encode(), START_FEN);
    assert!(position.history().is_empty());

    assert!(!position.apply_coords(sq("e1"), sq("e2"), None));
    assert!(position.apply_coords(sq("e2"), sq("e4"), None));
    assert_eq!(position.history().len(), 1);
}

#[test]
fn status_and_notation_after_mate() {
    let mut position = Position::new();
    for text in ["f2f3", "e7e5", "g2g4"] {
        position.make_move_text(text).unwrap();
    }
    let mate = position.parse_move("d8h4").unwrap();
    assert_eq!(position.notate(mate), "Qd8-h4#");
    assert_eq!(position.to_san(mate), "Qh4#");
    assert!(position.apply_move(mate));
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(position.status().is_terminal());
    assert!(position.is_in_check(Color::White));
}

#[test]
fn builder_positions_play_like_decoded_ones() {
    let built = PositionBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .castle_kingside(Color::White)
        .build()
        .unwrap();
    let decoded = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(built.same_state(&decoded));
    assert_eq!(built.perft(3), decoded.perft(3));
}

#[test]
fn shared_position_serializes_access() {
    let game = SharedPosition::new(Position::new());
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 20);
    assert!(game.apply_move(moves[0]));
    assert_eq!(game.lock().history().len(), 1);
    assert!(matches!(game.status(), GameStatus::InProgress { .. }));
}
