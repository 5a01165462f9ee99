use gridlock::{
    unique_reachable_cells, Board, Cell, Coord, Game, GameOutcome, Move, Player, BOARD_SIZE,
};

fn coord(text: &str) -> Coord {
    Coord::parse(text).unwrap()
}

fn board_with(pieces: &[(&str, Cell)]) -> Board {
    let mut encoded = vec!['.'; 49];
    for (text, cell) in pieces {
        let c = coord(text);
        encoded[c.row * 7 + c.col] = cell.to_char();
    }
    Board::from_string(&encoded.into_iter().collect::<String>()).unwrap()
}

#[test]
fn legality_matches_the_rule_for_every_coordinate_pair() {
    let board = board_with(&[
        ("c3", Cell::X),
        ("c4", Cell::O),
        ("g7", Cell::X),
        ("a1", Cell::O),
    ]);

    for fr in 0..BOARD_SIZE {
        for fc in 0..BOARD_SIZE {
            for tr in 0..BOARD_SIZE {
                for tc in 0..BOARD_SIZE {
                    let from = Coord { row: fr, col: fc };
                    let to = Coord { row: tr, col: tc };
                    let mv = Move::new(from, to);

                    for player in [Player::X, Player::O] {
                        let expected = from.manhattan_distance(to) == 1
                            && board.is_empty(to)
                            && board.get(from) == player.to_cell();
                        assert_eq!(
                            board.is_legal_move(player, mv),
                            expected,
                            "disagreement for {player}: {mv}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn apply_move_never_mutates_and_rejects_illegal_moves() {
    let board = board_with(&[("c3", Cell::X), ("e5", Cell::O)]);
    let snapshot = board;

    // Legal move
    let next = board
        .apply_move(Player::X, Move::new(coord("c3"), coord("c2")))
        .unwrap();
    assert_eq!(board, snapshot);
    assert_eq!(next.get(coord("c2")), Cell::X);

    // Diagonal, long, zero-distance, wrong-owner: all rejected, board intact
    for (from, to, player) in [
        ("c3", "d4", Player::X),
        ("c3", "c5", Player::X),
        ("c3", "c3", Player::X),
        ("e5", "e4", Player::X),
    ] {
        assert!(board
            .apply_move(player, Move::new(coord(from), coord(to)))
            .is_err());
        assert_eq!(board, snapshot);
    }
}

#[test]
fn reachable_cells_dedupe_and_order() {
    // Two pieces flanking d4 share it as a reachable cell
    let board = board_with(&[("d3", Cell::X), ("d5", Cell::X)]);
    let cells = unique_reachable_cells(&board, Player::X);

    assert_eq!(cells.iter().filter(|&&c| c == coord("d4")).count(), 1);
    // d3 discovers c3, e3, d2, d4; d5 adds c5, e5, d6
    assert_eq!(
        cells,
        vec![
            coord("c3"),
            coord("e3"),
            coord("d2"),
            coord("d4"),
            coord("c5"),
            coord("e5"),
            coord("d6"),
        ]
    );
}

#[test]
fn immobilization_loses_and_budget_scoring_decides_otherwise() {
    // Session-level checks of both end conditions.
    let open = board_with(&[("d4", Cell::X), ("a1", Cell::O)]);
    let game = Game::new(open, 1).unwrap();
    assert!(!game.is_immobilized(Player::X));
    assert_eq!(game.final_score(), (4, 2));
    assert_eq!(game.outcome(), GameOutcome::Win(Player::X));

    let boxed = board_with(&[
        ("a1", Cell::X),
        ("g7", Cell::X),
        ("a2", Cell::O),
        ("b1", Cell::O),
    ]);
    let game = Game::new(boxed, 1).unwrap();
    // a1 is stuck but g7 can still move
    assert!(!game.is_immobilized(Player::X));

    // Four X pieces boxed into the corner by four O pieces
    let fully_boxed = board_with(&[
        ("a1", Cell::X),
        ("a2", Cell::X),
        ("b1", Cell::X),
        ("b2", Cell::X),
        ("a3", Cell::O),
        ("b3", Cell::O),
        ("c1", Cell::O),
        ("c2", Cell::O),
    ]);
    let game = Game::new(fully_boxed, 1).unwrap();
    assert!(game.is_immobilized(Player::X));
    assert!(!game.is_immobilized(Player::O));
}

#[test]
fn board_text_roundtrip_and_rejection() {
    let board = board_with(&[("a1", Cell::X), ("d4", Cell::O)]);
    let encoded = board.encode();
    assert_eq!(Board::from_string(&encoded).unwrap(), board);

    assert!(Board::from_string("X.O").is_err());
    assert!(Board::from_string(&"?".repeat(49)).is_err());

    for text in ["h1", "a8", "", "d", "dd4"] {
        assert!(Coord::parse(text).is_err(), "expected rejection of '{text}'");
    }
}
