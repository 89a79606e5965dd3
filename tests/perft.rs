use chessrules::{perft, Board, Color, Game};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PerftCase {
    name: String,
    board: String,
    turn: String,
    depth: u32,
    nodes: u64,
}

fn test_perft_file(path: &str, node_limit: u64) {
    let mut reader = csv::Reader::from_path(path).expect("failed to open test suite");

    for record in reader.deserialize() {
        let case: PerftCase = record.expect("invalid perft record");
        println!("{} depth {}: {}", case.name, case.depth, case.nodes);

        if case.nodes > node_limit {
            continue;
        }

        let board: Board = case.board.parse().expect("invalid board");
        let turn: Color = case.turn.parse().expect("invalid turn");
        let mut game = Game::from_board(board, turn);
        assert_eq!(perft(&mut game, case.depth), case.nodes, "{}", case.name);
        assert_eq!(game.history_len(), 0);
    }
}

#[test]
fn test_perft() {
    test_perft_file("tests/perft.csv", 100_000);
}

#[test]
#[ignore]
fn test_perft_deep() {
    test_perft_file("tests/perft.csv", u64::MAX);
}
