use cozy_chess::Board;
use plybot::collect::perft::PerftCounter;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn perft_startpos_small_depths() {
    let b = Board::default();
    let mut counter = PerftCounter::new();
    counter.generate_game_tree(&b, 4);
    assert_eq!(counter.nodes_at_ply(1), 20);
    assert_eq!(counter.nodes_at_ply(2), 400);
    assert_eq!(counter.nodes_at_ply(3), 8902);
    assert_eq!(counter.nodes_at_ply(4), 197281);
    assert_eq!(counter.leaves(), 197281);
}

#[test]
fn perft_counts_every_ply_not_just_leaves() {
    let b = Board::from_fen(KIWIPETE, false).expect("valid fen");
    let mut counter = PerftCounter::new();
    counter.generate_game_tree(&b, 3);
    assert_eq!(counter.per_ply(), &[0, 48, 2039, 97862]);
}

#[test]
fn perft_depth_zero_counts_nothing() {
    let b = Board::default();
    let mut counter = PerftCounter::new();
    counter.generate_game_tree(&b, 0);
    assert_eq!(counter.per_ply(), &[0]);
    assert_eq!(counter.leaves(), 0);
}

#[test]
fn perft_resets_between_calls() {
    let b = Board::default();
    let mut counter = PerftCounter::new();
    counter.generate_game_tree(&b, 3);
    counter.generate_game_tree(&b, 2);
    assert_eq!(counter.max_depth(), 2);
    assert_eq!(counter.per_ply(), &[0, 20, 400]);
}
