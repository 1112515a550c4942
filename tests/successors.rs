use cozy_chess::Board;
use plybot::board::cozy::Position;
use plybot::collect::successors::SuccessorBoards;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

#[test]
fn successor_count_equals_legal_move_count() {
    for fen in ["startpos", KIWIPETE] {
        let pos = Position::parse(fen).expect("valid position");
        let mut succ = SuccessorBoards::new();
        succ.generate_game_tree(pos.board());
        assert_eq!(succ.positions().len(), pos.legal_moves_count(), "FEN {fen}");
    }
}

#[test]
fn stalemate_has_no_successors() {
    let pos = Position::parse(STALEMATE).expect("valid position");
    let mut succ = SuccessorBoards::new();
    succ.generate_game_tree(pos.board());
    assert!(succ.positions().is_empty());
}

#[test]
fn successors_carry_the_derived_next_state() {
    let pos = Position::parse("startpos").expect("valid position");
    let mut succ = SuccessorBoards::new();
    succ.generate_game_tree(pos.board());
    assert!(succ.positions().iter().all(|p| p.side_to_move() != pos.side_to_move()));
}

#[test]
fn repeated_calls_replace_instead_of_append() {
    let pos = Position::parse("startpos").expect("valid position");
    let mut succ = SuccessorBoards::new();
    succ.generate_game_tree(pos.board());
    succ.generate_game_tree(pos.board());
    assert_eq!(succ.positions().len(), 20);
}

#[test]
fn take_positions_leaves_the_collector_empty() {
    let pos = Position::parse("startpos").expect("valid position");
    let mut succ = SuccessorBoards::new();
    succ.generate_game_tree(pos.board());
    let taken = succ.take_positions();
    assert_eq!(taken.len(), 20);
    assert!(succ.positions().is_empty());
}

#[test]
fn one_ply_only_never_recurses() {
    // Successors of a successor differ from two-ply expansion of the root:
    // the extractor must stop after exactly one ply.
    let root = Board::default();
    let mut succ = SuccessorBoards::new();
    succ.generate_game_tree(&root);
    let first = succ.positions()[0].clone();
    succ.generate_game_tree(&first);
    assert!(succ.positions().iter().all(|p| p.side_to_move() == root.side_to_move()));
}
