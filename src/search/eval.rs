use cozy_chess::{Board, Color, Piece};

pub const MATE_SCORE: i32 = 30_000;
pub const DRAW_SCORE: i32 = 0;

const PIECE_VALUES: [(Piece, i32); 5] = [
    (Piece::Pawn, 100),
    (Piece::Knight, 320),
    (Piece::Bishop, 330),
    (Piece::Rook, 500),
    (Piece::Queen, 900),
];

/// Material balance in centipawns, positive when White is ahead.
pub fn material_cp_white(board: &Board) -> i32 {
    let mut score = 0;
    for &(piece, value) in &PIECE_VALUES {
        let bb = board.pieces(piece);
        let white = (bb & board.colors(Color::White)).into_iter().count() as i32;
        let black = (bb & board.colors(Color::Black)).into_iter().count() as i32;
        score += (white - black) * value;
    }
    score
}

/// Static evaluation from the side to move's perspective (negamax-friendly).
pub fn eval_cp(board: &Board) -> i32 {
    let base = material_cp_white(board);
    if board.side_to_move() == Color::White { base } else { -base }
}
