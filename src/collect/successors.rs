use cozy_chess::Board;

/// One-ply expansion: the immediate legal successor positions of a board,
/// for consumers that need positions rather than counts. Each call fully
/// replaces the previous result.
#[derive(Default)]
pub struct SuccessorBoards {
    positions: Vec<Board>,
}

impl SuccessorBoards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_game_tree(&mut self, board: &Board) {
        self.positions.clear();
        board.generate_moves(|moves| {
            for m in moves {
                let mut child = board.clone();
                child.play(m);
                self.positions.push(child);
            }
            false
        });
    }

    pub fn positions(&self) -> &[Board] {
        &self.positions
    }

    pub fn take_positions(&mut self) -> Vec<Board> {
        std::mem::take(&mut self.positions)
    }
}
