use cozy_chess::Board;

/// What to do with a position reached at the requested depth. The two modes
/// are mutually exclusive by construction: counting never saves boards and
/// saving derives its count from the saved list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DfsMode {
    CountLeaves,
    SaveBoards,
}

/// Bounded depth-first traversal: counts the positions at exactly the
/// requested depth, or captures them instead of counting.
pub struct LimitedDfs {
    mode: DfsMode,
    log_moves: bool,
    total_nodes: u64,
    positions: Vec<Board>,
}

impl LimitedDfs {
    pub fn new(mode: DfsMode) -> Self {
        Self { mode, log_moves: false, total_nodes: 0, positions: Vec::new() }
    }

    /// Emits every discovered move through `log::trace!`. Only useful at
    /// very small depths.
    pub fn with_move_logging(mode: DfsMode) -> Self {
        Self { log_moves: true, ..Self::new(mode) }
    }

    /// Traverses to `depth` plies below `board`. Depth 0 clears the
    /// accumulator and returns without generating any moves; the root itself
    /// is never counted.
    pub fn generate_game_tree(&mut self, board: &Board, depth: u32) {
        self.total_nodes = 0;
        self.positions.clear();
        self.build(board, depth);
        if self.mode == DfsMode::SaveBoards {
            self.total_nodes = self.positions.len() as u64;
        }
    }

    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    pub fn positions(&self) -> &[Board] {
        &self.positions
    }

    fn build(&mut self, board: &Board, depth: u32) {
        if depth == 0 {
            return;
        }
        board.generate_moves(|moves| {
            for m in moves {
                if self.log_moves {
                    log::trace!("move {m}");
                }
                if depth == 1 {
                    match self.mode {
                        DfsMode::CountLeaves => self.total_nodes += 1,
                        DfsMode::SaveBoards => {
                            let mut child = board.clone();
                            child.play(m);
                            self.positions.push(child);
                        }
                    }
                } else {
                    let mut child = board.clone();
                    child.play(m);
                    self.build(&child, depth - 1);
                }
            }
            false
        });
    }
}
