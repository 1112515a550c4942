use cozy_chess::Board;

/// Whole-tree perft: counts the positions reached at every ply 1..=depth,
/// not just the leaves at the deepest ply. The final entry is the classical
/// perft value, the primary correctness oracle for move generation and move
/// application together.
#[derive(Default)]
pub struct PerftCounter {
    nodes: Vec<u64>,
    max_depth: u32,
}

impl PerftCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_game_tree(&mut self, board: &Board, depth: u32) {
        self.nodes.clear();
        self.nodes.resize(depth as usize + 1, 0);
        self.max_depth = depth;
        self.build(board, depth);
    }

    /// perft(max_depth): the leaf count at the deepest ply.
    pub fn leaves(&self) -> u64 {
        self.nodes[self.max_depth as usize]
    }

    /// Number of positions reached at ply `ply` from the root. Panics if
    /// `ply` exceeds the depth of the last traversal.
    pub fn nodes_at_ply(&self, ply: u32) -> u64 {
        self.nodes[ply as usize]
    }

    /// Full per-ply table; entry 0 is always zero, entry d is perft(d).
    pub fn per_ply(&self) -> &[u64] {
        &self.nodes
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn build(&mut self, board: &Board, depth: u32) {
        if depth == 0 {
            return;
        }
        board.generate_moves(|moves| {
            for m in moves {
                // Count before descending: this move reaches one position at
                // ply (max_depth - depth + 1).
                self.nodes[(self.max_depth - depth + 1) as usize] += 1;
                if depth > 1 {
                    let mut child = board.clone();
                    child.play(m);
                    self.build(&child, depth - 1);
                }
            }
            false
        });
    }
}
