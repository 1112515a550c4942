use cozy_chess::Board;
use std::fmt::Write as _;

/// Per-root-move breakdown of perft, mainly for isolating which root move's
/// subtree disagrees with a reference count. Root moves appear in discovery
/// order; the sum of per-move counts always equals the grand total.
#[derive(Default)]
pub struct Divide {
    moves: Vec<String>,
    nodes: Vec<u64>,
    total_nodes: u64,
    max_depth: u32,
}

impl Divide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_game_tree(&mut self, board: &Board, depth: u32) {
        self.moves.clear();
        self.nodes.clear();
        self.total_nodes = 0;
        self.max_depth = depth;
        self.build(board, depth);
    }

    /// (move name, leaf count) pairs in root-move discovery order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.moves.iter().map(String::as_str).zip(self.nodes.iter().copied())
    }

    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    pub fn report(&self) -> String {
        let mut out = String::new();
        for (name, count) in self.entries() {
            let _ = writeln!(out, "{name}: {count}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total nodes searched: {}", self.total_nodes);
        out
    }

    pub fn print(&self) {
        print!("{}", self.report());
    }

    fn build(&mut self, board: &Board, depth: u32) {
        if depth == 0 {
            return;
        }
        board.generate_moves(|moves| {
            for m in moves {
                if depth == self.max_depth {
                    self.moves.push(format!("{m}"));
                    self.nodes.push(0);
                }
                if depth == 1 {
                    // Deeper plies never open entries, so the last entry is
                    // the root move this leaf descends from.
                    let last = self.nodes.last_mut().expect("leaf reached before any root move");
                    *last += 1;
                    self.total_nodes += 1;
                }
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
