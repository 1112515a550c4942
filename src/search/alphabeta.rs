use crate::search::eval::{eval_cp, DRAW_SCORE, MATE_SCORE};
use crate::search::tt::{Bound, Entry, Tt};
use cozy_chess::{Board, Move};

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    /// Principal line in coordinate notation, best move first.
    pub pv: Vec<String>,
    pub score_cp: i32,
    pub nodes: u64,
    pub tt_lookups: u64,
}

/// Iterative-deepening negamax with a transposition table. Enough to back
/// the driver's timed-search command; not a tournament search.
pub struct Searcher {
    tt: Tt,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self { tt: Tt::default(), nodes: 0 }
    }
}

impl Searcher {
    pub fn with_tt_capacity_mb(mb: usize) -> Self {
        Self { tt: Tt::with_capacity_mb(mb), nodes: 0 }
    }

    pub fn tt_size_mb(&self) -> f64 {
        self.tt.size_mb()
    }

    pub fn search_depth(&mut self, board: &Board, depth: u32) -> SearchResult {
        self.nodes = 0;
        self.tt.reset_lookups();
        if depth == 0 {
            return SearchResult { pv: Vec::new(), score_cp: eval_cp(board), nodes: 1, tt_lookups: 0 };
        }

        let mut score = 0;
        // Iterative deepening seeds TT move ordering for the next iteration.
        for d in 1..=depth {
            score = self.alphabeta(board, d, -MATE_SCORE, MATE_SCORE, 0);
        }
        let tt_lookups = self.tt.lookups();
        let pv = self.principal_line(board, depth);
        SearchResult { pv, score_cp: score, nodes: self.nodes, tt_lookups }
    }

    fn alphabeta(&mut self, board: &Board, depth: u32, mut alpha: i32, beta: i32, ply: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return eval_cp(board);
        }

        let key = board.hash();
        let tt_move = match self.tt.get(key) {
            Some(e) => {
                if e.depth >= depth {
                    match e.bound {
                        Bound::Exact => return e.score,
                        Bound::Lower if e.score >= beta => return e.score,
                        Bound::Upper if e.score <= alpha => return e.score,
                        _ => {}
                    }
                }
                e.best
            }
            None => None,
        };

        let mut moves: Vec<Move> = Vec::with_capacity(64);
        board.generate_moves(|ml| {
            for m in ml {
                moves.push(m);
            }
            false
        });
        if moves.is_empty() {
            return self.eval_terminal(board, ply);
        }
        if let Some(ttm) = tt_move {
            if let Some(pos) = moves.iter().position(|&m| m == ttm) {
                moves.swap(0, pos);
            }
        }

        let orig_alpha = alpha;
        let mut best = -MATE_SCORE;
        let mut best_move: Option<Move> = None;
        for m in moves {
            let mut child = board.clone();
            child.play(m);
            let score = -self.alphabeta(&child, depth - 1, -beta, -alpha, ply + 1);
            if score > best {
                best = score;
                best_move = Some(m);
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= orig_alpha {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.put(Entry { key, depth, score: best, best: best_move, bound });
        best
    }

    fn eval_terminal(&self, board: &Board, ply: i32) -> i32 {
        if !board.checkers().is_empty() {
            -MATE_SCORE + ply
        } else {
            DRAW_SCORE
        }
    }

    /// Recovers the principal line by walking TT best moves from the root,
    /// stopping at the first position with no stored (or no longer legal) move.
    fn principal_line(&mut self, board: &Board, depth: u32) -> Vec<String> {
        let mut line = Vec::new();
        let mut cur = board.clone();
        for _ in 0..depth {
            let Some(e) = self.tt.get(cur.hash()) else { break };
            let Some(m) = e.best else { break };
            let mut legal = false;
            cur.generate_moves(|ml| {
                for lm in ml {
                    if lm == m {
                        legal = true;
                        break;
                    }
                }
                legal
            });
            if !legal {
                break;
            }
            line.push(format!("{m}"));
            cur.play(m);
        }
        line
    }
}
