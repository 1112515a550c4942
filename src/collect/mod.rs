//! Collectors for the moves discovered during game-tree traversal.
//!
//! Each collector owns its accumulator state and resets it at the top of a
//! fresh `generate_game_tree` call, so results never mix across calls.
//! Traversal is synchronous, single-threaded recursion; a collector must not
//! serve two overlapping traversals (`&mut self` enforces this). Depth counts
//! down by exactly one per descent and every variant bottoms out at a runtime
//! depth check.

pub mod dfs;
pub mod divide;
pub mod perft;
pub mod successors;
