// Game-tree enumeration engine over cozy-chess move generation
pub mod board;
pub mod collect;
pub mod search;
