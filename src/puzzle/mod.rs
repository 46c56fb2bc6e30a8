pub mod candidates;
pub mod dictionary;
pub mod grid;
pub mod matcher;
pub mod snapshot;
pub mod solver;
pub mod trie;

pub const DEFAULT_GRID_SIZE: usize = 4;
/// Shortest row/column substring worth looking up
pub const MIN_WORD_LENGTH: usize = 2;

pub use self::grid::{Grid, GridProvider, Orientation};
pub use self::matcher::Solution;
pub use self::solver::{PuzzleSolver, SolveOutcome};
pub use self::trie::Trie;
