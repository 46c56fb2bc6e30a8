//! Finds every dictionary word laid out in a square letter grid along rows, columns
//! and diagonals, read in both directions.

pub mod config;
pub mod error;
pub mod puzzle;
pub mod utils;

pub use config::SolverConfig;
pub use error::{Error, Result};
pub use puzzle::{Grid, PuzzleSolver, Solution, Trie};
