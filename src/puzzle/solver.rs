use std::time::Duration;

use tracing::{info, warn};

use super::candidates;
use super::dictionary;
use super::grid::{FixedGridProvider, Grid, GridProvider, RandomGridProvider};
use super::matcher::{self, Solution};
use super::snapshot::{FileSnapshotStore, SnapshotStore};
use super::trie::Trie;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::utils::timing::timed;

#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub grid: Grid,
    pub solution: Solution,
    /// Wall time of the whole pass, dictionary load included
    pub elapsed: Duration,
}

/// Wires the dictionary, snapshot store and grid source into solve passes.
/// The trie is loaded on first use and kept for later passes.
pub struct PuzzleSolver<P, S> {
    config: SolverConfig,
    provider: P,
    store: S,
    trie: Option<Trie>,
}

impl PuzzleSolver<Box<dyn GridProvider>, FileSnapshotStore> {
    /// Solver backed by on-disk snapshots. Uses the grid in `config.grid_file` when
    /// set, random grids otherwise.
    pub fn from_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let provider: Box<dyn GridProvider> = match &config.grid_file {
            Some(path) => Box::new(FixedGridProvider::new(Grid::from_file(path)?)),
            None => Box::new(RandomGridProvider::new()),
        };
        let store = FileSnapshotStore::new(&config.snapshot_dir);
        Ok(Self::new(config, provider, store))
    }
}

impl<P, S> PuzzleSolver<P, S>
where
    P: GridProvider,
    S: SnapshotStore,
{
    pub fn new(config: SolverConfig, provider: P, store: S) -> Self {
        Self {
            config,
            provider,
            store,
            trie: None,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses the dictionary and tries to snapshot the result. A failed save only
    /// costs a rebuild next time.
    fn build_trie(&self) -> Result<Trie> {
        let (trie, _) = timed("dictionary load", || dictionary::load(&self.config.dictionary));
        let trie = trie?;
        info!("built trie with {} words", trie.len());
        if let Err(e) = self.store.save(&self.config.snapshot_key, &trie) {
            warn!("{}", e);
        }
        Ok(trie)
    }

    /// The dictionary trie, from memory, then the snapshot store, then the word list
    pub fn load_trie(&mut self) -> Result<&Trie> {
        let trie = match self.trie.take() {
            Some(trie) => trie,
            None => match self.store.load(&self.config.snapshot_key) {
                Some(trie) => trie,
                None => self.build_trie()?,
            },
        };
        Ok(self.trie.insert(trie))
    }

    pub fn solve_grid(&mut self, grid: &Grid) -> Result<Solution> {
        let parallel = self.config.parallel;
        let trie = self.load_trie()?;
        let candidates = candidates::collect_all(grid);
        let solution = if parallel {
            matcher::solve_parallel(trie, &candidates)
        } else {
            matcher::solve(trie, &candidates)
        };
        Ok(solution)
    }

    /// One full pass: get a grid of the configured size, then solve it
    pub fn run(&mut self) -> Result<SolveOutcome> {
        let n = self.config.grid_size;
        let (result, elapsed) = timed("solve pass", || -> Result<(Grid, Solution)> {
            let grid = self.provider.generate(n)?;
            let solution = self.solve_grid(&grid)?;
            Ok((grid, solution))
        });
        let (grid, solution) = result?;

        info!(
            "{} by {} grid: {} candidates, {} distinct, {} words",
            n,
            n,
            solution.total_candidates,
            solution.distinct_candidates,
            solution.count()
        );
        if let (Some(shortest), Some(longest)) = (solution.shortest(), solution.longest()) {
            info!("shortest word {}, longest word {}", shortest, longest);
        }

        Ok(SolveOutcome {
            grid,
            solution,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::Error;
    use crate::puzzle::snapshot::MemorySnapshotStore;

    fn config(dictionary: PathBuf) -> SolverConfig {
        SolverConfig {
            dictionary,
            snapshot_key: "test.bin".to_string(),
            ..SolverConfig::default()
        }
    }

    fn grid() -> Grid {
        Grid::from_rows(&["CATX", "XCAR", "CARP", "XGOD"]).unwrap()
    }

    #[test]
    fn test_snapshot_hit_skips_dictionary() {
        let store = MemorySnapshotStore::new();
        store.save("test.bin", &Trie::from_words(["CAT", "GO"])).unwrap();
        // The dictionary does not exist, so only the snapshot can satisfy the load
        let missing = std::env::temp_dir().join("wordgrid-solver-missing-dict.txt");
        let mut solver = PuzzleSolver::new(config(missing), FixedGridProvider::new(grid()), store);

        let outcome = solver.run().unwrap();
        let mut words = outcome.solution.words.clone();
        words.sort();
        assert_eq!(words, vec!["CAT", "GO"]);
        assert_eq!(outcome.grid, grid());
    }

    #[test]
    fn test_missing_dictionary_is_fatal() {
        let missing = std::env::temp_dir().join("wordgrid-solver-missing-dict.txt");
        let mut solver = PuzzleSolver::new(
            config(missing),
            FixedGridProvider::new(grid()),
            MemorySnapshotStore::new(),
        );
        assert!(matches!(solver.run(), Err(Error::DictionarySource { .. })));
    }

    #[test]
    fn test_corrupt_snapshot_rebuilds_and_saves() {
        let dir = std::env::temp_dir().join(format!("wordgrid-solver-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let dict = dir.join("dict.txt");
        std::fs::write(&dict, "CAT\nCAR\n").unwrap();

        let store = MemorySnapshotStore::new();
        store.put_raw("test.bin", b"garbage".to_vec());
        let mut solver = PuzzleSolver::new(config(dict), FixedGridProvider::new(grid()), store);
        let solution = solver.solve_grid(&grid()).unwrap();
        assert_eq!(solution.count(), 2);

        let saved = solver.store().load("test.bin").unwrap();
        assert_eq!(saved, Trie::from_words(["CAT", "CAR"]));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_config_rejects_zero_grid() {
        let config = SolverConfig {
            grid_size: 0,
            ..SolverConfig::default()
        };
        assert!(PuzzleSolver::from_config(config).is_err());
    }
}
