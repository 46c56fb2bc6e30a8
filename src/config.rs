use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::puzzle::DEFAULT_GRID_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Side length of generated grids
    pub grid_size: usize,
    /// Word list, one word per line
    pub dictionary: PathBuf,
    /// Directory holding trie snapshots
    pub snapshot_dir: PathBuf,
    pub snapshot_key: String,
    /// Query the trie from the rayon pool
    pub parallel: bool,
    /// Solve this grid (JSON rows of letters) instead of a random one
    pub grid_file: Option<PathBuf>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            dictionary: PathBuf::from("dict.txt"),
            snapshot_dir: PathBuf::from("."),
            snapshot_key: "save_default.bin".to_string(),
            parallel: false,
            grid_file: None,
        }
    }
}

impl SolverConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| Error::Config {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::open(path).map_err(|e| config_error(e.to_string()))?;
        let config: SolverConfig =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| config_error(e.to_string()))?;
        config.validate().map_err(|e| config_error(e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidGrid("grid_size must be at least 1".to_string()));
        }
        Ok(())
    }
}
