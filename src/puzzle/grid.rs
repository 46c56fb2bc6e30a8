use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::slice::Iter;

use ndarray::{s, Array2, ArrayView1, ArrayView2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::ThreadRng;
use rand::Rng;

use super::MIN_WORD_LENGTH;
use crate::error::{Error, Result};

/// Straight scan directions. Diagonals are handled separately by `Grid::extract_diagonals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    RowsForward,
    RowsReverse,
    ColsForward,
    ColsReverse,
}

impl Orientation {
    pub fn iter() -> Iter<'static, Orientation> {
        static ORIENTATIONS: [Orientation; 4] = [
            Orientation::RowsForward,
            Orientation::RowsReverse,
            Orientation::ColsForward,
            Orientation::ColsReverse,
        ];
        ORIENTATIONS.iter()
    }

    fn transposed(&self) -> bool {
        matches!(self, Self::ColsForward | Self::ColsReverse)
    }

    fn reversed(&self) -> bool {
        matches!(self, Self::RowsReverse | Self::ColsReverse)
    }
}

fn line_string(line: ArrayView1<char>) -> String {
    line.iter().collect()
}

/// Diagonal `offset` places right of (positive) or below (negative) the main one.
/// Positive offsets start in the first row, negative ones in the first column
fn diagonal(view: ArrayView2<char>, offset: isize) -> ArrayView1<char> {
    let k = offset.unsigned_abs();
    if offset >= 0 {
        view.slice_move(s![.., k..]).into_diag()
    } else {
        view.slice_move(s![k.., ..]).into_diag()
    }
}

/// Square matrix of uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    pub fn from_array(cells: Array2<char>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols {
            return Err(Error::InvalidGrid(format!(
                "expected a non-empty square grid, got {}x{}",
                rows, cols
            )));
        }
        if let Some(c) = cells.iter().find(|c| !c.is_ascii_uppercase()) {
            return Err(Error::InvalidGrid(format!("{:?} is not a letter A-Z", c)));
        }
        Ok(Self { cells })
    }

    /// Builds a grid from one string per row
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut letters = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let before = letters.len();
            letters.extend(row.as_ref().chars());
            if letters.len() - before != n {
                return Err(Error::InvalidGrid(format!(
                    "row {} has {} letters, expected {}",
                    i,
                    letters.len() - before,
                    n
                )));
            }
        }
        let cells = Array2::from_shape_vec((n, n), letters)
            .map_err(|e| Error::InvalidGrid(e.to_string()))?;
        Self::from_array(cells)
    }

    /// Reads a JSON array of rows, each row an array of single-letter strings
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::InvalidGrid(format!("{}: {}", path.display(), e)))?;
        let raw_grid: Vec<Vec<String>> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::InvalidGrid(format!("{}: {}", path.display(), e)))?;
        let rows = raw_grid.iter().map(|row| row.concat()).collect::<Vec<_>>();
        Self::from_rows(&rows)
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get((row, col)).copied()
    }

    pub fn cells(&self) -> ArrayView2<char> {
        self.cells.view()
    }

    /// Rows (or columns, for the column orientations) read in the given direction.
    /// Lines shorter than two letters are dropped.
    pub fn extract_lines(&self, orientation: Orientation) -> Vec<String> {
        let mut view = self.cells.view();
        // Columns become the rows of the transposed grid
        if orientation.transposed() {
            view = view.reversed_axes();
        }
        if orientation.reversed() {
            view = view.slice_move(s![.., ..;-1]);
        }
        view.rows()
            .into_iter()
            .map(line_string)
            .filter(|line| line.len() >= MIN_WORD_LENGTH)
            .collect()
    }

    /// Every diagonal of the grid, length one included, as two sweeps of `2N - 1` runs.
    /// The first sweep walks the bottom-left to top-right family from the top-left
    /// corner to the bottom-right one. The second walks the top-left to bottom-right
    /// family from the top-right corner to the bottom-left one. With `reverse` set the
    /// grid is mirrored left to right first.
    pub fn diagonals(&self, reverse: bool) -> Vec<String> {
        let mut view = self.cells.view();
        if reverse {
            view = view.slice_move(s![.., ..;-1]);
        }
        let n = self.size() as isize;
        let flipped = view.slice(s![..;-1, ..]);

        let mut diags = Vec::with_capacity(4 * self.size());
        diags.extend((-n + 1..n).map(|k| line_string(diagonal(flipped, k))));
        diags.extend((-n + 1..n).rev().map(|k| line_string(diagonal(view, k))));
        diags
    }

    /// Diagonal runs of two or more letters, in `diagonals` order
    pub fn extract_diagonals(&self, reverse: bool) -> Vec<String> {
        self.diagonals(reverse)
            .into_iter()
            .filter(|d| d.len() >= MIN_WORD_LENGTH)
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Source of the letter grid for a solve pass
pub trait GridProvider {
    fn generate(&mut self, n: usize) -> Result<Grid>;
}

impl<P: GridProvider + ?Sized> GridProvider for Box<P> {
    fn generate(&mut self, n: usize) -> Result<Grid> {
        (**self).generate(n)
    }
}

/// Fills every cell uniformly from A-Z
#[derive(Debug, Clone)]
pub struct RandomGridProvider<R = ThreadRng> {
    rng: R,
}

impl RandomGridProvider<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomGridProvider<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomGridProvider<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GridProvider for RandomGridProvider<R> {
    fn generate(&mut self, n: usize) -> Result<Grid> {
        let letters: Array2<u8> = Array2::random_using((n, n), Uniform::new_inclusive(b'A', b'Z'), &mut self.rng);
        Grid::from_array(letters.mapv(char::from))
    }
}

/// Always hands out the same grid
#[derive(Debug, Clone)]
pub struct FixedGridProvider {
    grid: Grid,
}

impl FixedGridProvider {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl GridProvider for FixedGridProvider {
    fn generate(&mut self, n: usize) -> Result<Grid> {
        if n != self.grid.size() {
            return Err(Error::InvalidGrid(format!(
                "requested a {}x{} grid but the fixed grid is {}x{}",
                n,
                n,
                self.grid.size(),
                self.grid.size()
            )));
        }
        Ok(self.grid.clone())
    }
}
