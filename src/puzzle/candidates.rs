use tracing::debug;

use super::grid::{Grid, Orientation};
use super::MIN_WORD_LENGTH;

/// Every contiguous substring of at least two letters of each line, ordered by start
/// offset and then by end offset
pub fn expand<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut result = Vec::new();
    for line in lines {
        let line = line.as_ref();
        // Byte offset of every char boundary, end of line included
        let bounds = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .collect::<Vec<_>>();
        let n_chars = bounds.len() - 1;
        for i in 0..n_chars {
            for j in (i + MIN_WORD_LENGTH)..=n_chars {
                result.push(line[bounds[i]..bounds[j]].to_string());
            }
        }
    }
    result
}

/// All candidates for one grid. Rows and columns are sub-sliced with `expand`; diagonal
/// runs are taken whole.
pub fn collect_all(grid: &Grid) -> Vec<String> {
    let lines = Orientation::iter()
        .flat_map(|&o| grid.extract_lines(o))
        .collect::<Vec<_>>();
    let mut candidates = expand(&lines);
    let n_straight = candidates.len();
    candidates.extend(grid.extract_diagonals(false));
    candidates.extend(grid.extract_diagonals(true));
    debug!(
        "{} straight candidates, {} diagonal candidates",
        n_straight,
        candidates.len() - n_straight
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_single_line() {
        assert_eq!(expand(&["CATX"]), vec!["CA", "CAT", "CATX", "AT", "ATX", "TX"]);
    }

    #[test]
    fn test_expand_short_lines() {
        assert!(expand(&["A"]).is_empty());
        assert!(expand(&[""]).is_empty());
        assert_eq!(expand(&["GO"]), vec!["GO"]);
    }

    #[test]
    fn test_expand_preserves_line_order() {
        let lines = ["CATX", "XCAR", "CARP", "XGOD", "XTAC", "RACX", "PRAC", "DOGX"];
        let expected = vec![
            "CA", "CAT", "CATX", "AT", "ATX", "TX", "XC", "XCA", "XCAR", "CA", "CAR", "AR",
            "CA", "CAR", "CARP", "AR", "ARP", "RP", "XG", "XGO", "XGOD", "GO", "GOD", "OD",
            "XT", "XTA", "XTAC", "TA", "TAC", "AC", "RA", "RAC", "RACX", "AC", "ACX", "CX",
            "PR", "PRA", "PRAC", "RA", "RAC", "AC", "DO", "DOG", "DOGX", "OG", "OGX", "GX",
        ];
        assert_eq!(expand(&lines), expected);
    }

    #[test]
    fn test_collect_all_counts() {
        let grid = Grid::from_rows(&["CATX", "XCAR", "CARP", "XGOD"]).unwrap();
        let all = collect_all(&grid);
        // 16 lines of 6 substrings each, then 10 diagonals per direction
        assert_eq!(all.len(), 16 * 6 + 20);
        assert_eq!(&all[..3], &["CA", "CAT", "CATX"]);
        assert_eq!(all.last().map(String::as_str), Some("PO"));
    }
}
