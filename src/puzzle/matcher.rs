use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::trie::Trie;

/// Words found in one solve pass, shortest first, plus candidate statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub words: Vec<String>,
    /// Candidates generated, duplicates included
    pub total_candidates: usize,
    pub distinct_candidates: usize,
}

impl Solution {
    pub fn count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn shortest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn longest(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

fn distinct(candidates: &[String]) -> Vec<&str> {
    candidates
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}

fn finish(mut words: Vec<String>, total_candidates: usize, distinct_candidates: usize) -> Solution {
    // Stable, so equal lengths keep the dedup order
    words.sort_by_key(|w| w.chars().count());
    debug!(
        "{} candidates, {} distinct, {} words",
        total_candidates,
        distinct_candidates,
        words.len()
    );
    Solution {
        words,
        total_candidates,
        distinct_candidates,
    }
}

/// Looks up every distinct candidate in the trie. Order among words of equal length
/// depends on the dedup step and is not meaningful.
pub fn solve(trie: &Trie, candidates: &[String]) -> Solution {
    let unique = distinct(candidates);
    let words = unique
        .iter()
        .filter_map(|c| trie.contains_exact(c))
        .map(str::to_string)
        .collect();
    finish(words, candidates.len(), unique.len())
}

/// Same as `solve` but spreads the lookups over the rayon pool. The trie is only read.
pub fn solve_parallel(trie: &Trie, candidates: &[String]) -> Solution {
    let unique = distinct(candidates);
    let words = unique
        .par_iter()
        .filter_map(|c| trie.contains_exact(c))
        .map(str::to_string)
        .collect();
    finish(words, candidates.len(), unique.len())
}
