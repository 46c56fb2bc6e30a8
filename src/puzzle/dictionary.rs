use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::trie::Trie;
use crate::error::{Error, Result};

/// First whitespace-delimited token of a dictionary line, or `None` for blank lines
fn line_word(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Builds a trie from a line-oriented word list. No case folding happens here, the
/// grid and the word list are expected to agree on case already.
pub fn load_from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Trie> {
    let mut trie = Trie::new();
    let mut n_lines = 0;
    for line in reader.lines() {
        let line = line.map_err(|source| Error::DictionarySource {
            origin: origin.to_string(),
            source,
        })?;
        n_lines += 1;
        if let Some(word) = line_word(&line) {
            trie.insert(word);
        }
    }
    debug!("read {} dictionary lines from {}", n_lines, origin);
    Ok(trie)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| Error::DictionarySource {
        origin: origin.clone(),
        source,
    })?;
    load_from_reader(BufReader::new(file), &origin)
}
