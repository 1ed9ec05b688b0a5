// Dictionary word lists: the built-in list and plain-text word files.
//
// File format: UTF-8 text, one word per line. Surrounding whitespace is
// trimmed, blank lines and lines starting with `#` are ignored, and lines
// failing word validation are skipped with a warning.

use std::path::{Path, PathBuf};

use lexitree_core::word::{WordError, check_word};
use log::warn;

/// Words loaded when no dictionary is supplied.
pub const DEFAULT_WORDS: &[&str] = &[
    "algo", "aufa", "alga", "apple", "batik", "batu", "bata", "baca", "cara", "cari", "cuma", "cat",
    "car", "code", "coder", "data", "date", "diskrit", "fathan", "hedo", "zahy", "zara", "zebra",
];

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// A dictionary file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the candidate locations holds a dictionary file.
    #[error("no dictionary found in any of the search paths:\n{}", format_paths(searched))]
    NotFound { searched: Vec<PathBuf> },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A parsed word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Accepted words in file order.
    pub words: Vec<String>,
    /// Rejected lines as `(line_number, error)`, 1-based.
    pub rejected: Vec<(usize, WordError)>,
}

impl WordList {
    /// The built-in word list.
    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            rejected: Vec::new(),
        }
    }
}

/// Parse word-list text.
pub fn parse_word_list(text: &str) -> WordList {
    let mut list = WordList::default();
    for (i, line) in text.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        match check_word(word) {
            Ok(()) => list.words.push(word.to_string()),
            Err(e) => {
                warn!("skipping dictionary line {}: {e}", i + 1);
                list.rejected.push((i + 1, e));
            }
        }
    }
    list
}

/// Read and parse a word-list file.
pub fn read_word_list(path: &Path) -> Result<WordList, DictionaryError> {
    let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&text))
}

/// Read the first existing file among `candidates`.
pub fn find_word_list(candidates: &[PathBuf]) -> Result<(PathBuf, WordList), DictionaryError> {
    for path in candidates {
        if path.is_file() {
            let list = read_word_list(path)?;
            return Ok((path.clone(), list));
        }
    }
    Err(DictionaryError::NotFound {
        searched: candidates.to_vec(),
    })
}
