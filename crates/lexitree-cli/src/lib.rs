// lexitree-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexitree_trie::dictionary::{self, DictionaryError, WordList};
use lexitree_trie::AutocompleteHandle;
use log::{info, warn};

/// Environment variable naming a dictionary file.
pub const DICT_ENV_VAR: &str = "LEXITREE_DICT_PATH";

/// Dictionary file name looked up in the home and working directories.
const WORDS_FILE: &str = "words.txt";

/// Where the loaded dictionary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Builtin,
}

/// Load the dictionary and build an engine from it.
///
/// Search order:
/// 1. `dict_path` argument (if provided; a missing file is an error)
/// 2. `LEXITREE_DICT_PATH` environment variable
/// 3. `~/.lexitree/words.txt`
/// 4. `./words.txt`
/// 5. The built-in word list
pub fn load_handle(
    dict_path: Option<&str>,
) -> Result<(AutocompleteHandle, DictionarySource), DictionaryError> {
    let (list, source) = load_word_list(dict_path)?;
    for (line, err) in &list.rejected {
        warn!("dictionary line {line} skipped: {err}");
    }
    info!("loaded {} words from {:?}", list.words.len(), source);
    Ok((AutocompleteHandle::from_words(&list.words), source))
}

fn load_word_list(dict_path: Option<&str>) -> Result<(WordList, DictionarySource), DictionaryError> {
    if let Some(p) = dict_path {
        let path = PathBuf::from(p);
        let list = dictionary::read_word_list(&path)?;
        return Ok((list, DictionarySource::File(path)));
    }
    match dictionary::find_word_list(&build_search_paths()) {
        Ok((path, list)) => Ok((list, DictionarySource::File(path))),
        Err(DictionaryError::NotFound { .. }) => Ok((WordList::builtin(), DictionarySource::Builtin)),
        Err(e) => Err(e),
    }
}

/// Build the list of dictionary files to try when no path is given.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_ENV_VAR) {
        let env_path = PathBuf::from(env_path);
        // The variable may name the file itself or its directory.
        paths.push(env_path.join(WORDS_FILE));
        paths.push(env_path);
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".lexitree").join(WORDS_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Parse a numeric option value, exiting with an error message on failure.
pub fn parse_number<T: std::str::FromStr>(value: Option<&String>, option: &str) -> T {
    match value {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| fatal(&format!("invalid number for {option}: {v}"))),
        None => fatal(&format!("{option} requires a value")),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
