// lexitree-suggest: Print completions for prefixes.
//
// Each prefix is typed into a search-box model (letters and whitespace only,
// at most 25 characters, trimmed) before it is queried, so the output matches
// what an interactive shell would show.
//
// Usage:
//   lexitree-suggest [-d DICT] [OPTIONS] [PREFIX...]
//
// Options:
//   -d, --dict PATH          Dictionary file (one word per line)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 8)
//   -s, --stats              Print dictionary size and match count per prefix
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use lexitree_core::input::InputLine;
use lexitree_trie::{AutocompleteHandle, split_completion};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexitree_cli::parse_dict_path(&args);

    if lexitree_cli::wants_help(&args) {
        println!("lexitree-suggest: Print completions for prefixes.");
        println!();
        println!("Usage: lexitree-suggest [-d DICT] [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH          Dictionary file (one word per line)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 8)");
        println!("  -s, --stats              Print dictionary size and match count");
        println!("  -h, --help               Print this help");
        println!();
        println!("Without -d, {} is consulted, then", lexitree_cli::DICT_ENV_VAR);
        println!("~/.lexitree/words.txt, ./words.txt and the built-in word list.");
        return;
    }

    let mut max_suggestions: Option<usize> = None;
    let mut show_stats = false;
    let mut prefixes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            max_suggestions = Some(lexitree_cli::parse_number(args.get(i + 1), arg));
            skip_next = true;
        } else if arg == "-s" || arg == "--stats" {
            show_stats = true;
        } else if !arg.starts_with('-') {
            prefixes.push(arg.clone());
        }
    }

    let (mut handle, _) =
        lexitree_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| lexitree_cli::fatal(&e.to_string()));
    if let Some(n) = max_suggestions {
        handle.set_max_suggestions(n);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let complete = |typed: &str, handle: &mut AutocompleteHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let mut input = InputLine::new();
        for ch in typed.chars() {
            input.push(ch);
        }
        let prefix = input.text();
        let result = handle.query(prefix);
        if result.words.is_empty() {
            let _ = writeln!(out, "{prefix}: (no completions)");
        } else {
            let _ = writeln!(out, "{prefix}:");
            for word in &result.words {
                let (head, tail) = split_completion(word, prefix);
                let _ = writeln!(out, "  [{head}]{tail}");
            }
        }
        if show_stats {
            let _ = writeln!(out, "  ({})", handle.stats());
        }
    };

    if prefixes.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            complete(&line, &mut handle, &mut out);
        }
    } else {
        for prefix in &prefixes {
            complete(prefix, &mut handle, &mut out);
        }
    }
}
