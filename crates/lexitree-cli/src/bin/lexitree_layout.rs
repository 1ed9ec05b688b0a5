// lexitree-layout: Print node coordinates of the dictionary tree.
//
// Lays the tree out on a canvas, optionally runs one query, and prints one
// line per node in breadth-first order:
//
//   <id> <label> <x> <y> <style> [word]
//
// where style is `path`, `completion` or `plain`.
//
// Usage:
//   lexitree-layout [-d DICT] [OPTIONS] [PREFIX]
//
// Options:
//   -d, --dict PATH     Dictionary file (one word per line)
//   -w, --width N       Canvas width in pixels (default: 1000)
//   -e, --edges         Also print edges as `<parent> -> <child> <style>`
//   -h, --help          Print help

use std::io::{self, Write};

use lexitree_core::character::simple_upper;
use lexitree_trie::DEFAULT_CANVAS_WIDTH;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexitree_cli::parse_dict_path(&args);

    if lexitree_cli::wants_help(&args) {
        println!("lexitree-layout: Print node coordinates of the dictionary tree.");
        println!();
        println!("Usage: lexitree-layout [-d DICT] [OPTIONS] [PREFIX]");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH     Dictionary file (one word per line)");
        println!("  -w, --width N       Canvas width in pixels (default: {DEFAULT_CANVAS_WIDTH})");
        println!("  -e, --edges         Also print edges");
        println!("  -h, --help          Print this help");
        return;
    }

    let mut width = DEFAULT_CANVAS_WIDTH;
    let mut show_edges = false;
    let mut prefix = String::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-w" || arg == "--width" {
            width = lexitree_cli::parse_number(args.get(i + 1), arg);
            skip_next = true;
        } else if arg == "-e" || arg == "--edges" {
            show_edges = true;
        } else if !arg.starts_with('-') {
            prefix = arg.clone();
        }
    }

    let (mut handle, _) =
        lexitree_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| lexitree_cli::fatal(&e.to_string()));
    let layout = handle.layout(width).clone();
    let result = handle.query(&prefix);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let _ = writeln!(
        out,
        "# {} nodes, {} words, tree width {}, canvas width {}",
        layout.len(),
        handle.count_terminal_nodes(),
        layout.total_width(),
        layout.canvas_width()
    );
    if !prefix.is_empty() {
        let _ = writeln!(out, "# prefix {prefix:?}: {}", result.words.join(", "));
    }

    let tree = handle.tree();
    for (id, node) in tree.all_nodes() {
        let Some(point) = layout.point(id) else {
            continue;
        };
        let style = handle.node_style(id).as_str();
        let label = simple_upper(node.symbol());
        match node.word() {
            Some(word) => {
                let _ = writeln!(out, "{} {label} {} {} {style} {word}", id.index(), point.x, point.y);
            }
            None => {
                let _ = writeln!(out, "{} {label} {} {} {style}", id.index(), point.x, point.y);
            }
        }
    }

    if show_edges {
        for (parent, child) in tree.edges() {
            // An edge is drawn in the style of the node it leads into.
            let style = handle.node_style(child).as_str();
            let _ = writeln!(out, "{} -> {} {style}", parent.index(), child.index());
        }
    }
}
