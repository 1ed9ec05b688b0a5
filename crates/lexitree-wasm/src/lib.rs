// WASM bindings for lexitree.
//
// Provides a `WasmLexitree` class exported via wasm-bindgen that wraps the
// `AutocompleteHandle` from lexitree-trie. A JavaScript shell renders the
// tree and the suggestion list; this crate only hands it plain data. All
// structured return values are serialized with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const tree = new WasmLexitree(["car", "cat", "cara"]); // or WasmLexitree.withDefaultWords()
//   tree.layout(1000);          // => [{ id: 0, x: 500, y: 100 }, ...]
//   tree.query(" ca ");         // => { words: ["car", "cat", "cara"], pathNodes: [1, 2], subtreeNodes: [2, 3, 4, 5] }
//   tree.nodes();               // => [{ id: 0, label: "*", depth: 0, word: null, style: "plain" }, ...]
//   tree.edges();               // => [{ parent: 0, child: 1, style: "path" }, ...]
//   tree.select(0);             // re-query with the first suggestion
//   tree.countTerminalNodes();  // => 3

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lexitree_core::character::simple_upper;
use lexitree_trie::{AutocompleteHandle, LayoutOptions, NodeId, QueryResult};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable query result.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsQuery {
    words: Vec<String>,
    path_nodes: Vec<usize>,
    subtree_nodes: Vec<usize>,
}

/// Serializable node position.
#[derive(Serialize)]
struct JsPosition {
    id: usize,
    x: i32,
    y: i32,
}

/// Serializable node description.
#[derive(Serialize)]
struct JsNode {
    id: usize,
    label: String,
    depth: usize,
    word: Option<String>,
    style: &'static str,
}

/// Serializable edge.
#[derive(Serialize)]
struct JsEdge {
    parent: usize,
    child: usize,
    style: &'static str,
}

/// Serializable status panel data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStats {
    total_words: usize,
    prefix_display: String,
    found: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn sorted_ids<'a>(ids: impl Iterator<Item = &'a NodeId>) -> Vec<usize> {
    let mut out: Vec<usize> = ids.map(|id| id.index()).collect();
    out.sort_unstable();
    out
}

fn query_to_js(result: QueryResult) -> JsQuery {
    JsQuery {
        path_nodes: sorted_ids(result.path_nodes().iter()),
        subtree_nodes: sorted_ids(result.subtree_nodes().iter()),
        words: result.words,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmLexitree
// ============================================================================

/// Prefix completion engine with tree layout for WebAssembly.
#[wasm_bindgen]
pub struct WasmLexitree {
    handle: AutocompleteHandle,
}

#[wasm_bindgen]
impl WasmLexitree {
    /// Create an engine from a word list.
    #[wasm_bindgen(constructor)]
    pub fn new(words: Vec<String>) -> WasmLexitree {
        WasmLexitree {
            handle: AutocompleteHandle::from_words(&words),
        }
    }

    /// Create an engine loaded with the built-in word list.
    #[wasm_bindgen(js_name = "withDefaultWords")]
    pub fn with_default_words() -> WasmLexitree {
        WasmLexitree {
            handle: AutocompleteHandle::with_default_words(),
        }
    }

    /// Insert a word. Returns true if it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        self.handle.insert(word)
    }

    /// Insert a word made of letters and whitespace only; throws otherwise.
    #[wasm_bindgen(js_name = "tryInsert")]
    pub fn try_insert(&mut self, word: &str) -> Result<bool, JsError> {
        self.handle
            .try_insert(word)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Query a prefix.
    ///
    /// Leading and trailing whitespace is trimmed, as the search box does
    /// before querying. Returns `{ words, pathNodes, subtreeNodes }` with
    /// node ids sorted ascending.
    pub fn query(&mut self, prefix: &str) -> Result<JsValue, JsError> {
        to_js(&self.run_query(prefix))
    }

    /// Pick the index-th suggestion of the last query and query it.
    ///
    /// Returns null if there is no such suggestion.
    pub fn select(&mut self, index: usize) -> Result<JsValue, JsError> {
        match self.handle.select(index) {
            Some(result) => to_js(&query_to_js(result)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Node positions for a canvas of the given width, ordered by id.
    pub fn layout(&mut self, canvas_width: i32) -> Result<JsValue, JsError> {
        let positions: Vec<JsPosition> = self
            .handle
            .layout(canvas_width)
            .iter()
            .map(|(id, p)| JsPosition {
                id: id.index(),
                x: p.point.x,
                y: p.point.y,
            })
            .collect();
        to_js(&positions)
    }

    /// All nodes in breadth-first order with their labels and current style.
    pub fn nodes(&self) -> Result<JsValue, JsError> {
        let nodes: Vec<JsNode> = self
            .handle
            .tree()
            .all_nodes()
            .map(|(id, node)| JsNode {
                id: id.index(),
                label: simple_upper(node.symbol()).to_string(),
                depth: node.depth(),
                word: node.word().map(str::to_string),
                style: self.handle.node_style(id).as_str(),
            })
            .collect();
        to_js(&nodes)
    }

    /// All edges, styled after the node they lead into.
    pub fn edges(&self) -> Result<JsValue, JsError> {
        let edges: Vec<JsEdge> = self
            .handle
            .tree()
            .edges()
            .map(|(parent, child)| JsEdge {
                parent: parent.index(),
                child: child.index(),
                style: self.handle.node_style(child).as_str(),
            })
            .collect();
        to_js(&edges)
    }

    /// Dictionary size.
    #[wasm_bindgen(js_name = "countTerminalNodes")]
    pub fn count_terminal_nodes(&self) -> usize {
        self.handle.count_terminal_nodes()
    }

    /// Status panel data for the last query.
    pub fn stats(&self) -> Result<JsValue, JsError> {
        let stats = self.handle.stats();
        to_js(&JsStats {
            total_words: stats.total_words,
            prefix_display: stats.prefix_display,
            found: stats.found,
        })
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the maximum number of suggestions to return.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    /// Set the layout geometry. Invalidates the cached layout.
    ///
    /// Throws if `unitWidth` is not positive or `levelHeight` is negative.
    #[wasm_bindgen(js_name = "setLayoutOptions")]
    pub fn set_layout_options(
        &mut self,
        unit_width: i32,
        level_height: i32,
        top_offset: i32,
        min_left: i32,
    ) -> Result<(), JsError> {
        self.handle
            .set_layout_options(LayoutOptions {
                unit_width,
                level_height,
                top_offset,
                min_left,
            })
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl WasmLexitree {
    fn run_query(&mut self, prefix: &str) -> JsQuery {
        query_to_js(self.handle.query(prefix.trim()))
    }
}
