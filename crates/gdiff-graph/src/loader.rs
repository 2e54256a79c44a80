use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::GraphResult;
use crate::model::Graph;

/// Resolves a string identifier to an object graph.
///
/// All implementations must satisfy these invariants:
/// - `Ok(None)` means "no graph with this identifier"; `Err` means the
///   lookup itself failed (I/O, corrupt data). Both abort a comparison run.
/// - Loading is read-only and repeatable: the same identifier yields the
///   same graph for the lifetime of the loader.
pub trait GraphLoader: Send + Sync {
    /// Resolve an identifier to a graph.
    fn load(&self, identifier: &str) -> GraphResult<Option<Graph>>;
}

/// In-memory, HashMap-based graph loader.
///
/// Intended for tests and embedding. Graphs are held behind a `RwLock` and
/// cloned on load.
#[derive(Default)]
pub struct InMemoryGraphLoader {
    graphs: RwLock<HashMap<String, Graph>>,
}

impl InMemoryGraphLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a graph under an identifier, replacing any previous one.
    pub fn insert(&self, identifier: impl Into<String>, graph: Graph) {
        self.graphs
            .write()
            .expect("lock poisoned")
            .insert(identifier.into(), graph);
    }

    /// Number of registered graphs.
    pub fn len(&self) -> usize {
        self.graphs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no graphs are registered.
    pub fn is_empty(&self) -> bool {
        self.graphs.read().expect("lock poisoned").is_empty()
    }
}

impl GraphLoader for InMemoryGraphLoader {
    fn load(&self, identifier: &str) -> GraphResult<Option<Graph>> {
        let map = self.graphs.read().expect("lock poisoned");
        Ok(map.get(identifier).cloned())
    }
}

impl std::fmt::Debug for InMemoryGraphLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryGraphLoader")
            .field("graph_count", &self.len())
            .finish()
    }
}

/// Loads graphs from a directory of JSON files.
///
/// An identifier maps to `<root>/<identifier>.json` (leading `/` stripped,
/// so asset-path-style identifiers like `/Game/Vehicles/BP_Car` nest into
/// subdirectories). A missing file is `Ok(None)`; an unreadable or
/// unparseable file is an error.
#[derive(Debug)]
pub struct JsonGraphLoader {
    root: PathBuf,
}

impl JsonGraphLoader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory graphs are resolved under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, identifier: &str) -> PathBuf {
        let relative = identifier.trim_start_matches('/');
        self.root.join(format!("{relative}.json"))
    }
}

impl GraphLoader for JsonGraphLoader {
    fn load(&self, identifier: &str) -> GraphResult<Option<Graph>> {
        let path = self.file_for(identifier);
        if !path.exists() {
            debug!(identifier, path = %path.display(), "graph file not found");
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path)?;
        let graph: Graph = serde_json::from_str(&text)?;
        debug!(identifier, subobjects = graph.subobjects.len(), "loaded graph");
        Ok(Some(graph))
    }
}
