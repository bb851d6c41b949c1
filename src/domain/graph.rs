use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::condensation::ComponentId;

/// Index-level adjacency: node `i` has out-edges `edges[i]`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SccResult {
    /// `None` for nodes no traversal reached (no edges in or out).
    pub component_of: Vec<Option<ComponentId>>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }
}

/// Directed graph over opaque node labels.
///
/// Labels are interned to dense indices in first-seen order so the SCC
/// detectors can run on a plain [`Graph`]. Edges keep insertion order and
/// multiplicity.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N> {
    labels: Vec<N>,
    index: HashMap<N, usize>,
    sources: Vec<usize>,
    adjacency: Graph,
}

impl<N> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            sources: Vec::new(),
            adjacency: Graph::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> DirectedGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: N, to: N) {
        let u = self.intern(from);
        let v = self.intern(to);
        if self.adjacency.edges[u].is_empty() {
            self.sources.push(u);
        }
        self.adjacency.edges[u].push(v);
    }

    /// Out-neighbors of `node`; empty for target-only or unknown nodes.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + 'a {
        let outs: &[usize] = match self.index.get(node) {
            Some(&u) => &self.adjacency.edges[u],
            None => &[],
        };
        outs.iter().map(move |&v| &self.labels[v])
    }

    /// Distinct nodes with at least one recorded outgoing edge.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.sources.iter().map(move |&u| &self.labels[u])
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn label(&self, ix: usize) -> &N {
        &self.labels[ix]
    }

    pub fn as_index_graph(&self) -> &Graph {
        &self.adjacency
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&ix) = self.index.get(&node) {
            return ix;
        }
        let ix = self.labels.len();
        self.labels.push(node.clone());
        self.index.insert(node, ix);
        self.adjacency.edges.push(Vec::new());
        ix
    }
}
