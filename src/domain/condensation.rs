use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::domain::graph::{Graph, SccResult};

/// Position of a component in an [`SccResult`]; never a node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub usize);

/// Component-level DAG obtained by contracting every SCC to one vertex.
#[derive(Debug, Clone, Default)]
pub struct Condensation {
    pub successors: BTreeMap<ComponentId, BTreeSet<ComponentId>>,
    pub in_degree: Vec<usize>,
}

impl Condensation {
    /// Every edge between two different components is recorded once;
    /// in-degree counts distinct condensed edges only.
    pub fn build(graph: &Graph, scc: &SccResult) -> Self {
        let mut successors: BTreeMap<ComponentId, BTreeSet<ComponentId>> = BTreeMap::new();
        let mut in_degree = vec![0usize; scc.components.len()];

        for (u, outs) in graph.edges.iter().enumerate() {
            let Some(cu) = scc.component_of[u] else {
                continue;
            };
            for &v in outs {
                let Some(cv) = scc.component_of[v] else {
                    continue;
                };
                if cu == cv {
                    continue;
                }
                if successors.entry(cu).or_default().insert(cv) {
                    in_degree[cv.0] += 1;
                }
            }
        }

        Self {
            successors,
            in_degree,
        }
    }

    pub fn component_count(&self) -> usize {
        self.in_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(|s| s.len()).sum()
    }

    pub fn successors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        self.successors.get(&id).into_iter().flatten().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (ComponentId, ComponentId)> + '_ {
        self.successors
            .iter()
            .flat_map(|(&src, dsts)| dsts.iter().map(move |&dst| (src, dst)))
    }

    pub fn source_components(&self) -> Vec<ComponentId> {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, &deg)| deg == 0)
            .map(|(i, _)| ComponentId(i))
            .collect()
    }

    pub fn zero_in_degree_count(&self) -> usize {
        self.in_degree.iter().filter(|&&deg| deg == 0).count()
    }

    /// Number of new edges needed so that every component is reachable.
    ///
    /// A single component (or an empty graph) is already strongly connected,
    /// where the raw zero-in-degree count would report 1.
    pub fn minimum_additional_edges(&self) -> usize {
        if self.component_count() < 2 {
            return 0;
        }
        self.zero_in_degree_count()
    }

    /// Kahn's algorithm; `None` when the component graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<ComponentId>> {
        let mut remaining = self.in_degree.clone();
        let mut ready: VecDeque<ComponentId> = self.source_components().into();
        let mut order = Vec::with_capacity(remaining.len());

        while let Some(c) = ready.pop_front() {
            order.push(c);
            for next in self.successors(c) {
                remaining[next.0] -= 1;
                if remaining[next.0] == 0 {
                    ready.push_back(next);
                }
            }
        }

        (order.len() == remaining.len()).then_some(order)
    }
}
