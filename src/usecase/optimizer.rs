use std::hash::Hash;

use crate::domain::condensation::{ComponentId, Condensation};
use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::traits::SccDetector;

/// Accumulates routes and answers how many must be added for every
/// airport to reach every other one.
#[derive(Debug, Clone)]
pub struct RouteOptimizer<N> {
    graph: DirectedGraph<N>,
}

impl<N> Default for RouteOptimizer<N> {
    fn default() -> Self {
        Self {
            graph: DirectedGraph::default(),
        }
    }
}

/// Labeled view of one optimizer run.
#[derive(Debug, Clone)]
pub struct RouteAnalysis<N> {
    pub components: Vec<Vec<N>>,
    pub cyclic_component: Vec<bool>,
    pub condensation: Condensation,
    pub minimum_additional_routes: usize,
}

impl<N> RouteAnalysis<N> {
    pub fn source_components(&self) -> Vec<ComponentId> {
        self.condensation.source_components()
    }
}

impl<N: Eq + Hash + Clone> RouteOptimizer<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_route(&mut self, from: N, to: N) {
        self.graph.add_edge(from, to);
    }

    pub fn add_routes<I>(&mut self, routes: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (from, to) in routes {
            self.add_route(from, to);
        }
    }

    pub fn graph(&self) -> &DirectedGraph<N> {
        &self.graph
    }

    pub fn compute_minimum_additional_routes(&self, scc: &dyn SccDetector) -> usize {
        let scc_res = self.strongly_connected_components(scc);
        self.condense(&scc_res).minimum_additional_edges()
    }

    pub fn analyze(&self, scc: &dyn SccDetector) -> RouteAnalysis<N> {
        let scc_res = self.strongly_connected_components(scc);
        let condensation = self.condense(&scc_res);
        self.label_analysis(scc_res, condensation)
    }

    pub fn strongly_connected_components(&self, scc: &dyn SccDetector) -> SccResult {
        scc.compute_scc(self.graph.as_index_graph())
    }

    pub fn condense(&self, scc_res: &SccResult) -> Condensation {
        Condensation::build(self.graph.as_index_graph(), scc_res)
    }

    /// Attaches node labels to the results of
    /// [`strongly_connected_components`](Self::strongly_connected_components)
    /// and [`condense`](Self::condense).
    pub fn label_analysis(
        &self,
        scc_res: SccResult,
        condensation: Condensation,
    ) -> RouteAnalysis<N> {
        let components = scc_res
            .components
            .iter()
            .map(|comp| comp.iter().map(|&v| self.graph.label(v).clone()).collect())
            .collect();

        RouteAnalysis {
            components,
            cyclic_component: scc_res.cyclic_component,
            minimum_additional_routes: condensation.minimum_additional_edges(),
            condensation,
        }
    }
}
