use serde::{Deserialize, Serialize};

use crate::domain::condensation::ComponentId;
use crate::usecase::optimizer::RouteAnalysis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentReport {
    pub id: ComponentId,
    pub airports: Vec<String>,
    pub in_degree: usize,
    pub cyclic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteReport {
    pub minimum_additional_routes: usize,
    pub airports: usize,
    pub routes: usize,
    pub components: Vec<ComponentReport>,
    pub condensed_edges: Vec<(ComponentId, ComponentId)>,
    pub source_components: Vec<ComponentId>,
}

impl RouteReport {
    pub fn from_analysis(analysis: &RouteAnalysis<String>, airports: usize, routes: usize) -> Self {
        let components = analysis
            .components
            .iter()
            .enumerate()
            .map(|(i, members)| ComponentReport {
                id: ComponentId(i),
                airports: members.clone(),
                in_degree: analysis.condensation.in_degree[i],
                cyclic: analysis.cyclic_component[i],
            })
            .collect();

        Self {
            minimum_additional_routes: analysis.minimum_additional_routes,
            airports,
            routes,
            components,
            condensed_edges: analysis.condensation.edges().collect(),
            source_components: analysis.source_components(),
        }
    }

    /// Airports of every component nothing flies into. Ids with no
    /// matching component are skipped.
    pub fn unreached_airports(&self) -> Vec<&[String]> {
        self.source_components
            .iter()
            .filter_map(|id| self.components.get(id.0))
            .map(|c| c.airports.as_slice())
            .collect()
    }
}
