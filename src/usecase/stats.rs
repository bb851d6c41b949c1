use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeStats {
    pub routes_seen: usize,
    pub airports_seen: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub condensed_edges: usize,
    pub source_components: usize,
    pub minimum_additional_routes: usize,
}
