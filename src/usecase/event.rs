use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    RoutesLoaded {
        routes: usize,
        airports: usize,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    CondensationBuilt {
        components: usize,
        condensed_edges: usize,
        source_components: usize,
    },

    Finished {
        stats: AnalyzeStats,
    },
}
