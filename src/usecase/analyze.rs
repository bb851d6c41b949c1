use crate::domain::condensation::Condensation;
use crate::domain::traits::SccDetector;
use crate::usecase::event::AppEvent;
use crate::usecase::optimizer::{RouteAnalysis, RouteOptimizer};
use crate::usecase::report::RouteReport;
use crate::usecase::stats::AnalyzeStats;
use anyhow::Result;
use tokio::sync::mpsc;

/// Loads `routes`, runs SCC detection and condensation, and reports the
/// minimum number of routes to add. Progress goes to `sink` when present.
pub async fn analyze_routes(
    routes: Vec<(String, String)>,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(RouteReport, AnalyzeStats)> {
    let mut stats = AnalyzeStats::default();

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "load_routes".into(),
        },
    )
    .await;
    let mut optimizer = RouteOptimizer::new();
    stats.routes_seen = routes.len();
    optimizer.add_routes(routes);
    stats.airports_seen = optimizer.graph().node_count();
    emit(
        &sink,
        AppEvent::RoutesLoaded {
            routes: stats.routes_seen,
            airports: stats.airports_seen,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "load_routes".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc_res = optimizer.strongly_connected_components(scc);
    stats.components = scc_res.components.len();
    stats.cyclic_components = scc_res.cyclic_count();
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: optimizer.graph().node_count(),
            edges: optimizer.graph().edge_count(),
            components: stats.components,
            cyclic_components: stats.cyclic_components,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "condensation".into(),
        },
    )
    .await;
    let condensation: Condensation = optimizer.condense(&scc_res);
    stats.condensed_edges = condensation.edge_count();
    stats.source_components = condensation.zero_in_degree_count();
    emit(
        &sink,
        AppEvent::CondensationBuilt {
            components: condensation.component_count(),
            condensed_edges: stats.condensed_edges,
            source_components: stats.source_components,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "condensation".into(),
        },
    )
    .await;

    let analysis: RouteAnalysis<String> = optimizer.label_analysis(scc_res, condensation);
    stats.minimum_additional_routes = analysis.minimum_additional_routes;
    let report = RouteReport::from_analysis(&analysis, stats.airports_seen, stats.routes_seen);

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((report, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
