//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: graph types, condensation, SCC port
//! - usecase: route optimizer orchestration + progress events
//! - infrastructure: Kosaraju SCC, serde + async IO, schema checks, NDJSON events
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    airline_route_optimizer::interface::cli::run().await
}
