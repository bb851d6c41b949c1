//! Route network connectivity analysis.
//!
//! Layers follow Clean Architecture:
//! - domain: graph types, condensation, ports
//! - usecase: route optimizer orchestration + progress events
//! - infrastructure: Kosaraju SCC, serde + async IO, schema checks, NDJSON events
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
