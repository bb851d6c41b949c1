//! Usecase layer: application workflows + events.

pub mod analyze;
pub mod event;
pub mod optimizer;
pub mod report;
pub mod sample;
pub mod stats;
