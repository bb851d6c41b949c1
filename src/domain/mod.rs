// Domain layer: pure, synchronous graph rules
pub mod condensation;
pub mod graph;
pub mod traits;
