// Domain layer: core models and ports (clock, randomness, key-value store).
// No external dependencies beyond chrono/serde.

pub mod model;
pub mod ports;
