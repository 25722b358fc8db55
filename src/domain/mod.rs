// Domain layer: song models and ports (interfaces). No external dependencies beyond std.

pub mod model;
pub mod ports;
