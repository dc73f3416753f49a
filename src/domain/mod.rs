// Domain layer: album models and ports (interfaces).

pub mod model;
pub mod ports;
