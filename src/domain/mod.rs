// Domain layer: landmark model, resolution outcome and the ports the core depends on.

pub mod model;
pub mod ports;
