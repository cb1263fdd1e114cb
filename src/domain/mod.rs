// Domain layer: color models, the matcher and ports. No I/O here.

pub mod matcher;
pub mod model;
pub mod ports;
