// Domain layer: lookup payload model and ports (interfaces) for the source, snapshot store and config.

pub mod model;
pub mod ports;
