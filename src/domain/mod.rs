// Domain layer: report models and the ports (traits) the pipeline talks through.

pub mod model;
pub mod ports;
