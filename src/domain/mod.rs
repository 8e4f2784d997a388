// Domain layer: plain records and the provider ports the rest of the crate depends on.

pub mod model;
pub mod ports;
