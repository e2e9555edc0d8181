// Domain layer: tags, transcript model and the ports the pattern components implement.

pub mod model;
pub mod ports;
