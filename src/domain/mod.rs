// Domain layer: the values a calculation is made of and the ports the
// binary plugs configuration into. No I/O here.

pub mod model;
pub mod ports;
