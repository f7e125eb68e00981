// Domain layer: models and ports. Concrete adapters live under config/
// and the phase implementations under core/.

pub mod model;
pub mod ports;
