// Domain layer: form data model and ports (interfaces).

pub mod model;
pub mod ports;
