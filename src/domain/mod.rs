// Domain layer: value types and ports. No framework dependencies beyond serde.

pub mod model;
pub mod ports;
