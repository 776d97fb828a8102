//! Domain layer: entities and ports

pub mod entities;
pub mod ports;
