//! Adapters for external services
//!
//! Concrete implementations of the domain ports.

pub mod lens;

pub use lens::LensClient;
