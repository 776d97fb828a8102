//! Lens GraphQL adapter

mod client;

pub use client::LensClient;
