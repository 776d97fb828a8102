//! Application services
//!
//! Orchestration between the Lens port and the feed pipeline.

pub mod profile_service;

pub use profile_service::{ProfilePage, ProfileService};
