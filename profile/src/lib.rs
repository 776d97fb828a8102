//! Core pipeline for rendering a public Lens profile page.
//!
//! Fetches account, stats, and post data from the Lens GraphQL API,
//! normalizes the heterogeneous post/repost/media shapes into a single
//! reverse-chronological feed, and renders each item into an immutable
//! presentational tree. Uses hexagonal (ports & adapters) architecture:
//! the upstream API sits behind the [`LensApi`] port, and rendering is
//! substrate-agnostic so callers mount the tree however they like.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;

pub use adapters::LensClient;
pub use app::{ProfilePage, ProfileService};
pub use config::ProfileConfig;
pub use domain::ports::LensApi;
pub use error::{FeedError, LensError, ProfileError};
