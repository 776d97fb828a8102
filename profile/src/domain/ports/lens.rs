//! Lens API port trait
//!
//! The three upstream operations a profile page load needs, issued
//! strictly in sequence by the service. The concrete GraphQL adapter
//! lives in `adapters::lens`; tests use the mock from `test_utils`.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountStats, RawFeedItem};
use crate::error::LensError;

#[async_trait]
pub trait LensApi: Send + Sync {
    /// Fetch an account by username local name + namespace.
    async fn fetch_account(&self, local_name: &str, namespace: &str)
        -> Result<Account, LensError>;

    /// Fetch aggregate stats for an account address.
    async fn fetch_stats(&self, address: &str) -> Result<AccountStats, LensError>;

    /// Fetch one page of posts authored by the given address.
    async fn fetch_posts(&self, author: &str) -> Result<Vec<RawFeedItem>, LensError>;
}
