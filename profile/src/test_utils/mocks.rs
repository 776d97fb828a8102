//! Hand-written mock of the Lens port. Any operation left unconfigured
//! fails, which doubles as the failure path in service tests.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountStats, RawFeedItem};
use crate::domain::ports::LensApi;
use crate::error::LensError;

#[derive(Default)]
pub struct MockLensApi {
    account: Option<Account>,
    stats: Option<AccountStats>,
    posts: Option<Vec<RawFeedItem>>,
}

impl MockLensApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_stats(mut self, stats: AccountStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_posts(mut self, posts: Vec<RawFeedItem>) -> Self {
        self.posts = Some(posts);
        self
    }
}

#[async_trait]
impl LensApi for MockLensApi {
    async fn fetch_account(
        &self,
        _local_name: &str,
        _namespace: &str,
    ) -> Result<Account, LensError> {
        self.account
            .clone()
            .ok_or_else(|| LensError::GraphQl("account fetch not configured".to_string()))
    }

    async fn fetch_stats(&self, _address: &str) -> Result<AccountStats, LensError> {
        self.stats
            .clone()
            .ok_or_else(|| LensError::GraphQl("stats fetch not configured".to_string()))
    }

    async fn fetch_posts(&self, _address: &str) -> Result<Vec<RawFeedItem>, LensError> {
        self.posts
            .clone()
            .ok_or_else(|| LensError::GraphQl("posts fetch not configured".to_string()))
    }
}
