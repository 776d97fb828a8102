//! Profile page service
//!
//! Loads everything one profile page needs: account, stats and the
//! normalized feed. Calls are issued strictly in sequence and each
//! stage degrades independently, except the account fetch which the
//! rest of the page depends on.

use std::sync::Arc;

use crate::domain::entities::{Account, AccountStats, FeedItem};
use crate::domain::ports::LensApi;
use crate::error::ProfileError;
use crate::feed::normalize_feed;

/// Everything needed to render one profile page.
#[derive(Debug)]
pub struct ProfilePage {
    pub account: Account,
    /// `None` when the stats fetch failed; the header renders without
    /// counters in that case.
    pub stats: Option<AccountStats>,
    pub items: Vec<FeedItem>,
    /// Set when the feed could not be loaded; the page still renders
    /// with this message in place of the timeline.
    pub feed_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileService<L> {
    lens: Arc<L>,
}

impl<L: LensApi> ProfileService<L> {
    pub fn new(lens: Arc<L>) -> Self {
        Self { lens }
    }

    /// Load a full profile page.
    ///
    /// The account fetch is the only hard dependency; a failed stats
    /// or feed fetch is recorded and the page loads anyway.
    pub async fn load_page(
        &self,
        local_name: &str,
        namespace: &str,
        address: &str,
    ) -> Result<ProfilePage, ProfileError> {
        let account = self.lens.fetch_account(local_name, namespace).await?;

        let stats = match self.lens.fetch_stats(address).await {
            Ok(stats) => Some(stats),
            Err(error) => {
                tracing::warn!(%error, address, "stats fetch failed, rendering header without counters");
                None
            }
        };

        let (items, feed_error) = match self.load_feed(address).await {
            Ok(items) => (items, None),
            Err(error) => {
                tracing::warn!(%error, address, "feed load failed");
                (Vec::new(), Some(error.to_string()))
            }
        };

        Ok(ProfilePage {
            account,
            stats,
            items,
            feed_error,
        })
    }

    async fn load_feed(&self, address: &str) -> Result<Vec<FeedItem>, ProfileError> {
        let raw = self.lens.fetch_posts(address).await?;
        Ok(normalize_feed(raw)?)
    }
}
