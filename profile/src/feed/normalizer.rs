//! Feed normalizer
//!
//! Flattens the Post/Repost union returned by the posts query into a
//! single reverse-chronological sequence of `FeedItem`s.

use std::cmp::Reverse;

use crate::domain::entities::{FeedItem, Post, RawFeedItem, Repost};
use crate::error::FeedError;

/// Normalize one page of raw posts into an ordered feed.
///
/// Malformed items are skipped with a warning. An empty input list is
/// a hard failure: the upstream contract returns the items array of a
/// real feed page, so its absence signals a broken response rather
/// than an account with no posts.
pub fn normalize_feed(items: Vec<RawFeedItem>) -> Result<Vec<FeedItem>, FeedError> {
    if items.is_empty() {
        return Err(FeedError::EmptyFeed);
    }

    let mut feed: Vec<FeedItem> = items.into_iter().filter_map(normalize_item).collect();

    // Stable sort keeps input order for equal timestamps.
    feed.sort_by_key(|item| Reverse(item.sort_key()));

    Ok(feed)
}

fn normalize_item(raw: RawFeedItem) -> Option<FeedItem> {
    let Some(id) = raw.id else {
        tracing::warn!("skipping feed item with no id");
        return None;
    };
    let Some(timestamp) = raw.timestamp else {
        tracing::warn!(%id, "skipping feed item with no timestamp");
        return None;
    };

    if let Some(original) = raw.repost_of {
        if original.metadata.is_some() {
            return Some(FeedItem::Repost(Repost {
                id,
                timestamp,
                reposted_by: raw.author.unwrap_or_default(),
                original_post: into_post(*original)?,
            }));
        }
        // A repost whose original carries no metadata falls through
        // to the plain-post check. When the original has metadata but
        // lacks id or timestamp, `into_post` drops the item instead.
    }

    match raw.metadata {
        Some(metadata) => Some(FeedItem::Post(Post {
            id,
            author: raw.author.unwrap_or_default(),
            timestamp,
            app: raw.app,
            metadata,
            stats: raw.stats.unwrap_or_default(),
        })),
        None => {
            tracing::warn!(%id, "skipping malformed feed item with no metadata");
            None
        }
    }
}

fn into_post(raw: RawFeedItem) -> Option<Post> {
    let (Some(id), Some(timestamp), Some(metadata)) = (raw.id, raw.timestamp, raw.metadata) else {
        tracing::warn!("skipping repost whose original post is incomplete");
        return None;
    };

    Some(Post {
        id,
        author: raw.author.unwrap_or_default(),
        timestamp,
        app: raw.app,
        metadata,
        stats: raw.stats.unwrap_or_default(),
    })
}
