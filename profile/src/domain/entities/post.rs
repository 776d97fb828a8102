//! Feed item entities
//!
//! `RawFeedItem` mirrors one member of the `posts.items` union on the
//! wire; `FeedItem` is the normalized representation the renderer
//! consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Username;
use super::metadata::PostMetadata;
use super::{deserialize_null_default, DEFAULT_AVATAR};

/// One raw member of `posts.items`: either a plain post or a repost.
/// Every field is optional; validation happens during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeedItem {
    pub id: Option<String>,
    pub author: Option<Author>,
    pub timestamp: Option<String>,
    pub app: Option<AppInfo>,
    pub metadata: Option<PostMetadata>,
    pub stats: Option<PostStats>,
    pub repost_of: Option<Box<RawFeedItem>>,
}

/// A post or repost author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    pub username: Option<Username>,
    pub metadata: Option<AuthorMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorMetadata {
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl Author {
    /// Display name with the given fallback label ("Unknown" for post
    /// authors, "Someone" in repost credit position).
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.username
                    .as_ref()
                    .map(|u| u.value.as_str())
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or(fallback)
    }

    pub fn avatar_url(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.picture.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }
}

/// The app a post was published through
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppInfo {
    pub metadata: Option<AppMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub url: Option<String>,
}

impl AppInfo {
    pub fn logo(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.logo.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.url.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Post engagement counters; every counter defaults to zero when the
/// upstream omits or nulls it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostStats {
    #[serde(alias = "totalUpvotes", deserialize_with = "deserialize_null_default")]
    pub upvotes: u64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub comments: u64,
    #[serde(alias = "totalAmountOfMirrors", deserialize_with = "deserialize_null_default")]
    pub reposts: u64,
    #[serde(alias = "totalAmountOfCollects", deserialize_with = "deserialize_null_default")]
    pub collects: u64,
}

/// A normalized plain post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: String,
    pub author: Author,
    pub timestamp: String,
    pub app: Option<AppInfo>,
    pub metadata: PostMetadata,
    pub stats: PostStats,
}

/// A normalized repost wrapper around an original post
#[derive(Debug, Clone, Serialize)]
pub struct Repost {
    pub id: String,
    pub timestamp: String,
    pub reposted_by: Author,
    pub original_post: Post,
}

/// One unit of the rendered timeline
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum FeedItem {
    Post(Post),
    Repost(Repost),
}

impl FeedItem {
    pub fn id(&self) -> &str {
        match self {
            FeedItem::Post(post) => &post.id,
            FeedItem::Repost(repost) => &repost.id,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            FeedItem::Post(post) => &post.timestamp,
            FeedItem::Repost(repost) => &repost.timestamp,
        }
    }

    /// Sort key for reverse-chronological ordering. Unparsable
    /// timestamps sort as the oldest possible instant.
    pub fn sort_key(&self) -> DateTime<Utc> {
        parse_timestamp(self.timestamp()).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Parse an upstream RFC3339 timestamp.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
