//! Domain entities
//!
//! Wire shapes for the Lens GraphQL responses plus the normalized feed
//! representation the renderer consumes.

pub mod account;
pub mod metadata;
pub mod post;

pub use account::{Account, AccountMetadata, AccountStats, FeedStats, GraphFollowStats, Username};
pub use metadata::{
    ArticleMetadata, AudioAsset, AudioMetadata, ImageAsset, ImageMetadata, ImageSource,
    MetadataAttribute, PostMetadata, RawBlock, RawInline, TextOnlyMetadata, VideoAsset,
    VideoMetadata,
};
pub use post::{
    parse_timestamp, AppInfo, AppMetadata, Author, AuthorMetadata, FeedItem, Post, PostStats,
    RawFeedItem, Repost,
};

use serde::{Deserialize, Deserializer};

/// Path of the avatar served when an account or author has no picture.
pub const DEFAULT_AVATAR: &str = "assets/default-avatar.png";

/// Helper to deserialize null as default (empty vec, zero, etc.)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
