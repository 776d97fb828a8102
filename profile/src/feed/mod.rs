//! Feed pipeline
//!
//! Raw posts response -> normalizer -> content resolver -> renderer.
//! The whole pipeline is pure: it neither fetches nor mounts anything.

pub mod normalizer;
pub mod renderer;
pub mod resolver;

pub use normalizer::normalize_feed;
pub use renderer::{
    elem, format_timestamp, render_feed, render_feed_item, to_html, Element, Node, TimestampLabel,
};
pub use resolver::{extract_media, resolve_content, BodyBlock, Media, MediaKind, ResolvedContent};

use chrono::{DateTime, Utc};

use crate::domain::entities::RawFeedItem;
use crate::error::FeedError;

/// The full pipeline as one pure function: raw `posts.items` in,
/// rendered cards out, newest first.
pub fn render_posts_response(
    items: Vec<RawFeedItem>,
    now: DateTime<Utc>,
) -> Result<Vec<Node>, FeedError> {
    let feed = normalize_feed(items)?;
    Ok(render_feed(&feed, now))
}
