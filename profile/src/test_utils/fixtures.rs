//! Test fixtures
//!
//! Fixtures are built from JSON so tests exercise the same serde paths
//! as real upstream responses.

use serde_json::{json, Value};

use crate::domain::entities::{Account, AccountStats, Author, PostMetadata, RawFeedItem};

/// Decode a raw feed item from an arbitrary JSON shape.
pub fn raw_item(value: Value) -> RawFeedItem {
    serde_json::from_value(value).expect("fixture item should decode")
}

/// A plain text post.
pub fn text_post(id: &str, timestamp: &str, content: &str) -> RawFeedItem {
    raw_item(json!({
        "id": id,
        "timestamp": timestamp,
        "metadata": { "__typename": "TextOnlyMetadata", "content": content },
        "stats": { "upvotes": 0, "comments": 0, "reposts": 0, "collects": 0 },
    }))
}

/// A repost of a text post; the original gets the id `{id}-original`.
pub fn repost_of_text(id: &str, timestamp: &str, content: &str) -> RawFeedItem {
    raw_item(json!({
        "id": id,
        "timestamp": timestamp,
        "author": { "username": { "value": "reposter.lens" } },
        "repostOf": {
            "id": format!("{id}-original"),
            "timestamp": "2024-01-01T00:00:00Z",
            "author": { "username": { "value": "original.lens" } },
            "metadata": { "__typename": "TextOnlyMetadata", "content": content },
        },
    }))
}

/// An item with id and timestamp but no metadata and no repost.
pub fn malformed_item(id: &str, timestamp: &str) -> RawFeedItem {
    raw_item(json!({ "id": id, "timestamp": timestamp }))
}

pub fn test_author(name: &str, handle: &str) -> Author {
    serde_json::from_value(json!({
        "username": { "value": handle },
        "metadata": { "name": name },
    }))
    .expect("fixture author should decode")
}

pub fn article_metadata(
    title: &str,
    content: Option<&str>,
    attributes: &[(&str, &str)],
) -> PostMetadata {
    let attributes: Vec<Value> = attributes
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect();
    serde_json::from_value(json!({
        "__typename": "ArticleMetadata",
        "title": title,
        "content": content,
        "attributes": attributes,
    }))
    .expect("fixture article should decode")
}

pub fn image_metadata(url: &str) -> PostMetadata {
    serde_json::from_value(json!({
        "__typename": "ImageMetadata",
        "image": { "original": { "url": url } },
    }))
    .expect("fixture image should decode")
}

pub fn video_metadata(url: &str, cover: &str) -> PostMetadata {
    serde_json::from_value(json!({
        "__typename": "VideoMetadata",
        "video": { "item": url, "cover": cover, "duration": "2:31" },
    }))
    .expect("fixture video should decode")
}

pub fn audio_metadata(url: &str, artist: &str) -> PostMetadata {
    serde_json::from_value(json!({
        "__typename": "AudioMetadata",
        "audio": { "item": url, "artist": artist },
    }))
    .expect("fixture audio should decode")
}

pub fn test_account(local_name: &str, name: &str) -> Account {
    serde_json::from_value(json!({
        "address": "0xabc",
        "username": { "value": format!("{local_name}.lens") },
        "metadata": {
            "name": name,
            "bio": "test bio",
            "picture": "https://cdn.test/avatar.png",
        },
    }))
    .expect("fixture account should decode")
}

pub fn test_stats(posts: u64, followers: u64) -> AccountStats {
    serde_json::from_value(json!({
        "feedStats": { "posts": posts },
        "graphFollowStats": { "followers": followers },
    }))
    .expect("fixture stats should decode")
}
