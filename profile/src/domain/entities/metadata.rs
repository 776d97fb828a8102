//! Post metadata variants
//!
//! The posts query returns a union of metadata shapes discriminated by
//! the GraphQL `__typename` field. Unknown variants deserialize into
//! the explicit `Other` catch-all rather than failing the item.

use serde::{Deserialize, Serialize};

use super::deserialize_null_default;

/// Post metadata, tagged by the `__typename` discriminator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum PostMetadata {
    #[serde(rename = "TextOnlyMetadata")]
    TextOnly(TextOnlyMetadata),
    #[serde(rename = "ArticleMetadata")]
    Article(ArticleMetadata),
    #[serde(rename = "ImageMetadata")]
    Image(ImageMetadata),
    #[serde(rename = "VideoMetadata")]
    Video(VideoMetadata),
    #[serde(rename = "AudioMetadata")]
    Audio(AudioMetadata),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextOnlyMetadata {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub attributes: Vec<MetadataAttribute>,
}

/// One key/value metadata attribute (`subtitle`, `coverUrl`,
/// `contentJson`, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataAttribute {
    pub key: String,
    pub value: String,
}

impl ArticleMetadata {
    /// Look up an attribute by key. Empty values count as absent.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub content: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub image: Option<ImageAsset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageAsset {
    pub original: Option<ImageSource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub content: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub video: Option<VideoAsset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoAsset {
    pub item: Option<String>,
    pub cover: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioMetadata {
    pub content: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub audio: Option<AudioAsset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioAsset {
    pub item: Option<String>,
    pub cover: Option<String>,
    pub duration: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub credits: Option<String>,
}

/// One block of an article's rich-text body, as serialized in the
/// `contentJson` attribute. Deliberately loose: unknown fields are
/// ignored and unknown block types resolve to nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub width: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub children: Vec<RawInline>,
}

/// An inline node inside a block: a text span, or (for list items) a
/// nested run of spans.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInline {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub children: Vec<RawInline>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_discriminated_by_typename() {
        let metadata: PostMetadata = serde_json::from_value(json!({
            "__typename": "TextOnlyMetadata",
            "content": "hello",
        }))
        .unwrap();

        assert!(matches!(
            metadata,
            PostMetadata::TextOnly(TextOnlyMetadata { content: Some(ref c) }) if c == "hello"
        ));
    }

    #[test]
    fn unknown_typename_becomes_other() {
        let metadata: PostMetadata = serde_json::from_value(json!({
            "__typename": "LivestreamMetadata",
            "playbackUrl": "https://stream.test/live",
        }))
        .unwrap();

        assert!(matches!(metadata, PostMetadata::Other));
    }

    #[test]
    fn article_attribute_lookup_skips_empty_values() {
        let article: ArticleMetadata = serde_json::from_value(json!({
            "title": "T",
            "attributes": [
                { "key": "subtitle", "value": "" },
                { "key": "coverUrl", "value": "https://cdn.test/cover.png" },
            ],
        }))
        .unwrap();

        assert!(article.attribute("subtitle").is_none());
        assert_eq!(article.attribute("coverUrl"), Some("https://cdn.test/cover.png"));
        assert!(article.attribute("contentJson").is_none());
    }

    #[test]
    fn raw_block_tolerates_missing_fields() {
        let block: RawBlock = serde_json::from_value(json!({
            "type": "paragraph",
            "children": [{ "text": "hi" }],
        }))
        .unwrap();

        assert_eq!(block.kind, "paragraph");
        assert_eq!(block.children.len(), 1);
        assert_eq!(block.children[0].text.as_deref(), Some("hi"));
    }
}
