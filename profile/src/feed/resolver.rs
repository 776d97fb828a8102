//! Content resolver
//!
//! Projects a `PostMetadata` union member into renderer-ready content:
//! a display text (with per-type fallback chains), an optional rich
//! article body, and an optional media record.

use serde::Serialize;

use crate::domain::entities::{
    ArticleMetadata, AudioAsset, ImageAsset, PostMetadata, RawBlock, RawInline, VideoAsset,
};

pub const NO_CONTENT: &str = "No content available";
pub const NO_ARTICLE_CONTENT: &str = "Article content not available";

/// Renderer-ready projection of a post's metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Plain display text, always non-empty via the fallback chain.
    pub text: String,
    /// Structured article body; empty for non-article posts or when
    /// the rich body could not be parsed.
    pub body: Vec<BodyBlock>,
    pub media: Option<Media>,
}

/// One structural unit of an article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyBlock {
    Paragraph {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Image {
        url: String,
        alt: String,
        caption: Option<String>,
        cover: bool,
        wide: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

/// A media attachment extracted from typed metadata. Fields default to
/// empty strings on the way in; `has_source` gates rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Media {
    pub kind: MediaKind,
    pub url: String,
    pub cover: String,
    pub duration_label: String,
    pub artist: String,
    pub genre: String,
    pub credits: String,
}

impl Media {
    fn new(kind: MediaKind) -> Self {
        Media {
            kind,
            url: String::new(),
            cover: String::new(),
            duration_label: String::new(),
            artist: String::new(),
            genre: String::new(),
            credits: String::new(),
        }
    }

    /// An empty url means the upstream asset record was present but
    /// blank; the renderer emits no media block in that case.
    pub fn has_source(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Resolve a post's metadata to display content.
///
/// Text resolution is first-match-wins per type tag and media
/// resolution is independent of it; an article can carry a rich body
/// and a media attachment at the same time.
pub fn resolve_content(metadata: Option<&PostMetadata>) -> ResolvedContent {
    let Some(metadata) = metadata else {
        return ResolvedContent {
            text: NO_CONTENT.to_string(),
            ..ResolvedContent::default()
        };
    };

    let mut resolved = match metadata {
        PostMetadata::Article(article) => resolve_article(article),
        PostMetadata::TextOnly(text) => ResolvedContent {
            text: first_non_empty(&[text.content.as_deref()], NO_CONTENT),
            ..ResolvedContent::default()
        },
        PostMetadata::Image(image) => ResolvedContent {
            text: first_non_empty(
                &[
                    image.content.as_deref(),
                    image.description.as_deref(),
                    image.name.as_deref(),
                ],
                NO_CONTENT,
            ),
            ..ResolvedContent::default()
        },
        PostMetadata::Video(video) => ResolvedContent {
            text: first_non_empty(
                &[
                    video.content.as_deref(),
                    video.description.as_deref(),
                    video.name.as_deref(),
                ],
                NO_CONTENT,
            ),
            ..ResolvedContent::default()
        },
        PostMetadata::Audio(audio) => ResolvedContent {
            text: first_non_empty(
                &[
                    audio.content.as_deref(),
                    audio.description.as_deref(),
                    audio.name.as_deref(),
                ],
                NO_CONTENT,
            ),
            ..ResolvedContent::default()
        },
        PostMetadata::Other => ResolvedContent {
            text: NO_CONTENT.to_string(),
            ..ResolvedContent::default()
        },
    };

    resolved.media = extract_media(metadata);
    resolved
}

fn first_non_empty(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(&fallback)
        .to_string()
}

fn resolve_article(article: &ArticleMetadata) -> ResolvedContent {
    let title = article.title.clone().filter(|s| !s.is_empty());
    let subtitle = article.attribute("subtitle").map(str::to_string);
    let cover_url = article.attribute("coverUrl");

    let text = first_non_empty(&[article.content.as_deref()], NO_ARTICLE_CONTENT);

    let body = match article.attribute("contentJson") {
        Some(raw) => match serde_json::from_str::<Vec<RawBlock>>(raw) {
            Ok(blocks) => resolve_blocks(&blocks, cover_url),
            Err(error) => {
                tracing::warn!(%error, "article body is not valid JSON, using plain content");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    ResolvedContent {
        title,
        subtitle,
        text,
        body,
        media: None,
    }
}

fn resolve_blocks(blocks: &[RawBlock], cover_url: Option<&str>) -> Vec<BodyBlock> {
    let cover_file = cover_url.map(last_path_segment);
    let mut body = Vec::new();

    for block in blocks {
        match block.kind.as_str() {
            // Already rendered from the top-level title and the
            // subtitle attribute.
            "title" | "subtitle" => {}
            "img" => {
                let Some(url) = block.url.as_deref().filter(|u| !u.is_empty()) else {
                    continue;
                };
                let cover = cover_file
                    .map(|file| !file.is_empty() && url.contains(file))
                    .unwrap_or(false);
                body.push(BodyBlock::Image {
                    url: url.to_string(),
                    alt: block.alt.clone().unwrap_or_default(),
                    caption: block.caption.clone().filter(|c| !c.is_empty()),
                    cover,
                    wide: block.width.as_deref() == Some("wide"),
                });
            }
            "paragraph" | "p" => {
                let text = inline_text(block);
                if !text.is_empty() {
                    body.push(BodyBlock::Paragraph { text });
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let text = inline_text(block);
                if !text.is_empty() {
                    let level = block.kind.as_bytes()[1] - b'0';
                    body.push(BodyBlock::Heading { level, text });
                }
            }
            "ul" | "ol" => {
                let items: Vec<String> = block
                    .children
                    .iter()
                    .map(inline_item_text)
                    .filter(|t| !t.is_empty())
                    .collect();
                if !items.is_empty() {
                    body.push(BodyBlock::List {
                        ordered: block.kind == "ol",
                        items,
                    });
                }
            }
            other => {
                tracing::debug!(kind = other, "ignoring unknown article block type");
            }
        }
    }

    body
}

fn inline_text(block: &RawBlock) -> String {
    let text: String = block
        .children
        .iter()
        .filter_map(|child| child.text.as_deref())
        .collect();
    text.trim().to_string()
}

fn inline_item_text(item: &RawInline) -> String {
    let own = item.text.as_deref().unwrap_or_default();
    let nested: String = item
        .children
        .iter()
        .filter_map(|child| child.text.as_deref())
        .collect();
    format!("{own}{nested}").trim().to_string()
}

fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Extract a media attachment from typed metadata. Driven purely by
/// the type tag; text resolution never affects it.
pub fn extract_media(metadata: &PostMetadata) -> Option<Media> {
    match metadata {
        PostMetadata::Image(image) => Some(image_media(image.image.as_ref())),
        PostMetadata::Video(video) => Some(video_media(video.video.as_ref())),
        PostMetadata::Audio(audio) => Some(audio_media(audio.audio.as_ref())),
        _ => None,
    }
}

fn image_media(asset: Option<&ImageAsset>) -> Media {
    let mut media = Media::new(MediaKind::Image);
    if let Some(url) = asset.and_then(|a| a.original.as_ref()).and_then(|o| o.url.as_deref()) {
        media.url = url.to_string();
    }
    media
}

fn video_media(asset: Option<&VideoAsset>) -> Media {
    let mut media = Media::new(MediaKind::Video);
    if let Some(asset) = asset {
        media.url = asset.item.clone().unwrap_or_default();
        media.cover = asset.cover.clone().unwrap_or_default();
        media.duration_label = asset.duration.clone().unwrap_or_default();
    }
    media
}

fn audio_media(asset: Option<&AudioAsset>) -> Media {
    let mut media = Media::new(MediaKind::Audio);
    if let Some(asset) = asset {
        media.url = asset.item.clone().unwrap_or_default();
        media.cover = asset.cover.clone().unwrap_or_default();
        media.duration_label = asset.duration.clone().unwrap_or_default();
        media.artist = asset.artist.clone().unwrap_or_default();
        media.genre = asset.genre.clone().unwrap_or_default();
        media.credits = asset.credits.clone().unwrap_or_default();
    }
    media
}
