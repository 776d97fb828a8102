//! Feed renderer
//!
//! Builds a presentational element tree for each feed item and
//! serializes it to HTML. The tree is plain data so tests can assert
//! on structure without parsing markup.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    parse_timestamp, AppInfo, Author, FeedItem, Post, PostStats, Repost,
};
use crate::feed::resolver::{resolve_content, BodyBlock, Media, MediaKind, ResolvedContent};

const UNKNOWN_AUTHOR: &str = "Unknown";
const UNKNOWN_REPOSTER: &str = "Someone";

/// A node of the rendered tree: an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start an element; chain `attr`/`class`/`text`/`child` to fill it.
pub fn elem(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn class_list(&self) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| *name == "class")
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A formatted timestamp: relative ("5m ago") inside the recency
/// window, absolute beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampLabel {
    pub text: String,
    pub relative: bool,
}

/// Format an upstream timestamp against `now`.
///
/// Buckets are exclusive at the upper bound, so exactly 60 seconds
/// reads as minutes. An unparsable timestamp yields an empty label.
pub fn format_timestamp(timestamp: &str, now: DateTime<Utc>) -> TimestampLabel {
    let Some(then) = parse_timestamp(timestamp) else {
        return TimestampLabel {
            text: String::new(),
            relative: false,
        };
    };

    let seconds = (now - then).num_seconds().max(0);
    let (text, relative) = if seconds < 60 {
        (format!("{seconds}s ago"), true)
    } else if seconds < 60 * 60 {
        (format!("{}m ago", seconds / 60), true)
    } else if seconds < 24 * 60 * 60 {
        (format!("{}h ago", seconds / (60 * 60)), true)
    } else if seconds < 7 * 24 * 60 * 60 {
        (format!("{}d ago", seconds / (24 * 60 * 60)), true)
    } else {
        (then.format("%Y-%m-%d %H:%M").to_string(), false)
    };

    TimestampLabel { text, relative }
}

/// Render an ordered feed into one card per item.
pub fn render_feed(feed: &[FeedItem], now: DateTime<Utc>) -> Vec<Node> {
    feed.iter().map(|item| render_feed_item(item, now)).collect()
}

pub fn render_feed_item(item: &FeedItem, now: DateTime<Utc>) -> Node {
    match item {
        FeedItem::Post(post) => render_post(post, now),
        FeedItem::Repost(repost) => render_repost(repost, now),
    }
}

fn render_post(post: &Post, now: DateTime<Utc>) -> Node {
    let resolved = resolve_content(Some(&post.metadata));

    let mut card = elem("article")
        .class("post-card")
        .attr("data-id", &post.id)
        .child(render_content(&resolved));

    if let Some(media) = resolved.media.as_ref().and_then(render_media) {
        card = card.child(media);
    }

    card.child(render_stats_line(
        &post.stats,
        &post.author,
        post.app.as_ref(),
        None,
        format_timestamp(&post.timestamp, now),
    ))
    .into()
}

fn render_repost(repost: &Repost, now: DateTime<Utc>) -> Node {
    let original = &repost.original_post;
    let resolved = resolve_content(Some(&original.metadata));

    let header = elem("div")
        .class("repost-header")
        .text(format!(
            "\u{1f501} Reposted by {}",
            repost.reposted_by.display_name(UNKNOWN_REPOSTER)
        ));

    let mut card = elem("article")
        .class("post-card repost")
        .attr("data-id", &repost.id)
        .child(header)
        .child(render_content(&resolved));

    if let Some(media) = resolved.media.as_ref().and_then(render_media) {
        card = card.child(media);
    }

    card.child(render_stats_line(
        &original.stats,
        &original.author,
        original.app.as_ref(),
        Some(&repost.reposted_by),
        format_timestamp(&repost.timestamp, now),
    ))
    .into()
}

fn render_content(resolved: &ResolvedContent) -> Node {
    let mut content = elem("div").class("post-content");

    if let Some(title) = &resolved.title {
        content = content.child(elem("h3").class("post-title").text(title));
    }
    if let Some(subtitle) = &resolved.subtitle {
        content = content.child(elem("p").class("post-subtitle").text(subtitle));
    }

    if resolved.body.is_empty() {
        content = content.child(elem("p").class("post-text").text(&resolved.text));
    } else {
        content = content.children(resolved.body.iter().map(render_body_block));
    }

    content.into()
}

fn render_body_block(block: &BodyBlock) -> Node {
    match block {
        BodyBlock::Paragraph { text } => elem("p").text(text).into(),
        BodyBlock::Heading { level, text } => {
            let tag = match level {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            };
            elem(tag).text(text).into()
        }
        BodyBlock::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            elem(tag)
                .children(items.iter().map(|item| elem("li").text(item).into()))
                .into()
        }
        BodyBlock::Image {
            url,
            alt,
            caption,
            cover,
            wide,
        } => {
            let class = if *cover {
                "article-image cover"
            } else if *wide {
                "article-image wide"
            } else {
                "article-image"
            };
            let mut figure = elem("figure")
                .class(class)
                .child(elem("img").attr("src", url).attr("alt", alt));
            if let Some(caption) = caption {
                figure = figure.child(elem("figcaption").text(caption));
            }
            figure.into()
        }
    }
}

fn render_media(media: &Media) -> Option<Node> {
    if !media.has_source() {
        return None;
    }

    let node = match media.kind {
        MediaKind::Image => elem("img")
            .class("post-media")
            .attr("src", &media.url)
            .attr("alt", "Post image")
            .into(),
        MediaKind::Video => {
            let mut video = elem("video")
                .class("post-media")
                .attr("controls", "")
                .child(elem("source").attr("src", &media.url));
            if !media.cover.is_empty() {
                video = video.attr("poster", &media.cover);
            }
            video.into()
        }
        MediaKind::Audio => {
            let mut player = elem("div").class("audio-player");
            if !media.cover.is_empty() {
                player = player.child(
                    elem("img")
                        .class("audio-cover")
                        .attr("src", &media.cover)
                        .attr("alt", "Audio cover"),
                );
            }
            if !media.artist.is_empty() {
                player = player.child(elem("div").class("audio-artist").text(&media.artist));
            }
            player = player.child(
                elem("audio")
                    .attr("controls", "")
                    .attr("src", &media.url),
            );
            let details: Vec<&str> = [&media.genre, &media.duration_label, &media.credits]
                .into_iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            if !details.is_empty() {
                player = player.child(
                    elem("div").class("audio-details").text(details.join(" \u{2022} ")),
                );
            }
            player.into()
        }
    };

    Some(node)
}

fn render_stats_line(
    stats: &PostStats,
    author: &Author,
    app: Option<&AppInfo>,
    reposted_by: Option<&Author>,
    label: TimestampLabel,
) -> Node {
    let mut line = elem("div")
        .class("post-stats")
        .child(elem("span").class("stat").text(format!("\u{2764}\u{fe0f} {}", stats.upvotes)))
        .child(elem("span").class("stat").text(format!("\u{1f4ac} {}", stats.comments)))
        .child(elem("span").class("stat").text(format!("\u{1f501} {}", stats.reposts)))
        .child(elem("span").class("stat").text(format!("\u{1f504} {}", stats.collects)));

    let mut attribution = elem("span")
        .class("post-attribution")
        .child(
            elem("img")
                .class("author-avatar")
                .attr("src", author.avatar_url())
                .attr("alt", author.display_name(UNKNOWN_AUTHOR)),
        )
        .text(format!("Posted by {}", author.display_name(UNKNOWN_AUTHOR)));

    if let Some(reposter) = reposted_by {
        attribution = attribution.text(format!(
            " \u{2022} Reposted by {}",
            reposter.display_name(UNKNOWN_REPOSTER)
        ));
    }

    if let Some(app) = app {
        if let Some(logo) = app.logo() {
            let badge = elem("img")
                .class("app-logo")
                .attr("src", logo)
                .attr("alt", app.name().unwrap_or("app"));
            let badge: Node = match app.url() {
                Some(url) => elem("a").attr("href", url).child(badge).into(),
                None => badge.into(),
            };
            attribution = attribution.text(" via ").child(badge);
        }
    }

    line = line.child(attribution);

    if !label.text.is_empty() {
        let text = if label.relative {
            label.text
        } else {
            format!("on {}", label.text)
        };
        line = line.child(elem("span").class("post-time").text(text));
    }

    line.into()
}

const VOID_TAGS: &[&str] = &["img", "br", "hr", "source", "input", "meta", "link"];

/// Serialize a tree to HTML with escaped text and attributes.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => {
            out.push('<');
            out.push_str(element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');
            if VOID_TAGS.contains(&element.tag) {
                return;
            }
            for child in &element.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(element.tag);
            out.push('>');
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{raw_item, repost_of_text, test_author, text_post};
    use crate::feed::normalize_feed;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn at(delta: Duration) -> String {
        (now() - delta).to_rfc3339()
    }

    fn only_item(raw: crate::domain::entities::RawFeedItem) -> FeedItem {
        normalize_feed(vec![raw]).unwrap().remove(0)
    }

    #[test]
    fn timestamp_buckets_are_exclusive_upper() {
        let cases = [
            (Duration::seconds(45), "45s ago", true),
            (Duration::seconds(60), "1m ago", true),
            (Duration::minutes(90), "1h ago", true),
            (Duration::hours(23), "23h ago", true),
            (Duration::hours(24), "1d ago", true),
            (Duration::days(6), "6d ago", true),
        ];
        for (delta, expected, relative) in cases {
            let label = format_timestamp(&at(delta), now());
            assert_eq!(label.text, expected);
            assert_eq!(label.relative, relative);
        }

        let old = format_timestamp(&at(Duration::days(10)), now());
        assert!(!old.relative);
        assert_eq!(old.text, "2024-06-05 12:00");
    }

    #[test]
    fn unparsable_timestamp_renders_no_label() {
        let label = format_timestamp("not-a-date", now());
        assert!(label.text.is_empty());

        let item = only_item(raw_item(json!({
            "id": "p1",
            "timestamp": "not-a-date",
            "metadata": { "__typename": "TextOnlyMetadata", "content": "x" },
        })));
        let html = to_html(&render_feed_item(&item, now()));
        assert!(!html.contains("post-time"));
    }

    #[test]
    fn missing_stats_render_as_zeroes() {
        let item = only_item(raw_item(json!({
            "id": "p1",
            "timestamp": at(Duration::minutes(5)),
            "metadata": { "__typename": "TextOnlyMetadata", "content": "hi" },
        })));

        let html = to_html(&render_feed_item(&item, now()));
        assert!(html.contains("\u{2764}\u{fe0f} 0"));
        assert!(html.contains("\u{1f4ac} 0"));
        assert!(html.contains("\u{1f501} 0"));
        assert!(html.contains("\u{1f504} 0"));
        assert!(html.contains("Posted by Unknown"));
        assert!(html.contains("5m ago"));
    }

    #[test]
    fn repost_card_is_tagged_and_credits_reposter() {
        let item = only_item(repost_of_text("r1", &at(Duration::hours(2)), "original text"));

        let node = render_feed_item(&item, now());
        let Node::Element(card) = &node else {
            panic!("expected an element");
        };
        assert_eq!(card.class_list(), Some("post-card repost"));

        let html = to_html(&node);
        assert!(html.contains("Reposted by"));
        assert!(html.contains("original text"));
    }

    #[test]
    fn empty_media_url_emits_no_media_block() {
        let item = only_item(raw_item(json!({
            "id": "p1",
            "timestamp": at(Duration::minutes(1)),
            "metadata": {
                "__typename": "ImageMetadata",
                "content": "caption",
                "image": { "original": { "url": "" } },
            },
        })));

        let html = to_html(&render_feed_item(&item, now()));
        assert!(!html.contains("post-media"));
        assert!(html.contains("caption"));
    }

    #[test]
    fn image_media_renders_img_tag() {
        let item = only_item(raw_item(json!({
            "id": "p1",
            "timestamp": at(Duration::minutes(1)),
            "metadata": {
                "__typename": "ImageMetadata",
                "content": "look",
                "image": { "original": { "url": "https://cdn.test/pic.png" } },
            },
        })));

        let html = to_html(&render_feed_item(&item, now()));
        assert!(html.contains(r#"<img class="post-media" src="https://cdn.test/pic.png""#));
    }

    #[test]
    fn app_logo_renders_via_clause() {
        let mut raw = text_post("p1", &at(Duration::minutes(3)), "hello");
        raw.author = Some(test_author("Alice", "alice.lens"));
        raw.app = serde_json::from_value(json!({
            "metadata": {
                "name": "Hey",
                "logo": "https://cdn.test/hey.png",
                "url": "https://hey.xyz",
            },
        }))
        .ok();

        let html = to_html(&render_feed_item(&only_item(raw), now()));
        assert!(html.contains("Posted by Alice"));
        assert!(html.contains(" via "));
        assert!(html.contains(r#"<a href="https://hey.xyz">"#));
        assert!(html.contains(r#"src="https://cdn.test/hey.png""#));
    }

    #[test]
    fn app_logo_without_url_renders_unlinked() {
        let mut raw = text_post("p1", &at(Duration::minutes(3)), "hello");
        raw.app = serde_json::from_value(json!({
            "metadata": { "name": "Hey", "logo": "https://cdn.test/hey.png" },
        }))
        .ok();

        let html = to_html(&render_feed_item(&only_item(raw), now()));
        assert!(html.contains(r#"src="https://cdn.test/hey.png""#));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn article_body_renders_structured_blocks() {
        let blocks = json!([
            { "type": "h2", "children": [{ "text": "Section" }] },
            { "type": "paragraph", "children": [{ "text": "Body text" }] },
            { "type": "ul", "children": [{ "text": "first" }, { "text": "second" }] }
        ]);
        let item = only_item(raw_item(json!({
            "id": "a1",
            "timestamp": at(Duration::hours(1)),
            "metadata": {
                "__typename": "ArticleMetadata",
                "title": "My Article",
                "content": "plain",
                "attributes": [
                    { "key": "subtitle", "value": "A subtitle" },
                    { "key": "contentJson", "value": blocks.to_string() },
                ],
            },
        })));

        let html = to_html(&render_feed_item(&item, now()));
        assert!(html.contains(r#"<h3 class="post-title">My Article</h3>"#));
        assert!(html.contains("A subtitle"));
        assert!(html.contains("<h2>Section</h2>"));
        assert!(html.contains("<p>Body text</p>"));
        assert!(html.contains("<li>first</li><li>second</li>"));
        // Structured body replaces the plain text entirely.
        assert!(!html.contains(">plain<"));
    }

    #[test]
    fn text_is_escaped_in_html_output() {
        let item = only_item(text_post("p1", &at(Duration::minutes(1)), "<script>alert(1)</script>"));

        let html = to_html(&render_feed_item(&item, now()));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn audio_media_renders_player_details() {
        let item = only_item(raw_item(json!({
            "id": "p1",
            "timestamp": at(Duration::minutes(2)),
            "metadata": {
                "__typename": "AudioMetadata",
                "content": "new track",
                "audio": {
                    "item": "https://cdn.test/track.mp3",
                    "cover": "https://cdn.test/cover.png",
                    "artist": "The Band",
                    "genre": "ambient",
                },
            },
        })));

        let html = to_html(&render_feed_item(&item, now()));
        assert!(html.contains("audio-player"));
        assert!(html.contains("The Band"));
        assert!(html.contains(r#"<audio controls src="https://cdn.test/track.mp3">"#));
        assert!(html.contains("ambient"));
    }
}
