//! Profile page handler
//!
//! Loads the configured account's profile and renders the full HTML
//! page. Every section degrades independently: a failed stats fetch
//! drops the counters, a failed feed load renders a visible message,
//! and only a failed account fetch produces an error response.

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Utc;
use serde::Deserialize;

use lenspage_profile::domain::entities::{Account, AccountStats};
use lenspage_profile::feed::{elem, render_feed, to_html, Node};
use lenspage_profile::ProfilePage;

use crate::error::ServerError;
use crate::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    /// Overrides the configured username local name.
    pub name: Option<String>,
}

/// GET /
pub async fn profile_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ServerError> {
    let local_name = query.name.as_deref().unwrap_or(&state.config.local_name);

    let page = state
        .profile_service
        .load_page(local_name, &state.config.namespace, &state.config.evm_address)
        .await?;

    Ok(Html(render_page(&page)))
}

fn render_page(page: &ProfilePage) -> String {
    let document: Node = elem("html")
        .attr("lang", "en")
        .child(
            elem("head")
                .child(elem("meta").attr("charset", "utf-8"))
                .child(elem("title").text(page.account.display_name()))
                .child(
                    elem("link")
                        .attr("rel", "stylesheet")
                        .attr("href", "assets/styles.css"),
                ),
        )
        .child(
            elem("body")
                .child(render_header(&page.account, page.stats.as_ref()))
                .child(render_timeline(page)),
        )
        .into();

    format!("<!DOCTYPE html>{}", to_html(&document))
}

fn render_header(account: &Account, stats: Option<&AccountStats>) -> Node {
    let cover: Node = match account.cover_picture() {
        Some(url) => elem("div")
            .class("profile-cover")
            .child(elem("img").attr("src", url).attr("alt", "Cover image"))
            .into(),
        None => elem("div").class("profile-cover no-cover").into(),
    };

    let mut header = elem("header")
        .class("profile-header")
        .child(cover)
        .child(
            elem("img")
                .class("profile-avatar")
                .attr("src", account.avatar_url())
                .attr("alt", account.display_name()),
        )
        .child(elem("h1").class("profile-name").text(account.display_name()));

    let tagline = match account.bio() {
        Some(bio) => bio.to_string(),
        None => account
            .handle()
            .map(|h| format!("@{h}"))
            .unwrap_or_default(),
    };
    if !tagline.is_empty() {
        header = header.child(elem("p").class("profile-tagline").text(tagline));
    }

    if let Some(stats) = stats {
        header = header.child(
            elem("div")
                .class("profile-counters")
                .child(counter("Followers", stats.graph_follow_stats.followers))
                .child(counter("Following", stats.graph_follow_stats.following))
                .child(counter("Posts", stats.feed_stats.posts)),
        );
    }

    header.into()
}

fn counter(label: &'static str, value: u64) -> Node {
    elem("div")
        .class("counter")
        .child(elem("span").class("counter-value").text(value.to_string()))
        .child(elem("span").class("counter-label").text(label))
        .into()
}

fn render_timeline(page: &ProfilePage) -> Node {
    let mut timeline = elem("main").class("timeline");

    if let Some(message) = &page.feed_error {
        timeline = timeline.child(
            elem("div")
                .class("feed-error")
                .text(format!("Could not load posts: {message}")),
        );
    } else {
        timeline = timeline.children(render_feed(&page.items, Utc::now()));
    }

    timeline.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account(value: serde_json::Value) -> Account {
        serde_json::from_value(value).unwrap()
    }

    fn page(account: Account, stats: Option<AccountStats>, feed_error: Option<String>) -> ProfilePage {
        ProfilePage {
            account,
            stats,
            items: Vec::new(),
            feed_error,
        }
    }

    #[test]
    fn header_renders_counters_when_stats_present() {
        let stats: AccountStats = serde_json::from_value(json!({
            "feedStats": { "posts": 42 },
            "graphFollowStats": { "followers": 7, "following": 3 },
        }))
        .unwrap();
        let page = page(
            account(json!({
                "address": "0x1",
                "username": { "value": "alice.lens" },
                "metadata": { "name": "Alice", "bio": "hello" },
            })),
            Some(stats),
            Some("down".to_string()),
        );

        let html = render_page(&page);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Alice"));
        assert!(html.contains("hello"));
        assert!(html.contains(">42<"));
        assert!(html.contains(">7<"));
    }

    #[test]
    fn header_omits_counters_when_stats_missing() {
        let page = page(
            account(json!({ "address": "0x1", "username": { "value": "alice.lens" } })),
            None,
            Some("down".to_string()),
        );

        let html = render_page(&page);
        assert!(!html.contains("profile-counters"));
        // No bio, so the tagline falls back to the handle.
        assert!(html.contains("@alice.lens"));
    }

    #[test]
    fn feed_error_renders_visible_message() {
        let page = page(
            account(json!({ "address": "0x1" })),
            None,
            Some("Posts response contained no items".to_string()),
        );

        let html = render_page(&page);
        assert!(html.contains("Could not load posts"));
        assert!(html.contains("no items"));
    }
}
