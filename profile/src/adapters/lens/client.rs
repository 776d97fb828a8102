//! Lens GraphQL client
//!
//! Implements the `LensApi` port against the Lens v3 GraphQL endpoint.
//! Each operation posts `{query, variables}` and unwraps the standard
//! `{data}` / `{errors}` envelope. Individually undecodable feed items
//! are skipped here so one bad union member cannot fail the page.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ProfileConfig;
use crate::domain::entities::{Account, AccountStats, RawFeedItem};
use crate::domain::ports::LensApi;
use crate::error::LensError;

const USER_AGENT: &str = "lens-profile-app";

const ACCOUNT_QUERY: &str = r#"
query Account($request: AccountRequest!) {
  account(request: $request) {
    address
    username { value }
    metadata { name bio picture coverPicture }
  }
}
"#;

const STATS_QUERY: &str = r#"
query AccountStats($request: AccountStatsRequest!) {
  accountStats(request: $request) {
    feedStats { posts comments reposts quotes reactions collects tips }
    graphFollowStats { followers following }
  }
}
"#;

const POSTS_QUERY: &str = r#"
query Posts($request: PostsRequest!) {
  posts(request: $request) {
    items {
      ... on Post {
        ...FeedPost
      }
      ... on Repost {
        id
        timestamp
        author { ...FeedAuthor }
        repostOf { ...FeedPost }
      }
    }
  }
}
fragment FeedAuthor on Account {
  username { value }
  metadata { name picture }
}
fragment FeedPost on Post {
  id
  timestamp
  author { ...FeedAuthor }
  app { metadata { name logo url } }
  metadata {
    __typename
    ... on TextOnlyMetadata { content }
    ... on ArticleMetadata { title content attributes { key value } }
    ... on ImageMetadata {
      content
      description
      name
      image { original { url } }
    }
    ... on VideoMetadata {
      content
      description
      name
      video { item cover duration }
    }
    ... on AudioMetadata {
      content
      description
      name
      audio { item cover duration artist genre credits }
    }
  }
  stats { upvotes comments reposts collects }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct LensClient {
    http: reqwest::Client,
    api_url: String,
}

impl LensClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    async fn execute(&self, query: &'static str, variables: Value) -> Result<Value, LensError> {
        let response = self
            .http
            .post(&self.api_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LensError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphQlResponse = response.json().await?;
        if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
            let joined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LensError::GraphQl(joined));
        }

        body.data.ok_or(LensError::MalformedResponse("data"))
    }
}

#[async_trait]
impl LensApi for LensClient {
    async fn fetch_account(
        &self,
        local_name: &str,
        namespace: &str,
    ) -> Result<Account, LensError> {
        let variables = json!({
            "request": {
                "username": { "localName": local_name, "namespace": namespace }
            }
        });
        let data = self.execute(ACCOUNT_QUERY, variables).await?;

        let account = data
            .get("account")
            .filter(|v| !v.is_null())
            .cloned()
            .ok_or(LensError::MalformedResponse("data.account"))?;
        serde_json::from_value(account).map_err(|e| LensError::Deserialization(e.to_string()))
    }

    async fn fetch_stats(&self, address: &str) -> Result<AccountStats, LensError> {
        let variables = json!({ "request": { "account": address } });
        let data = self.execute(STATS_QUERY, variables).await?;

        let stats = data
            .get("accountStats")
            .filter(|v| !v.is_null())
            .cloned()
            .ok_or(LensError::MalformedResponse("data.accountStats"))?;
        serde_json::from_value(stats).map_err(|e| LensError::Deserialization(e.to_string()))
    }

    async fn fetch_posts(&self, author: &str) -> Result<Vec<RawFeedItem>, LensError> {
        let variables = json!({
            "request": { "filter": { "authors": [author] } }
        });
        let data = self.execute(POSTS_QUERY, variables).await?;

        let items = data
            .pointer("/posts/items")
            .and_then(Value::as_array)
            .cloned()
            .ok_or(LensError::MalformedResponse("data.posts.items"))?;
        Ok(decode_items(items))
    }
}

/// Decode raw union members one by one, dropping any item that does
/// not match the expected shape.
fn decode_items(items: Vec<Value>) -> Vec<RawFeedItem> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawFeedItem>(item) {
            Ok(item) => Some(item),
            Err(error) => {
                tracing::warn!(%error, "skipping undecodable feed item");
                None
            }
        })
        .collect()
}
