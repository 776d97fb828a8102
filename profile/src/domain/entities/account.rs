//! Account and account-stats entities

use serde::{Deserialize, Serialize};

use super::{deserialize_null_default, DEFAULT_AVATAR};

/// A Lens account as returned by the account query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub username: Option<Username>,
    pub metadata: Option<AccountMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Username {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub picture: Option<String>,
    #[serde(rename = "coverPicture")]
    pub cover_picture: Option<String>,
}

impl Account {
    /// Display name: metadata name, else the raw handle, else a fixed
    /// placeholder.
    pub fn display_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| self.handle())
            .unwrap_or("Profile Name")
    }

    /// The account's username value, when set.
    pub fn handle(&self) -> Option<&str> {
        self.username
            .as_ref()
            .map(|u| u.value.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn bio(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.bio.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn avatar_url(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.picture.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }

    pub fn cover_picture(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.cover_picture.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Aggregate account stats from the stats query. Every counter
/// defaults to zero when the upstream omits or nulls it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountStats {
    #[serde(
        rename = "feedStats",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub feed_stats: FeedStats,
    #[serde(
        rename = "graphFollowStats",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub graph_follow_stats: GraphFollowStats,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedStats {
    pub posts: u64,
    pub comments: u64,
    pub reposts: u64,
    pub quotes: u64,
    pub reactions: u64,
    pub collects: u64,
    pub tips: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphFollowStats {
    pub followers: u64,
    pub following: u64,
}
