//! HTTP handlers
//!
//! Axum request handlers for the profile page and the GraphQL proxy.

pub mod page;
pub mod proxy;

pub use page::profile_page;
pub use proxy::{proxy_accounts, proxy_posts, proxy_stats};
