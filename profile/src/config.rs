//! Profile page configuration
//!
//! The original frontend kept this in a window-scoped global; here it
//! is an explicit value threaded into the client and service.

use std::env;

/// Default Lens GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.lens.xyz/graphql";

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Local part of the account username (e.g. "danielwonder").
    pub local_name: String,
    /// Username namespace contract address.
    pub namespace: String,
    /// EVM address whose posts populate the feed.
    pub evm_address: String,
    /// Upstream GraphQL endpoint.
    pub api_url: String,
}

impl ProfileConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            local_name: env::var("LENS_LOCAL_NAME").expect("LENS_LOCAL_NAME must be set"),
            namespace: env::var("LENS_NAMESPACE").expect("LENS_NAMESPACE must be set"),
            evm_address: env::var("LENS_EVM_ADDRESS").expect("LENS_EVM_ADDRESS must be set"),
            api_url: env::var("LENS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }

    /// The full handle shown when the account carries no display name.
    pub fn default_handle(&self) -> String {
        format!("{}.lens", self.local_name)
    }
}
