use crate::error::Result;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Base URL used when no other configuration is given
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Create the default HTTP client for REST API requests
/// with pooled connections and a bounded connect phase
pub fn create_rest_client() -> Result<Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .connect_timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

/// Configuration for REST API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address every endpoint is appended to, e.g. `https://api.example.com`
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full request URL. The endpoint is appended verbatim.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
