use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::Result;

/// Wrapper around the configured HTTP client shared by all probes of an attempt.
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: Client,
}

/// Minimal data required to build an HTTP session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl SessionConfig {
    pub fn new(user_agent: String, timeout: Duration) -> Self {
        Self {
            user_agent,
            timeout,
        }
    }
}

impl HttpSession {
    /// Build a new HTTP session based on CLI arguments.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Returns reference to the inner `reqwest::Client`.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
