use std::time::Duration;

use clap::{ArgAction, Parser};
use dialoguer::{Input, Password};

use crate::error::Result;
use crate::probe::ProbeRequest;
use crate::session::SessionConfig;

const DEFAULT_UA: &str = concat!("apivet/", env!("CARGO_PKG_VERSION"));

/// Model requested from the endpoint under test.
pub const DEFAULT_MODEL_ID: &str = "gpt-4o-mini";

/// Command-line options for the endpoint prober.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Probe an OpenAI-compatible endpoint for authenticity", long_about = None)]
pub struct CliArgs {
    /// Base URL of the endpoint under test, e.g. `https://api.openai.com`.
    #[arg(long = "base-url", env = "APIVET_BASE_URL")]
    pub base_url: Option<String>,

    /// API key sent verbatim as a bearer credential.
    #[arg(long = "api-key", env = "APIVET_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier to request.
    #[arg(long = "model", default_value = DEFAULT_MODEL_ID)]
    pub model: String,

    /// Number of identical concurrent requests per attempt.
    #[arg(long = "probes", default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..=32))]
    pub probes: u64,

    /// User-Agent value to send with HTTP requests.
    #[arg(long = "ua", default_value = DEFAULT_UA)]
    pub user_agent: String,

    /// Emit the report as JSON instead of human-readable text.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Network timeout (seconds) applied to each request.
    #[arg(long = "timeout", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=300))]
    timeout_secs: u64,
}

impl CliArgs {
    /// Returns the configured network timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Assemble a probe request, prompting interactively for missing inputs.
    ///
    /// Empty values are accepted as-is; the attempt is still made and fails
    /// upstream rather than being validated here.
    pub fn resolve_probe_request(&self) -> Result<ProbeRequest> {
        let base_url = match &self.base_url {
            Some(value) => value.clone(),
            None => Input::<String>::new()
                .with_prompt("API base URL")
                .allow_empty(true)
                .interact_text()?,
        };

        let api_key = match &self.api_key {
            Some(value) => value.clone(),
            None => Password::new()
                .with_prompt("API key")
                .allow_empty_password(true)
                .interact()?,
        };

        Ok(ProbeRequest {
            base_url,
            api_key,
            model: self.model.clone(),
            probes: self.probes,
        })
    }

    /// Convert CLI arguments into a session configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.user_agent.clone(), self.timeout())
    }
}
