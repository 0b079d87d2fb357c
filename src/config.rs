use crate::client_error::ClientError;
use std::env;

/// Default HubSpot API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.hubapi.com";

/// Default HubSpot CRM API version.
pub const DEFAULT_API_VERSION: &str = "v3";

/// Default network timeout for API requests, in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Default time to wait for the server to accept the connection, in seconds.
const DEFAULT_CONNECT_TIMEOUT: u64 = 5;

/// Settings a `Client` is built from. They cannot be changed once the client exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub api_version: String,
    pub api_key: String,
    pub timeout: u64,
    pub connect_timeout: u64,
}

impl Default for Config {
    /// The default URL, version and timeouts, with no API key. A key must be set before the
    /// config is given to a `Client`.
    fn default() -> Config {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            api_version: String::from(DEFAULT_API_VERSION),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a config with the default URL, version and timeouts.
    pub fn new(api_key: &str) -> Config {
        Config {
            api_key: api_key.to_string(),
            ..Config::default()
        }
    }

    /// Read the config from `HUBSPOT_API_KEY`, `HUBSPOT_API_BASE_URL` and `HUBSPOT_API_VERSION`.
    /// Only the key is required.
    pub fn from_env() -> Result<Config, ClientError> {
        let api_key = env::var("HUBSPOT_API_KEY")
            .map_err(|_| ClientError::InvalidInput(String::from("HUBSPOT_API_KEY is not set")))?;

        let mut config = Config::new(&api_key);

        if let Ok(base_url) = env::var("HUBSPOT_API_BASE_URL") {
            config.api_base_url = base_url;
        }
        if let Ok(version) = env::var("HUBSPOT_API_VERSION") {
            config.api_version = version;
        }

        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::InvalidInput(String::from("an API key is required")));
        }
        if self.connect_timeout >= self.timeout {
            return Err(ClientError::InvalidInput(format!(
                "connect timeout ({}s) must be shorter than the request timeout ({}s)",
                self.connect_timeout, self.timeout
            )));
        }

        Ok(())
    }
}
