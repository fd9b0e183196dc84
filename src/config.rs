use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// An http(s) url that request paths can be appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(reqwest::Url);

impl BaseUrl {
    pub fn url(&self) -> &reqwest::Url {
        &self.0
    }
}

impl FromStr for BaseUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: s.to_string(),
            reason,
        };
        let url = reqwest::Url::parse(s).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(BaseUrl(url)),
            scheme => Err(invalid(format!("unsupported scheme '{}'", scheme))),
        }
    }
}

/// Everything a run needs to know besides the list of requests.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location as understood by the timeline API, e.g. "Chennai,India".
    pub location: String,
    pub api_key: String,
    pub output_path: String,
    pub base_url: BaseUrl,
    /// `None` keeps the http client's default.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(location: &str, api_key: &str, output_path: &str, base_url: BaseUrl) -> Self {
        Config {
            location: location.to_string(),
            api_key: api_key.to_string(),
            output_path: output_path.to_string(),
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
