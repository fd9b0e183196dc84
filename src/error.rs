use thiserror::Error;

#[derive(Debug, Error)]
#[error("'{input}' is not a 12-hour time like '03:46:09 PM'")]
pub struct TimeFormatError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Everything that can go wrong while asking the API for one temperature.
/// None of these abort a run, they all end up as an `ERROR` row.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Status {status}, response: {snippet}")]
    Status {
        status: reqwest::StatusCode,
        snippet: String,
    },

    #[error("JSON parse error: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("JSON parse error: no temperature at {0}")]
    MissingTemperature(&'static str),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Could not read requests from '{path}'")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
