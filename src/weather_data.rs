use crate::config::Config;
use crate::error::FetchError;
use serde::Deserialize;
use std::vec::Vec;

const SNIPPET_LEN: usize = 200;

// Only the part of the timeline response we read.
#[derive(Deserialize, Debug)]
struct Timeline {
    #[serde(default)]
    days: Vec<Day>,
}
#[derive(Deserialize, Debug)]
struct Day {
    #[serde(default)]
    hours: Vec<Hour>,
}
#[derive(Deserialize, Debug)]
struct Hour {
    temp: Option<serde_json::Number>,
}

/// Url of the timeline request for a single moment at the configured location.
pub fn build_url(config: &Config, date: &str, time_24h: &str) -> reqwest::Url {
    let mut url = config.base_url.url().clone();
    // http(s) urls always have path segments.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push(&config.location)
            .push(&format!("{}T{}", date, time_24h));
    }
    url.query_pairs_mut()
        .append_pair("unitGroup", "metric")
        .append_pair("include", "hours")
        .append_pair("key", &config.api_key);
    url
}

/// Turn a status and body into the temperature of the first hour of the first day.
pub fn interpret_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<serde_json::Number, FetchError> {
    if status != reqwest::StatusCode::OK {
        return Err(FetchError::Status {
            status,
            snippet: body.chars().take(SNIPPET_LEN).collect(),
        });
    }
    let timeline = serde_json::from_str::<Timeline>(body)?;
    timeline
        .days
        .into_iter()
        .next()
        .and_then(|day| day.hours.into_iter().next())
        .and_then(|hour| hour.temp)
        .ok_or(FetchError::MissingTemperature("days[0].hours[0].temp"))
}

/// Ask the API for the temperature at `date` and `time_24h`. A single attempt, no retries.
pub async fn fetch_temperature(
    client: &reqwest::Client,
    config: &Config,
    date: &str,
    time_24h: &str,
) -> Result<serde_json::Number, FetchError> {
    let url = build_url(config, date, time_24h);
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    interpret_response(status, &body)
}
