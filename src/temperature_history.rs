use crate::config::Config;
use crate::observation::{ObservationRequest, Reading, ResultRow};
use crate::time_format;
use crate::weather_data;
use log::{info, warn};
use std::vec::Vec;

/// Fetch the temperature for every request, one after the other.
///
/// A failing request never stops the run: it becomes an `ERROR` row and we
/// move on. The result has one row per request, in the same order.
pub async fn fetch_all(
    client: &reqwest::Client,
    config: &Config,
    requests: &[ObservationRequest],
) -> Vec<ResultRow> {
    info!(
        "Fetching {} temperatures for {}",
        requests.len(),
        &config.location
    );
    let mut rows = Vec::with_capacity(requests.len());
    for request in requests {
        let time_24h = match time_format::to_24h(&request.time) {
            Ok(time) => time,
            Err(e) => {
                warn!("Failed: {} {}: {}", request.date, request.time, e);
                rows.push(ResultRow::error(request));
                continue;
            }
        };
        match weather_data::fetch_temperature(client, config, &request.date, &time_24h).await {
            Ok(temp) => {
                info!("{} {} -> {} °C", request.date, request.time, temp);
                rows.push(ResultRow::success(request, temp));
            }
            Err(e) => {
                warn!("Failed: {} {}: {}", request.date, request.time, e);
                rows.push(ResultRow::error(request));
            }
        }
    }
    let failed = rows
        .iter()
        .filter(|row| row.reading == Reading::Error)
        .count();
    info!(
        "Fetched {} of {} temperatures, {} failed",
        rows.len() - failed,
        rows.len(),
        failed
    );
    rows
}
