use clap::Parser;
use log::info;
use std::time::Duration;
mod config;
mod csv_output;
mod error;
#[cfg(test)]
mod fake_api;
mod observation;
mod temperature_history;
mod time_format;
mod weather_data;

/// Fetch historical hourly temperatures from Visual Crossing and save them as csv.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Location to ask the weather for
    #[arg(long, env = "WEATHER_LOCATION", default_value = "Chennai,India")]
    location: String,

    /// Visual Crossing api key
    #[arg(long, env = "VISUAL_CROSSING_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Where to write the csv file. An existing file is overwritten.
    #[arg(
        short,
        long,
        env = "WEATHER_OUTPUT",
        default_value = "chennai_temperature.csv"
    )]
    output: String,

    /// Csv file with a `date,time` header listing the moments to fetch,
    /// times in 12-hour form like "03:46:09 PM". Defaults to the built-in list.
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Base url of the timeline endpoint
    #[arg(long, env = "WEATHER_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: config::BaseUrl,

    /// Give up on a single request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    let config = config::Config::new(
        &cli.location,
        &cli.api_key,
        &cli.output,
        cli.base_url.clone(),
    )
    .with_timeout(cli.timeout_secs.map(Duration::from_secs));
    let requests = match &cli.input {
        Some(path) => observation::read_requests(path)?,
        None => observation::builtin_requests(),
    };

    let client = config.http_client()?;
    let rows = temperature_history::fetch_all(&client, &config, &requests).await;

    csv_output::write_rows(&config.output_path, &rows)?;
    info!("Done! File saved as: {}", &config.output_path);
    Ok(())
}
