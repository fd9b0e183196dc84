use crate::error::TimeFormatError;
use chrono::NaiveTime;

/// Convert a time like "03:46:09 PM" into "15:46:09".
pub fn to_24h(time: &str) -> Result<String, TimeFormatError> {
    let parsed = NaiveTime::parse_from_str(time, "%I:%M:%S %p").map_err(|source| {
        TimeFormatError {
            input: time.to_string(),
            source,
        }
    })?;
    Ok(parsed.format("%H:%M:%S").to_string())
}
