use crate::observation::ResultRow;

pub const HEADER: [&str; 3] = ["Date", "Time", "Temperature (°C)"];

/// Write the rows to `path`, replacing whatever was there.
pub fn write_rows(path: &str, rows: &[ResultRow]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([&row.date, &row.time, &row.reading.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
