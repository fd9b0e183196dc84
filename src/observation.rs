use crate::error::InputError;
use serde::Deserialize;
use std::fmt;
use std::vec::Vec;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ObservationRequest {
    /// "YYYY-MM-DD"
    #[serde(alias = "Date")]
    pub date: String,
    /// "HH:MM:SS AM/PM"
    #[serde(alias = "Time")]
    pub time: String,
}

impl ObservationRequest {
    pub fn new(date: &str, time: &str) -> Self {
        ObservationRequest {
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// Kept as the number the API sent, so it is written out unchanged.
    Celsius(serde_json::Number),
    Error,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Celsius(temp) => write!(f, "{}", temp),
            Reading::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub date: String,
    /// The time as it was requested, in 12-hour form.
    pub time: String,
    pub reading: Reading,
}

impl ResultRow {
    pub fn success(request: &ObservationRequest, temp: serde_json::Number) -> Self {
        ResultRow {
            date: request.date.clone(),
            time: request.time.clone(),
            reading: Reading::Celsius(temp),
        }
    }

    pub fn error(request: &ObservationRequest) -> Self {
        ResultRow {
            date: request.date.clone(),
            time: request.time.clone(),
            reading: Reading::Error,
        }
    }
}

/// Read requests from a csv file with a `date,time` (or `Date,Time`) header.
pub fn read_requests(path: &str) -> Result<Vec<ObservationRequest>, InputError> {
    let to_input_error = |source| InputError::Read {
        path: path.to_string(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(to_input_error)?;
    reader
        .deserialize::<ObservationRequest>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_input_error)
}

// Observation times collected in Chennai during December 2025.
// The repeats are part of the data set.
const DECEMBER_2025: [(&str, &str); 66] = [
    ("2025-12-01", "03:46:09 PM"),
    ("2025-12-01", "03:46:09 PM"),
    ("2025-12-03", "08:42:50 PM"),
    ("2025-12-03", "08:42:50 PM"),
    ("2025-12-04", "04:38:05 PM"),
    ("2025-12-04", "04:38:05 PM"),
    ("2025-12-05", "01:17:19 PM"),
    ("2025-12-05", "01:17:19 PM"),
    ("2025-12-06", "01:05:10 PM"),
    ("2025-12-06", "01:05:10 PM"),
    ("2025-12-06", "08:59:46 PM"),
    ("2025-12-06", "08:59:46 PM"),
    ("2025-12-06", "10:28:41 PM"),
    ("2025-12-06", "10:28:41 PM"),
    ("2025-12-08", "04:43:56 PM"),
    ("2025-12-08", "04:43:56 PM"),
    ("2025-12-08", "09:08:21 PM"),
    ("2025-12-08", "09:08:21 PM"),
    ("2025-12-09", "01:33:12 PM"),
    ("2025-12-09", "01:33:12 PM"),
    ("2025-12-11", "01:35:55 PM"),
    ("2025-12-11", "01:35:55 PM"),
    ("2025-12-11", "04:59:35 PM"),
    ("2025-12-11", "04:59:35 PM"),
    ("2025-12-12", "04:26:32 PM"),
    ("2025-12-12", "04:26:32 PM"),
    ("2025-12-12", "04:26:32 PM"),
    ("2025-12-12", "04:26:32 PM"),
    ("2025-12-12", "10:26:44 PM"),
    ("2025-12-12", "10:26:44 PM"),
    ("2025-12-13", "07:54:12 PM"),
    ("2025-12-13", "07:54:12 PM"),
    ("2025-12-13", "07:54:12 PM"),
    ("2025-12-13", "07:54:12 PM"),
    ("2025-12-15", "08:31:35 PM"),
    ("2025-12-15", "08:31:35 PM"),
    ("2025-12-15", "08:53:00 PM"),
    ("2025-12-15", "08:53:00 PM"),
    ("2025-12-17", "01:52:20 PM"),
    ("2025-12-17", "01:52:20 PM"),
    ("2025-12-17", "10:39:31 PM"),
    ("2025-12-17", "10:39:31 PM"),
    ("2025-12-18", "01:55:34 PM"),
    ("2025-12-18", "01:55:34 PM"),
    ("2025-12-18", "10:44:00 PM"),
    ("2025-12-18", "10:44:00 PM"),
    ("2025-12-19", "01:52:37 PM"),
    ("2025-12-19", "01:52:37 PM"),
    ("2025-12-19", "09:19:26 PM"),
    ("2025-12-19", "09:19:26 PM"),
    ("2025-12-19", "09:19:26 PM"),
    ("2025-12-19", "09:19:26 PM"),
    ("2025-12-19", "09:22:40 PM"),
    ("2025-12-19", "09:22:40 PM"),
    ("2025-12-21", "09:03:41 PM"),
    ("2025-12-21", "09:03:41 PM"),
    ("2025-12-21", "09:03:41 PM"),
    ("2025-12-21", "09:03:41 PM"),
    ("2025-12-21", "09:03:41 PM"),
    ("2025-12-21", "09:03:41 PM"),
    ("2025-12-22", "11:53:44 PM"),
    ("2025-12-22", "11:53:44 PM"),
    ("2025-12-22", "11:53:44 PM"),
    ("2025-12-22", "11:53:44 PM"),
    ("2025-12-22", "11:53:44 PM"),
    ("2025-12-22", "11:53:44 PM"),
];

/// The requests used when no input file is given.
pub fn builtin_requests() -> Vec<ObservationRequest> {
    DECEMBER_2025
        .iter()
        .map(|(date, time)| ObservationRequest::new(date, time))
        .collect()
}
