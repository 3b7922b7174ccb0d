//! Dataset loading: CSV deserialization, time-bucket derivation, and
//! month/day filtering.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::{City, DayToken, MonthToken};
use crate::error::{ExplorerError, Result};

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row as it appears in the source CSV.
///
/// Extra columns (the index column, End Time) are ignored. The demographic
/// columns are absent from the Washington file, which `#[serde(default)]`
/// maps to `None`; blank cells in the other files deserialize to `None` too.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// A parsed trip record with the time buckets derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub hour: u32,
    pub month: u32,
    pub day_of_week: String,
}

impl Trip {
    fn from_raw(raw: RawTrip) -> Result<Trip> {
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .map_err(|_| ExplorerError::TimestampParse(raw.start_time.clone()))?;

        Ok(Trip {
            hour: start_time.hour(),
            month: start_time.month(),
            day_of_week: start_time.format("%A").to_string(),
            start_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_secs: raw.trip_duration,
            user_type: raw.user_type,
            gender: raw.gender,
            // The source column is float-typed; years are whole values.
            birth_year: raw.birth_year.map(|year| year as i32),
        })
    }
}

/// Loads the dataset for `city` from `data_dir` and applies the filters.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a row fails to deserialize,
/// or any start time does not match the expected format.
pub fn load(data_dir: &Path, city: City, month: MonthToken, day: DayToken) -> Result<Vec<Trip>> {
    let path = data_dir.join(city.data_file());
    debug!(path = %path.display(), "Opening city dataset");

    let file = File::open(&path).map_err(|source| ExplorerError::FileRead {
        path: path.clone(),
        source,
    })?;

    let trips = load_from_reader(file, month, day)?;
    info!(%city, %month, %day, rows = trips.len(), "Dataset loaded");
    Ok(trips)
}

/// Runs the load pipeline over any reader producing CSV bytes.
///
/// Filtering is a pure subset operation: source row order is preserved, no
/// rows are added or deduplicated, and an `All` token leaves its dimension
/// untouched.
pub fn load_from_reader<R: Read>(reader: R, month: MonthToken, day: DayToken) -> Result<Vec<Trip>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();

    for result in rdr.deserialize() {
        let raw: RawTrip = result?;
        let trip = Trip::from_raw(raw)?;

        if let Some(wanted) = month.number() {
            if trip.month != wanted {
                continue;
            }
        }
        if let Some(wanted) = day.name() {
            if trip.day_of_week != wanted {
                continue;
            }
        }

        trips.push(trip);
    }

    Ok(trips)
}
