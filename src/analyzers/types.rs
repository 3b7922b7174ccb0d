//! Result types produced by the aggregators.

use serde::Serialize;

/// Most common travel times for a filtered table.
#[derive(Debug, Serialize)]
pub struct TimeStats {
    pub popular_month: String,
    pub popular_day: String,
    pub popular_hour: u32,
}

/// Most common stations and route.
#[derive(Debug, Serialize)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    pub popular_pair: String,
}

/// Trip duration aggregates, in seconds.
#[derive(Debug, Serialize)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

/// Earliest, most recent, and most common year of birth.
#[derive(Debug, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics. Gender and birth-year entries are `None` for cities
/// whose datasets carry no demographic columns.
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub user_type_counts: Vec<(String, usize)>,
    pub gender_counts: Option<Vec<(String, usize)>>,
    pub birth_year: Option<BirthYearStats>,
}
