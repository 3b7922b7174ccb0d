use crate::analyzers::types::DurationStats;
use crate::error::{ExplorerError, Result};
use crate::loader::Trip;

/// Total and mean trip duration over the table.
///
/// The mean of an empty table is undefined, so the whole computation is an
/// `EmptyTable` error rather than a zero.
pub fn duration_stats(trips: &[Trip]) -> Result<DurationStats> {
    if trips.is_empty() {
        return Err(ExplorerError::EmptyTable("mean trip duration"));
    }

    let total_secs: f64 = trips.iter().map(|t| t.duration_secs).sum();
    let mean_secs = total_secs / trips.len() as f64;

    Ok(DurationStats {
        total_secs,
        mean_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn trip(secs: f64) -> Trip {
        let start_time =
            NaiveDateTime::parse_from_str("2017-06-05 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Trip {
            start_time,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            duration_secs: secs,
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            hour: 9,
            month: 6,
            day_of_week: "Monday".to_string(),
        }
    }

    #[test]
    fn test_total_and_mean() {
        let trips = vec![trip(60.0), trip(120.0), trip(180.0)];
        let stats = duration_stats(&trips).unwrap();

        assert_eq!(stats.total_secs, 360.0);
        assert_eq!(stats.mean_secs, 120.0);
    }

    #[test]
    fn test_single_row() {
        let stats = duration_stats(&[trip(42.5)]).unwrap();
        assert_eq!(stats.total_secs, 42.5);
        assert_eq!(stats.mean_secs, 42.5);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let err = duration_stats(&[]).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::EmptyTable("mean trip duration")
        ));
    }
}
