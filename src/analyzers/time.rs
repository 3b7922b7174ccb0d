use crate::analyzers::types::TimeStats;
use crate::analyzers::utility::mode;
use crate::catalog::{DayToken, MonthToken};
use crate::error::{ExplorerError, Result};
use crate::loader::Trip;

/// Most frequent times of travel.
///
/// A concrete month or day filter short-circuits the corresponding mode,
/// since filtering left a single value in that column; the hour mode is
/// always computed from the data because hour is never filtered on.
pub fn time_stats(trips: &[Trip], month: MonthToken, day: DayToken) -> Result<TimeStats> {
    let popular_month = match month.number() {
        Some(_) => month.to_string(),
        None => mode(trips.iter().map(|t| t.month))
            .ok_or(ExplorerError::EmptyTable("most common month"))?
            .to_string(),
    };

    let popular_day = match day.name() {
        Some(name) => name.to_string(),
        None => mode(trips.iter().map(|t| t.day_of_week.clone()))
            .ok_or(ExplorerError::EmptyTable("most common day"))?,
    };

    let popular_hour = mode(trips.iter().map(|t| t.hour))
        .ok_or(ExplorerError::EmptyTable("most common start hour"))?;

    Ok(TimeStats {
        popular_month,
        popular_day,
        popular_hour,
    })
}
