use crate::analyzers::types::StationStats;
use crate::analyzers::utility::mode;
use crate::error::{ExplorerError, Result};
use crate::loader::Trip;

/// Most popular stations and route.
///
/// The route mode is taken over the per-row `"start => end"` pair, which is
/// not the same as pairing the two independent station modes.
pub fn station_stats(trips: &[Trip]) -> Result<StationStats> {
    let popular_start = mode(trips.iter().map(|t| t.start_station.clone()))
        .ok_or(ExplorerError::EmptyTable("most common start station"))?;

    let popular_end = mode(trips.iter().map(|t| t.end_station.clone()))
        .ok_or(ExplorerError::EmptyTable("most common end station"))?;

    let popular_pair = mode(
        trips
            .iter()
            .map(|t| format!("{} => {}", t.start_station, t.end_station)),
    )
    .ok_or(ExplorerError::EmptyTable("most common station pair"))?;

    Ok(StationStats {
        popular_start,
        popular_end,
        popular_pair,
    })
}
