use crate::analyzers::types::{BirthYearStats, UserStats};
use crate::analyzers::utility::{mode, value_counts};
use crate::catalog::City;
use crate::error::{ExplorerError, Result};
use crate::loader::Trip;

/// User demographics for the table.
///
/// User-type counts are always reported, in descending-count order. Gender
/// counts and birth-year aggregates are omitted entirely for cities whose
/// datasets lack those columns; null cells never contribute to any count.
pub fn user_stats(trips: &[Trip], city: City) -> Result<UserStats> {
    let user_type_counts = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

    if !city.has_demographics() {
        return Ok(UserStats {
            user_type_counts,
            gender_counts: None,
            birth_year: None,
        });
    }

    let gender_counts = value_counts(trips.iter().filter_map(|t| t.gender.clone()));

    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
    let earliest = years
        .iter()
        .copied()
        .min()
        .ok_or(ExplorerError::EmptyTable("earliest year of birth"))?;
    let most_recent = years
        .iter()
        .copied()
        .max()
        .ok_or(ExplorerError::EmptyTable("most recent year of birth"))?;
    let most_common =
        mode(years).ok_or(ExplorerError::EmptyTable("most common year of birth"))?;

    Ok(UserStats {
        user_type_counts,
        gender_counts: Some(gender_counts),
        birth_year: Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
    })
}
