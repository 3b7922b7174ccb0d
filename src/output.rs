//! Console rendering of the statistic reports.
//!
//! The report itself goes to stdout; `print_json` is a logging aid for
//! inspecting any stats value as structured data.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::analyzers::types::{DurationStats, StationStats, TimeStats, UserStats};
use crate::loader::Trip;

/// Prints the short section separator.
pub fn rule() {
    println!("{}", "-".repeat(40));
}

pub fn print_time_stats(stats: &TimeStats) {
    println!("\tThe most common month: \t\t{}", stats.popular_month);
    println!("\tThe most common day: \t\t{}", stats.popular_day);
    println!("\tThe most common start hour: \t{}\n", stats.popular_hour);
}

pub fn print_station_stats(stats: &StationStats) {
    println!("\tMost common start station: \t{}", stats.popular_start);
    println!("\tMost common end station: \t{}", stats.popular_end);
    println!("\tMost common combination: \t{}", stats.popular_pair);
}

pub fn print_duration_stats(stats: &DurationStats) {
    println!("\tTotal trip duration: \t\t{} seconds", stats.total_secs);
    println!("\tMean of trip duration: \t\t{} seconds", stats.mean_secs);
}

pub fn print_user_stats(stats: &UserStats) {
    println!("Number of users : ");
    for (idx, (category, count)) in stats.user_type_counts.iter().enumerate() {
        println!("\tCategory {idx} - {category} : \t{count}");
    }

    match (&stats.gender_counts, &stats.birth_year) {
        (Some(genders), Some(birth)) => {
            println!("\nGender info : ");
            for (category, count) in genders {
                println!("\t{category} : \t{count}");
            }

            println!("\nBirth info : ");
            println!("\tOldest Year of Birth: \t\t{}", birth.earliest);
            println!("\tMost Recent Year of Birth: \t{}", birth.most_recent);
            println!("\tMost Common Year of Birth: \t{}", birth.most_common);
        }
        _ => println!("Gender and Birth info aren't available for this city"),
    }
}

/// Prints a page of raw rows, one line per trip.
pub fn print_raw_rows(trips: &[Trip]) {
    for trip in trips {
        println!(
            "{} | {} -> {} | {}s | {} | {} | {}",
            trip.start_time,
            trip.start_station,
            trip.end_station,
            trip.duration_secs,
            trip.user_type.as_deref().unwrap_or("-"),
            trip.gender.as_deref().unwrap_or("-"),
            trip.birth_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

/// Logs a stats value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
