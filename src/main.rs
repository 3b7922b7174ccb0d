//! Interactive bikeshare trip explorer.
//!
//! Prompts for a city and optional month/day filters, prints travel-time,
//! station, duration, and user statistics over the filtered table, then
//! offers a paginated raw-row viewer before asking whether to restart.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use bikeshare_explorer::analyzers::duration::duration_stats;
use bikeshare_explorer::analyzers::station::station_stats;
use bikeshare_explorer::analyzers::time::time_stats;
use bikeshare_explorer::analyzers::user::user_stats;
use bikeshare_explorer::filters::{self, InputSource, StdinSource};
use bikeshare_explorer::loader;
use bikeshare_explorer::output;
use bikeshare_explorer::viewer::RawViewer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

fn main() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();

    run(&mut StdinSource, Path::new("."))
}

/// Runs prompt → load → aggregate → display cycles until the user declines
/// a restart. Datasets are re-read on every cycle; nothing is cached.
fn run(source: &mut dyn InputSource, data_dir: &Path) -> Result<()> {
    loop {
        let (city, month, day) = filters::resolve(source)?;
        println!(
            "\t\tYou entered the following: City => {city}, Month => {month} and Day => {day}"
        );
        println!("{}", "-".repeat(100));

        let trips = loader::load(data_dir, city, month, day)?;

        println!("\nCalculating The Most Frequent Times of Travel...\n");
        let started = Instant::now();
        let stats = time_stats(&trips, month, day)?;
        output::print_time_stats(&stats);
        println!("\nThis took {} seconds.", started.elapsed().as_secs_f64());
        output::rule();

        println!("\nCalculating The Most Popular Stations and Trip...\n");
        let started = Instant::now();
        let stats = station_stats(&trips)?;
        output::print_station_stats(&stats);
        println!("\nThis took {} seconds.", started.elapsed().as_secs_f64());
        output::rule();

        println!("\nCalculating Trip Duration...\n");
        let started = Instant::now();
        let stats = duration_stats(&trips)?;
        output::print_duration_stats(&stats);
        println!("\nThis took {} seconds.", started.elapsed().as_secs_f64());
        output::rule();

        println!("\nCalculating User Stats...\n");
        let started = Instant::now();
        let stats = user_stats(&trips, city)?;
        output::print_user_stats(&stats);
        println!("\nThis took {} seconds.", started.elapsed().as_secs_f64());
        output::rule();

        let mut viewer = RawViewer::new();
        loop {
            let answer = source.read_line("Show 5 rows of raw data?: (Yes/No)")?;
            let answer = answer.to_lowercase();
            if answer != "yes" && answer != "y" {
                break;
            }
            output::print_raw_rows(viewer.next_page(&trips));
        }

        let restart = source.read_line("\nWould you like to restart? Enter yes or no.")?;
        if !restart.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}
