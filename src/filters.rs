//! Interactive resolution of city/month/day filters.
//!
//! Console reads sit behind the [`InputSource`] trait so the retry loops can
//! be driven by a scripted sequence of answers in tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::{City, DayToken, MonthToken};
use crate::error::{ExplorerError, Result};

/// A source of user-entered lines.
pub trait InputSource {
    /// Displays `prompt` and returns the next line with its trailing newline
    /// removed. Returns [`ExplorerError::InputClosed`] once no more input is
    /// available.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Production input source backed by stdin.
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        println!("{prompt}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(ExplorerError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Input source that replays a fixed sequence of answers. Used by tests;
/// exhausting the script is an error, which bounds every retry loop.
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.lines.pop_front().ok_or(ExplorerError::InputClosed)
    }
}

/// Prompts for a city, month, and day until each matches its token set.
///
/// The three fields are validated independently; an invalid answer prints a
/// diagnostic and repeats that prompt without touching the other fields.
pub fn resolve(source: &mut dyn InputSource) -> Result<(City, MonthToken, DayToken)> {
    println!("\nHello! Let's explore some US bikeshare data!");

    let city = loop {
        let answer = source.read_line("\nChoose a city from (Chicago - New York - Washington):")?;
        match City::parse(&answer) {
            Some(city) => break city,
            None => println!("\nError: Enter one of the three cities"),
        }
    };

    let month = loop {
        let answer = source.read_line(
            "\nEnter the month in the same format as (Jan - Feb - Mar - Apr - May - Jun) or enter (all) to apply no month filter",
        )?;
        match MonthToken::parse(&answer) {
            Some(month) => break month,
            None => println!("\nError: Enter the month in correct format"),
        }
    };

    let day = loop {
        let answer = source.read_line(
            "\nEnter the day of the week (Monday - Tuesday - ... - Sunday) or enter (all) to apply no day filter",
        )?;
        match DayToken::parse(&answer) {
            Some(day) => break day,
            None => println!("\nError: Enter the day again"),
        }
    };

    debug!(%city, %month, %day, "Filters resolved");
    println!("{}", "-".repeat(100));
    Ok((city, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accepts_valid_tokens() {
        let mut source = ScriptedSource::new(["chicago", "may", "monday"]);
        let (city, month, day) = resolve(&mut source).unwrap();

        assert_eq!(city, City::Chicago);
        assert_eq!(month, MonthToken::May);
        assert_eq!(day, DayToken::Monday);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let mut source = ScriptedSource::new(["CHICAGO", "ALL", "All"]);
        let (city, month, day) = resolve(&mut source).unwrap();

        assert_eq!(city, City::Chicago);
        assert_eq!(month, MonthToken::All);
        assert_eq!(day, DayToken::All);
    }

    #[test]
    fn test_resolve_reprompts_on_invalid_city() {
        // Typo and padded input are rejected, then the valid answer lands.
        let mut source = ScriptedSource::new(["Chigaco", "  chicago", "new york", "jun", "friday"]);
        let (city, month, day) = resolve(&mut source).unwrap();

        assert_eq!(city, City::NewYork);
        assert_eq!(month, MonthToken::Jun);
        assert_eq!(day, DayToken::Friday);
    }

    #[test]
    fn test_resolve_reprompts_each_field_independently() {
        let mut source =
            ScriptedSource::new(["washington", "july", "banana", "jan", "funday", "sunday"]);
        let (city, month, day) = resolve(&mut source).unwrap();

        assert_eq!(city, City::Washington);
        assert_eq!(month, MonthToken::Jan);
        assert_eq!(day, DayToken::Sunday);
    }

    #[test]
    fn test_resolve_errors_when_script_runs_out() {
        let mut source = ScriptedSource::new(["nowhere"]);
        let err = resolve(&mut source).unwrap_err();
        assert!(matches!(err, ExplorerError::InputClosed));
    }
}
