//! Static catalog of supported cities and filter tokens.
//!
//! The city-to-dataset mapping and the month/day token sets are fixed at
//! compile time; nothing here is mutated at runtime.

use std::fmt;

/// A city with a backing trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Case-insensitive match against the supported city names.
    pub fn parse(input: &str) -> Option<City> {
        match input.to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york" => Some(City::NewYork),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// File name of the city's dataset, relative to the data directory.
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// The Washington dataset carries no gender or birth-year columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        };
        write!(f, "{name}")
    }
}

/// A month filter. `All` applies no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthToken {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    All,
}

impl MonthToken {
    /// Case-insensitive match against the month abbreviations or "all".
    pub fn parse(input: &str) -> Option<MonthToken> {
        match input.to_lowercase().as_str() {
            "jan" => Some(MonthToken::Jan),
            "feb" => Some(MonthToken::Feb),
            "mar" => Some(MonthToken::Mar),
            "apr" => Some(MonthToken::Apr),
            "may" => Some(MonthToken::May),
            "jun" => Some(MonthToken::Jun),
            "all" => Some(MonthToken::All),
            _ => None,
        }
    }

    /// 1-based calendar month number, or `None` for `All`.
    pub fn number(&self) -> Option<u32> {
        match self {
            MonthToken::Jan => Some(1),
            MonthToken::Feb => Some(2),
            MonthToken::Mar => Some(3),
            MonthToken::Apr => Some(4),
            MonthToken::May => Some(5),
            MonthToken::Jun => Some(6),
            MonthToken::All => None,
        }
    }
}

impl fmt::Display for MonthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MonthToken::Jan => "Jan",
            MonthToken::Feb => "Feb",
            MonthToken::Mar => "Mar",
            MonthToken::Apr => "Apr",
            MonthToken::May => "May",
            MonthToken::Jun => "Jun",
            MonthToken::All => "All",
        };
        write!(f, "{name}")
    }
}

/// A day-of-week filter. `All` applies no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayToken {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    All,
}

impl DayToken {
    /// Case-insensitive match against the day names or "all".
    pub fn parse(input: &str) -> Option<DayToken> {
        match input.to_lowercase().as_str() {
            "monday" => Some(DayToken::Monday),
            "tuesday" => Some(DayToken::Tuesday),
            "wednesday" => Some(DayToken::Wednesday),
            "thursday" => Some(DayToken::Thursday),
            "friday" => Some(DayToken::Friday),
            "saturday" => Some(DayToken::Saturday),
            "sunday" => Some(DayToken::Sunday),
            "all" => Some(DayToken::All),
            _ => None,
        }
    }

    /// Title-case day name for comparison against derived day-of-week
    /// columns, or `None` for `All`.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            DayToken::Monday => Some("Monday"),
            DayToken::Tuesday => Some("Tuesday"),
            DayToken::Wednesday => Some("Wednesday"),
            DayToken::Thursday => Some("Thursday"),
            DayToken::Friday => Some("Friday"),
            DayToken::Saturday => Some("Saturday"),
            DayToken::Sunday => Some("Sunday"),
            DayToken::All => None,
        }
    }
}

impl fmt::Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "All"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_case_insensitive() {
        assert_eq!(City::parse("chicago"), Some(City::Chicago));
        assert_eq!(City::parse("CHICAGO"), Some(City::Chicago));
        assert_eq!(City::parse("New York"), Some(City::NewYork));
        assert_eq!(City::parse("washington"), Some(City::Washington));
    }

    #[test]
    fn test_city_parse_rejects_typos() {
        assert_eq!(City::parse("Chigaco"), None);
        assert_eq!(City::parse(""), None);
        assert_eq!(City::parse("  chicago"), None); // whitespace is not stripped
    }

    #[test]
    fn test_city_data_files() {
        assert_eq!(City::Chicago.data_file(), "chicago.csv");
        assert_eq!(City::NewYork.data_file(), "new_york_city.csv");
        assert_eq!(City::Washington.data_file(), "washington.csv");
    }

    #[test]
    fn test_only_washington_lacks_demographics() {
        assert!(City::Chicago.has_demographics());
        assert!(City::NewYork.has_demographics());
        assert!(!City::Washington.has_demographics());
    }

    #[test]
    fn test_month_numbers_are_one_based() {
        assert_eq!(MonthToken::Jan.number(), Some(1));
        assert_eq!(MonthToken::Jun.number(), Some(6));
        assert_eq!(MonthToken::All.number(), None);
    }

    #[test]
    fn test_month_parse() {
        assert_eq!(MonthToken::parse("MAY"), Some(MonthToken::May));
        assert_eq!(MonthToken::parse("all"), Some(MonthToken::All));
        assert_eq!(MonthToken::parse("july"), None);
        assert_eq!(MonthToken::parse("jul"), None);
    }

    #[test]
    fn test_day_parse_and_name() {
        assert_eq!(DayToken::parse("monday"), Some(DayToken::Monday));
        assert_eq!(DayToken::parse("SUNDAY"), Some(DayToken::Sunday));
        assert_eq!(DayToken::parse("mon"), None);
        assert_eq!(DayToken::Wednesday.name(), Some("Wednesday"));
        assert_eq!(DayToken::All.name(), None);
    }

    #[test]
    fn test_display_is_title_case() {
        assert_eq!(City::NewYork.to_string(), "New York");
        assert_eq!(MonthToken::Feb.to_string(), "Feb");
        assert_eq!(DayToken::All.to_string(), "All");
    }
}
