//! Descriptive statistics over a filtered trip table.
//!
//! Each aggregator is a stateless function over `&[Trip]`; frequency
//! counting and mode selection live in `utility`, result types in `types`.

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;
