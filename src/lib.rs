pub mod analyzers;
pub mod catalog;
pub mod error;
pub mod filters;
pub mod loader;
pub mod output;
pub mod viewer;
