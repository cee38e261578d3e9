//! Command-line surface: argument parsing, configuration loading, API
//! fetching and the generation driver.

pub mod args;
pub mod config;
pub mod driver;
pub mod fetch;
pub mod reporter;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod fetch_tests;
