pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod output;
pub mod tagfile;

pub use error::{AptLogError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_ID: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
