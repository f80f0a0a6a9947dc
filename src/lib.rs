//! devdiary - Terminal developer journal
//!
//! Keeps titled, tagged journal entries in a `.devdiary` directory and lets
//! you search, filter, favorite and edit them from the command line.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DiaryError;
