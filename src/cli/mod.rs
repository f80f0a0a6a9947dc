//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{empty_message, format_entry_detail, format_entry_list, format_tag_list, short_id};
