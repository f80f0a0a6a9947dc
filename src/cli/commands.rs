//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devdiary")]
#[command(about = "Terminal developer journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print debug logging to stderr (DEVDIARY_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    New {
        /// Entry title (up to 100 characters)
        #[arg(short, long)]
        title: Option<String>,

        /// Entry text; opens the editor when omitted
        #[arg(short, long)]
        content: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Mark as favorite
        #[arg(short, long)]
        favorite: bool,
    },

    /// Change an existing entry; opens the editor when no field is given
    Edit {
        /// Entry id or unique id prefix
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Replace the tags with these (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        #[arg(long, conflicts_with = "unfavorite")]
        favorite: bool,

        #[arg(long)]
        unfavorite: bool,
    },

    /// Delete an entry permanently
    Delete {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Toggle the favorite flag of an entry
    Fav {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Print one entry in full
    Show {
        /// Entry id or unique id prefix
        id: String,
    },

    /// List entries, newest first
    List {
        /// Case-insensitive text to find in title or content
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only entries carrying any of these tags (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// First day to include (YYYY-MM-DD, today, yesterday)
        #[arg(long)]
        from: Option<String>,

        /// Last day to include (YYYY-MM-DD, today, yesterday)
        #[arg(long)]
        to: Option<String>,

        /// Only favorites
        #[arg(short, long)]
        favorites: bool,

        /// Print matching entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every tag in use
    Tags,

    /// Show or change the theme preference
    Theme {
        /// light, dark or toggle
        value: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
