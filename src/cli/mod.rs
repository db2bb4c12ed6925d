//! CLI argument parsing for arcadekit
//!
//! Global flags: --config, --catalog, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::ImageArgs;
pub use output::OutputFormat;

/// Arcadekit - theme helpers for game arcade sites
#[derive(Parser, Debug)]
#[command(name = "arcadekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Theme config file (default: ~/.config/arcadekit/config.toml)
    #[arg(long, global = true, env = "ARCADEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Game catalog file (TOML, or JSON with a .json extension)
    #[arg(long, global = true, env = "ARCADEKIT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "arcadekit_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten text to a character budget without splitting the last word
    Truncate {
        /// Text to shorten
        text: String,

        /// Character budget (0 or less keeps the text whole)
        #[arg(long, short, allow_hyphen_values = true)]
        max: i64,
    },

    /// Format a number with K/M/G/T suffixes
    Compact {
        /// Non-negative number
        #[arg(allow_hyphen_values = true)]
        number: f64,
    },

    #[command(flatten)]
    Game(GameCommand),
}

/// Commands that read one catalog entry
#[derive(Subcommand, Debug)]
pub enum GameCommand {
    /// Print a game's title
    Title {
        /// Game id
        id: u64,

        /// Character budget (0 keeps the title whole)
        #[arg(long, short, default_value_t = 0, allow_hyphen_values = true)]
        max: i64,
    },

    /// Print a game's plain-text excerpt
    Excerpt {
        /// Game id
        id: u64,

        /// Character limit (0 disables it)
        #[arg(long, short, default_value_t = 0)]
        max: usize,
    },

    /// Print a game's stored description
    Description {
        /// Game id
        id: u64,

        /// Character limit (0 disables it)
        #[arg(long, short, default_value_t = 0)]
        max: usize,
    },

    /// Render the thumbnail image tag, falling back to the theme default
    Thumbnail {
        /// Game id
        id: u64,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Print the stored thumbnail URL
    ThumbnailUrl {
        /// Game id
        id: u64,
    },

    /// Render one screenshot image tag
    Screenshot {
        /// Game id
        id: u64,

        /// Screenshot number (1-4)
        #[arg(long, short, default_value_t = 1)]
        number: u8,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Print the stored URL of one screenshot
    ScreenshotUrl {
        /// Game id
        id: u64,

        /// Screenshot number (1-4)
        #[arg(long, short, default_value_t = 1)]
        number: u8,
    },

    /// Render every available screenshot as a lightbox link
    Screenshots {
        /// Game id
        id: u64,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Count the available screenshots
    CountScreenshots {
        /// Game id
        id: u64,
    },

    /// Render the gameplay video player
    Video {
        /// Game id
        id: u64,

        /// Player width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Player height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
}

impl GameCommand {
    /// Id of the catalog entry the command reads
    pub fn entry_id(&self) -> u64 {
        match self {
            GameCommand::Title { id, .. }
            | GameCommand::Excerpt { id, .. }
            | GameCommand::Description { id, .. }
            | GameCommand::Thumbnail { id, .. }
            | GameCommand::ThumbnailUrl { id }
            | GameCommand::Screenshot { id, .. }
            | GameCommand::ScreenshotUrl { id, .. }
            | GameCommand::Screenshots { id, .. }
            | GameCommand::CountScreenshots { id }
            | GameCommand::Video { id, .. } => *id,
        }
    }
}
