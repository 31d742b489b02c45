//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use comparo_core::ContentKind;
use comparo_feed::SourceFormat;

#[derive(Parser)]
#[command(name = "comparo")]
#[command(about = "Inspect the content and offer feeds behind the site", long_about = None)]
pub(crate) struct Cli {
    /// Feed config file (defaults to ~/.config/comparo/feeds.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List content records (products, posts or top) as JSON
    Content {
        /// Content kind or alias (e.g., products, blog, top10)
        kind: ContentKind,

        /// Include unpublished records
        #[arg(long)]
        all: bool,

        /// Sort by publication date, newest first
        #[arg(long)]
        newest_first: bool,
    },

    /// List affiliate offers as JSON
    Offers {
        /// Include unpublished offers
        #[arg(long)]
        all: bool,

        /// Only offers linked to this content slug
        #[arg(long)]
        slug: Option<String>,
    },

    /// Look up published content by slug across all kinds
    Find {
        slug: String,
    },

    /// Run the ingestion pipeline on a local export without any config
    Parse {
        /// CSV or JSON file
        file: PathBuf,

        /// Map rows as offers instead of content
        #[arg(long)]
        offers: bool,

        /// Content kind, used for the fallback slug
        #[arg(long, default_value = "products")]
        kind: ContentKind,

        /// Body format: auto, json or csv
        #[arg(long, default_value = "auto")]
        format: SourceFormat,

        /// Include unpublished records
        #[arg(long)]
        all: bool,
    },

    /// Inspect the feed configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the configured sources and where the API key comes from
    Show,

    /// Print the config file path
    Path,
}
