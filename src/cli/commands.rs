use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newssum")]
#[command(about = "News summaries, suggestion search and local subscriptions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List news sources, sorted by description
    Sources {
        /// Only show sources you are subscribed to
        #[arg(long)]
        subscribed: bool,
    },

    /// Show the articles of a source
    Articles {
        /// Source path as shown by `sources`
        path: String,
    },

    /// Show the articles of a source and remember it as last read
    Open {
        /// Source path as shown by `sources`
        path: String,
    },

    /// Show backend version information
    About,

    /// Check whether the suggestion service is reachable
    Health,

    /// Search for suggestions
    Suggest {
        /// Free-text query
        query: String,
    },

    /// Replace your subscriptions with the given source paths
    Subscribe {
        /// Source paths (an empty list clears all subscriptions)
        paths: Vec<String>,
    },

    /// List your subscriptions
    Subscriptions,

    /// Show the last-read source, or set it when a path is given
    LastRead {
        /// Source path to record as last read
        path: Option<String>,
    },
}
