//! Member QA control CLI.
//!
//! Talks to the mqad daemon over HTTP.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::DaemonClient;

#[derive(Parser)]
#[command(name = "mqactl")]
#[command(about = "Member QA - ask questions about member messages", long_about = None)]
#[command(version = mqa_common::VERSION)]
struct Cli {
    /// Daemon base URL (overrides MQAD_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a natural-language question
    Ask {
        /// The question, as free text
        question: Vec<String>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Show daemon health
    Status,

    /// Invalidate the daemon's message cache
    Refresh,

    /// Substring search over the message corpus
    Search {
        /// Substring to look for
        q: String,
    },

    /// List distinct member names
    Names,

    /// Search one member's messages
    Find {
        /// Member name (substring match)
        member: String,

        /// Substring to look for
        q: String,
    },

    /// Show corpus statistics
    Analyze {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = DaemonClient::new(cli.url)?;

    match cli.command {
        Commands::Ask { question, json } => {
            commands::ask(&client, &question.join(" "), json).await
        }
        Commands::Status => commands::status(&client).await,
        Commands::Refresh => commands::refresh(&client).await,
        Commands::Search { q } => commands::search(&client, &q).await,
        Commands::Names => commands::names(&client).await,
        Commands::Find { member, q } => commands::find(&client, &member, &q).await,
        Commands::Analyze { json } => commands::analyze(&client, json).await,
    }
}
