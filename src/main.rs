mod commands;
mod config;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use crate::config::{Config, DEFAULT_SNIPPET_FILE};

#[derive(Parser)]
#[command(name = "snippets")]
#[command(about = "Store and retrieve snippets of text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a snippet
    Put {
        /// The name of the snippet
        name: String,
        /// The snippet text
        snippet: String,
        /// The snippet filename
        #[arg(default_value = DEFAULT_SNIPPET_FILE)]
        filename: String,
    },
    /// Retrieve a snippet
    Get {
        /// The name of the snippet
        name: String,
        /// The snippet filename
        #[arg(default_value = DEFAULT_SNIPPET_FILE)]
        filename: String,
    },
    /// Search for a snippet containing a certain string
    Search {
        /// String contained in a snippet
        string: String,
        /// The snippet filename
        #[arg(default_value = DEFAULT_SNIPPET_FILE)]
        filename: String,
    },
}

fn main() -> Result<()> {
    let config = Config::from_env();
    config.init_logging();
    info!("starting snippets");

    let cli = Cli::parse();

    match cli.command {
        Commands::Put {
            name,
            snippet,
            filename,
        } => commands::put::put_snippet(&name, &snippet, &filename)?,
        Commands::Get { name, filename } => commands::get::get_snippet(&name, &filename)?,
        Commands::Search { string, filename } => {
            commands::search::search_snippets(&string, &filename)?
        }
    }

    Ok(())
}
