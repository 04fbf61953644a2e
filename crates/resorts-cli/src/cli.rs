use clap::{Parser, Subcommand};
use resorts_core::Difficulty;

#[derive(Parser)]
#[command(name = "resorts")]
#[command(about = "Manage ski resorts from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// REST API base URL (defaults to $RESORTS_API_BASE_URL or http://localhost:5000/api)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all resorts
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new resort
    #[command(alias = "new")]
    Add {
        /// Resort name
        #[arg(long)]
        name: String,
        /// Location
        #[arg(long)]
        location: String,
        /// Number of slopes
        #[arg(long)]
        slopes: String,
        /// Difficulty level
        #[arg(long, default_value_t = Difficulty::Beginner)]
        difficulty: Difficulty,
    },
    /// Edit an existing resort
    Edit {
        /// Resort ID or unique ID prefix
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New location
        #[arg(long)]
        location: Option<String>,
        /// New number of slopes
        #[arg(long)]
        slopes: Option<String>,
        /// New difficulty level
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// Delete a resort
    #[command(alias = "rm")]
    Delete {
        /// Resort ID or unique ID prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
