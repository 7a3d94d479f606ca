use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binary-race")]
#[command(author, version, about = "Iterative vs recursive decimal-to-binary timing")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Wall-clock budget per chart in milliseconds (unbounded if omitted)
    #[arg(long, global = true, env = "BINARY_RACE_MAX_DURATION_MS")]
    pub max_duration_ms: Option<u64>,

    /// Seed for the variant measurement order
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0", env = "BINARY_RACE_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "BINARY_RACE_PORT")]
        port: u16,

        /// Directory of front-end files served at /
        #[arg(long, default_value = "./static")]
        static_dir: PathBuf,
    },

    /// Measure one magnitude and print the report
    Report {
        /// Magnitude to convert (clamped to 0..=1000000000)
        #[arg(allow_hyphen_values = true)]
        n: String,

        /// iterative, recursive, both or chart
        #[arg(short, long, default_value = "both")]
        mode: String,

        /// Print JSON instead of the table
        #[arg(long)]
        json: bool,
    },
}
