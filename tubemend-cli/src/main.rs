mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tubemend")]
#[command(about = "Tubemend - Sniff, repair and fetch relayed MP3 payloads", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a file looks like an MP3 container
    Check {
        /// Input file to sniff ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Write the verdict as JSON to this file ("-" for stdout)
        #[arg(short, long)]
        json: Option<String>,
    },

    /// Repair a payload so it starts with a recognizable marker
    Fix {
        /// Input file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the repaired payload
        #[arg(short, long)]
        output: String,
    },

    /// Fetch a video's MP3 through the configured endpoint chain
    Fetch {
        /// YouTube video URL
        #[arg(short, long)]
        url: String,

        /// JSON file with the ordered endpoint templates
        #[arg(short, long)]
        endpoints: String,

        /// Output file (defaults to youtube-<id>.mp3)
        #[arg(short, long)]
        output: Option<String>,

        /// Bitrate substituted into endpoint templates
        #[arg(long, default_value = "128")]
        bitrate: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Check { input, json } => commands::check::execute(&input, json.as_deref()),

        Commands::Fix { input, output } => commands::fix::execute(&input, &output),

        Commands::Fetch {
            url,
            endpoints,
            output,
            bitrate,
        } => commands::fetch::execute(&url, &endpoints, output.as_deref(), bitrate),
    }
}
