use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::services::fetcher::DEFAULT_READER_URL;
use crate::services::packer::DEFAULT_OUTPUT_NAME;

#[derive(Parser)]
#[command(name = "wpack")]
#[command(about = "A CLI tool for packing web pages into one AI-readable text file via a reader service")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every URL in a list and pack the results into one file
    Pack(PackArgs),

    /// Extract title, source URL and content from a saved reader response
    Extract(ExtractArgs),

    /// Validate a URL list without fetching anything
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct PackArgs {
    /// Newline-delimited URL list (file path, or '-' for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// API key for the reader service, sent as a bearer token
    #[arg(short = 'k', long, value_name = "KEY")]
    pub api_key: String,

    /// Output file for the packed document
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Base URL of the reader service
    #[arg(long, default_value = DEFAULT_READER_URL, value_name = "URL")]
    pub reader_url: String,

    /// Write a JSON metadata sidecar next to the output file
    #[arg(long)]
    pub metadata: bool,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Raw reader response (file path, or '-' for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Print the extracted record as pretty JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Newline-delimited URL list (file path, or '-' for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,
}
