mod cli;
mod error;
mod services;
mod types;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, ExtractArgs, PackArgs, ValidateArgs};
use error::{Result, WebpagePackError};
use services::{BatchRunner, PageExtractor, UrlValidator};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn, Level};
use tracing_subscriber;
use types::{PackConfig, PackOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Pack(args) => handle_pack_command(args).await,
        Commands::Extract(args) => handle_extract_command(args).await,
        Commands::Validate(args) => handle_validate_command(args).await,
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Read the whole input, from a file or from stdin when the path is '-'.
async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        let content = tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read input file '{}'", input))?;
        Ok(content)
    }
}

async fn handle_pack_command(args: &PackArgs) -> Result<()> {
    let raw_urls = read_input(&args.input).await?;

    let config = PackConfig {
        api_key: args.api_key.clone(),
        reader_base_url: args.reader_url.clone(),
    };

    let runner = BatchRunner::new(&config)?;
    let outcome = runner.run(&raw_urls).await?;

    tokio::fs::write(&args.output, &outcome.document)
        .await
        .with_context(|| format!("Failed to write output file '{}'", args.output.display()))?;

    info!(
        "Wrote {} ({} pages, {} chars)",
        args.output.display(),
        outcome.records.len(),
        outcome.total_chars()
    );

    if !outcome.skipped.is_empty() {
        warn!(
            "{} of {} URLs were skipped; rerun with --verbose for request details",
            outcome.skipped.len(),
            outcome.attempted
        );
    }

    if args.metadata {
        let metadata_path = metadata_path_for(&args.output);
        write_metadata_file(&metadata_path, &outcome, &args.output).await?;
        info!("Generated metadata file: {}", metadata_path.display());
    }

    Ok(())
}

async fn handle_extract_command(args: &ExtractArgs) -> Result<()> {
    let raw = read_input(&args.input).await?;
    let record = PageExtractor::new().extract(&raw);

    if args.json {
        let json = serde_json::to_string_pretty(&record)
            .context("Failed to serialize extracted record")?;
        println!("{}", json);
    } else {
        println!("\n=== Extracted from '{}' ===", args.input);
        println!("Title: {}", record.title);
        println!("URL Source: {}", record.source_url);
        println!(
            "Content: {} chars, {} lines",
            record.content.chars().count(),
            record.content.lines().count()
        );
    }

    Ok(())
}

async fn handle_validate_command(args: &ValidateArgs) -> Result<()> {
    let raw = read_input(&args.input).await?;
    let total_lines = raw.trim().split('\n').count();
    info!("Validating {} lines", total_lines);

    match UrlValidator::validate_list(&raw) {
        Ok(urls) => {
            for url in &urls {
                info!("✓ Valid: {}", url);
            }
            println!("\n=== Validation Summary ===");
            println!("Valid URLs: {}/{}", urls.len(), total_lines);
            println!("All URLs are valid!");
            Ok(())
        }
        Err(WebpagePackError::InvalidUrls { lines }) => {
            for line in &lines {
                error!("✗ Invalid: {}", line);
            }
            println!("\n=== Validation Summary ===");
            println!("Invalid URLs: {}/{}", lines.len(), total_lines);
            Err(WebpagePackError::InvalidUrls { lines })
        }
        Err(e) => Err(e),
    }
}

fn metadata_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("webpagepack-output");
    output.with_file_name(format!("{}_metadata.json", stem))
}

/// Write the run statistics sidecar next to the packed document.
async fn write_metadata_file(
    metadata_path: &Path,
    outcome: &PackOutcome,
    output_file: &Path,
) -> Result<()> {
    let metadata = serde_json::json!({
        "created_at": chrono::Utc::now().to_rfc3339(),
        "output_file": output_file.display().to_string(),
        "attempted_urls": outcome.attempted,
        "packed_pages": outcome.records.len(),
        "total_chars": outcome.total_chars(),
        "packed_titles": outcome.records.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
        "skipped": &outcome.skipped,
    });

    let json_content = serde_json::to_string_pretty(&metadata)
        .context("Failed to serialize run metadata")?;

    tokio::fs::write(metadata_path, json_content)
        .await
        .with_context(|| {
            format!(
                "Failed to write metadata file '{}'",
                metadata_path.display()
            )
        })?;

    Ok(())
}
