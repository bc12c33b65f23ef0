//! # WebpagePack Library
//!
//! A library for packing the readable content of multiple web pages into one
//! AI-consumable text file via a reader service (Jina Reader by default).
//! Covers batch URL validation, sequential rate-limited fetching, field
//! extraction from reader responses, and byte-stable document packing.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use webpagepack::{BatchRunner, PackConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PackConfig {
//!         api_key: "jina_xxx".to_string(),
//!         reader_base_url: "https://r.jina.ai".to_string(),
//!     };
//!
//!     // One run, one value back; nothing is kept between runs.
//!     let runner = BatchRunner::new(&config)?;
//!     let outcome = runner
//!         .run("https://example.com/page\nhttps://example.org/other")
//!         .await?;
//!
//!     std::fs::write("webpagepack-output.txt", &outcome.document)?;
//!     println!(
//!         "Packed {} pages ({} chars)",
//!         outcome.records.len(),
//!         outcome.total_chars()
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

// Re-export main types and services for easier usage
pub use error::{Result, WebpagePackError};
pub use services::{BatchRunner, DocumentPacker, PageExtractor, ReaderFetcher, UrlValidator};
pub use types::{PackConfig, PackOutcome, PageRecord, SkippedUrl};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
