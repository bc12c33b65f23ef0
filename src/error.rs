use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebpagePackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status error: {status}")]
    HttpStatus { status: u16 },

    #[error("Missing API key: pass a non-empty key for the reader service")]
    MissingApiKey,

    #[error("Invalid URLs in input:\n{}", .lines.join("\n"))]
    InvalidUrls { lines: Vec<String> },

    #[error("No pages could be fetched: check the URLs and the API key")]
    NoPagesFetched,

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WebpagePackError>;
