use crate::types::PageRecord;
use regex::Regex;

const TITLE_FALLBACK: &str = "Title not found";
const URL_FALLBACK: &str = "URL not found";
const CONTENT_FALLBACK: &str = "Content not found";

/// Pulls the labeled fields out of a raw reader response.
///
/// The reader lays its response out as a `Title:` line, a `URL Source:` line
/// and a `Markdown Content:` block running to the end of the document. That
/// layout is a structural assumption about the remote service, not a contract
/// this crate enforces: each field is a first-match textual search that
/// degrades to a placeholder when absent, so extraction never fails.
pub struct PageExtractor {
    title_pattern: Regex,
    source_pattern: Regex,
    content_pattern: Regex,
}

impl PageExtractor {
    pub fn new() -> Self {
        Self {
            title_pattern: Regex::new(r"Title: (.+)").unwrap(),
            source_pattern: Regex::new(r"URL Source: (.+)").unwrap(),
            content_pattern: Regex::new(r"(?s)Markdown Content:\n(.+)$").unwrap(),
        }
    }

    pub fn extract(&self, raw: &str) -> PageRecord {
        let title = self
            .title_pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| TITLE_FALLBACK.to_string());

        let source_url = self
            .source_pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| URL_FALLBACK.to_string());

        let content = self
            .content_pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| CONTENT_FALLBACK.to_string());

        PageRecord {
            title,
            source_url,
            content,
        }
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}
