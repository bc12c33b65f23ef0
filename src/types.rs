use serde::{Deserialize, Serialize};

/// One fetched page after field extraction, ready for packing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    pub source_url: String,
    pub content: String,
}

/// A URL that was attempted but yielded no record, with the cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedUrl {
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct PackConfig {
    pub api_key: String,
    pub reader_base_url: String,
}

/// Run-scoped result of one batch: the packed document plus what went into it.
/// Regenerated from scratch on every run; nothing survives between runs.
#[derive(Debug, Clone)]
pub struct PackOutcome {
    pub document: String,
    pub records: Vec<PageRecord>,
    pub attempted: usize,
    pub skipped: Vec<SkippedUrl>,
}

impl PackOutcome {
    /// Total character count of the packed document (characters, not bytes).
    pub fn total_chars(&self) -> usize {
        self.document.chars().count()
    }
}
