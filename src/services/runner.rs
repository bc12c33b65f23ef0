use crate::error::{Result, WebpagePackError};
use crate::services::extractor::PageExtractor;
use crate::services::fetcher::{ReaderFetcher, FETCH_PAUSE};
use crate::services::packer::DocumentPacker;
use crate::services::validator::UrlValidator;
use crate::types::{PackConfig, PackOutcome, SkippedUrl};
use tracing::{info, warn};

/// One whole pack run: gate the batch, fetch page by page, pack the
/// survivors.
///
/// Each call to [`BatchRunner::run`] returns a fresh [`PackOutcome`]; there is
/// no state carried between runs and no shared mutable slot to overwrite.
pub struct BatchRunner {
    fetcher: ReaderFetcher,
    extractor: PageExtractor,
}

impl BatchRunner {
    /// Build a runner for one credential and reader endpoint.
    ///
    /// A blank API key is rejected here, before any URL is even looked at.
    pub fn new(config: &PackConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(WebpagePackError::MissingApiKey);
        }

        Ok(Self {
            fetcher: ReaderFetcher::new(&config.api_key, &config.reader_base_url)?,
            extractor: PageExtractor::new(),
        })
    }

    /// Run the batch over a newline-delimited URL list.
    ///
    /// The whole list is validated before the first request goes out; any
    /// invalid line rejects the batch. URLs are then fetched strictly in
    /// input order, one at a time, with the fixed pause after every attempt.
    /// A failed fetch is logged, recorded and skipped; zero surviving pages
    /// is an error.
    pub async fn run(&self, raw_urls: &str) -> Result<PackOutcome> {
        let urls = UrlValidator::validate_list(raw_urls)?;
        info!("Starting pack run with {} URLs", urls.len());

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for (idx, url) in urls.iter().enumerate() {
            info!("Processing URL {}/{}: {}", idx + 1, urls.len(), url);

            match self.fetcher.read_url(url).await {
                Ok(raw) => records.push(self.extractor.extract(&raw)),
                Err(e) => {
                    warn!("Failed to read '{}': {}", url, e);
                    skipped.push(SkippedUrl {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            // Pause even after the last attempt, matching the reader
            // service's expected request spacing.
            tokio::time::sleep(FETCH_PAUSE).await;
        }

        if records.is_empty() {
            return Err(WebpagePackError::NoPagesFetched);
        }

        let outcome = PackOutcome {
            document: DocumentPacker::pack(&records),
            attempted: urls.len(),
            records,
            skipped,
        };

        info!(
            "Packed {} of {} pages ({} chars)",
            outcome.records.len(),
            outcome.attempted,
            outcome.total_chars()
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::packer::PREAMBLE;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(key: &str, base: &str) -> PackConfig {
        PackConfig {
            api_key: key.to_string(),
            reader_base_url: base.to_string(),
        }
    }

    fn reader_body(title: &str, url: &str, body: &str) -> String {
        format!(
            "Title: {}\nURL Source: {}\nMarkdown Content:\n{}",
            title, url, body
        )
    }

    #[test]
    fn blank_api_key_is_rejected_up_front() {
        let result = BatchRunner::new(&config("   ", "https://r.jina.ai"));
        assert!(matches!(result, Err(WebpagePackError::MissingApiKey)));
    }

    #[tokio::test]
    async fn invalid_line_blocks_the_batch_without_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let runner = BatchRunner::new(&config("test-key", &server.uri())).unwrap();
        let err = runner
            .run("https://a.example\nbogus\nhttps://b.example")
            .await
            .unwrap_err();

        match err {
            WebpagePackError::InvalidUrls { lines } => assert_eq!(lines, vec!["bogus"]),
            other => panic!("expected InvalidUrls, got {}", other),
        }
    }

    #[tokio::test]
    async fn packs_fetched_pages_into_one_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/https://site.example/one"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(reader_body("one", "https://site.example/one", "alpha")),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/https://site.example/two"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(reader_body("two", "https://site.example/two", "beta")),
            )
            .mount(&server)
            .await;

        let runner = BatchRunner::new(&config("test-key", &server.uri())).unwrap();
        let outcome = runner
            .run("https://site.example/one\nhttps://site.example/two")
            .await
            .unwrap();

        assert!(outcome.document.starts_with(PREAMBLE));
        assert!(outcome.document.contains(
            "\n================\nTitle: one\nURL: https://site.example/one\n================\n\nalpha\n\n"
        ));
        assert_eq!(outcome.attempted, 2);
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.total_chars(), outcome.document.chars().count());
    }

    #[tokio::test]
    async fn failed_fetches_are_skipped_and_survivors_keep_input_order() {
        let server = MockServer::start().await;

        for (name, status) in [
            ("one", 200u16),
            ("two", 500),
            ("three", 200),
            ("four", 503),
            ("five", 200),
        ] {
            let template = if status == 200 {
                ResponseTemplate::new(200).set_body_string(reader_body(
                    name,
                    &format!("https://site.example/{}", name),
                    "body",
                ))
            } else {
                ResponseTemplate::new(status)
            };
            Mock::given(method("GET"))
                .and(path(format!("/https://site.example/{}", name)))
                .respond_with(template)
                .mount(&server)
                .await;
        }

        let urls = "https://site.example/one\nhttps://site.example/two\nhttps://site.example/three\nhttps://site.example/four\nhttps://site.example/five";
        let runner = BatchRunner::new(&config("test-key", &server.uri())).unwrap();
        let outcome = runner.run(urls).await.unwrap();

        assert_eq!(outcome.attempted, 5);

        let titles: Vec<&str> = outcome.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "three", "five"]);

        let skipped: Vec<&str> = outcome.skipped.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(
            skipped,
            vec!["https://site.example/two", "https://site.example/four"]
        );
        assert!(outcome.skipped[0].reason.contains("500"));

        assert_eq!(outcome.document.matches("\nTitle: ").count(), 3);
    }

    #[tokio::test]
    async fn all_failures_yield_no_pages_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let runner = BatchRunner::new(&config("test-key", &server.uri())).unwrap();
        let err = runner
            .run("https://a.example/x\nhttps://b.example/y")
            .await
            .unwrap_err();

        assert!(matches!(err, WebpagePackError::NoPagesFetched));
    }
}
