use crate::error::{Result, WebpagePackError};
use url::Url;

pub struct UrlValidator;

impl UrlValidator {
    /// Check whether a string is a syntactically well-formed absolute URL.
    ///
    /// Requires both a scheme and a host; never touches the network. Schemes
    /// other than http(s) pass as long as a host is present.
    pub fn is_valid(url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => parsed.has_host(),
            Err(_) => false,
        }
    }

    /// Validate a newline-delimited URL list as one batch.
    ///
    /// Returns the trimmed URLs in input order, or rejects the whole batch
    /// with every offending line reported as supplied (untrimmed). Interior
    /// blank lines count as invalid, so a sloppy list never reaches the
    /// network.
    pub fn validate_list(raw: &str) -> Result<Vec<String>> {
        let lines: Vec<&str> = raw.trim().split('\n').collect();

        let invalid: Vec<String> = lines
            .iter()
            .filter(|line| !Self::is_valid(line.trim()))
            .map(|line| line.to_string())
            .collect();

        if !invalid.is_empty() {
            return Err(WebpagePackError::InvalidUrls { lines: invalid });
        }

        Ok(lines.iter().map(|line| line.trim().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_urls() {
        assert!(UrlValidator::is_valid("https://example.com/page"));
        assert!(UrlValidator::is_valid("http://example.com"));
        assert!(UrlValidator::is_valid("https://example.com:8443/a?b=c#d"));
        assert!(UrlValidator::is_valid("ftp://mirror.example.org/pub"));
    }

    #[test]
    fn rejects_strings_without_scheme_and_host() {
        assert!(!UrlValidator::is_valid(""));
        assert!(!UrlValidator::is_valid("example.com/page"));
        assert!(!UrlValidator::is_valid("http://"));
        assert!(!UrlValidator::is_valid("/relative/path"));
        assert!(!UrlValidator::is_valid("not a url"));
        assert!(!UrlValidator::is_valid("mailto:someone@example.com"));
    }

    #[test]
    fn valid_list_returns_trimmed_urls_in_order() {
        let raw = "  https://a.example/one  \nhttps://b.example/two\n";
        let urls = UrlValidator::validate_list(raw).unwrap();
        assert_eq!(urls, vec!["https://a.example/one", "https://b.example/two"]);
    }

    #[test]
    fn one_bad_line_rejects_the_whole_batch() {
        let raw = "https://a.example\nnot-a-url\nhttps://b.example";
        match UrlValidator::validate_list(raw) {
            Err(WebpagePackError::InvalidUrls { lines }) => {
                assert_eq!(lines, vec!["not-a-url"]);
            }
            other => panic!("expected InvalidUrls, got {:?}", other),
        }
    }

    #[test]
    fn every_invalid_line_is_reported() {
        let raw = "bogus\nhttps://ok.example\nalso bad";
        match UrlValidator::validate_list(raw) {
            Err(WebpagePackError::InvalidUrls { lines }) => {
                assert_eq!(lines, vec!["bogus", "also bad"]);
            }
            other => panic!("expected InvalidUrls, got {:?}", other),
        }
    }

    #[test]
    fn interior_blank_line_rejects_the_batch() {
        let raw = "https://a.example\n\nhttps://b.example";
        match UrlValidator::validate_list(raw) {
            Err(WebpagePackError::InvalidUrls { lines }) => {
                assert_eq!(lines, vec![""]);
            }
            other => panic!("expected InvalidUrls, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_rejects_the_batch() {
        assert!(UrlValidator::validate_list("   \n  ").is_err());
        assert!(UrlValidator::validate_list("").is_err());
    }
}
