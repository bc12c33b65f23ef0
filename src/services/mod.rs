pub mod extractor;
pub mod fetcher;
pub mod packer;
pub mod runner;
pub mod validator;

pub use extractor::PageExtractor;
pub use fetcher::ReaderFetcher;
pub use packer::DocumentPacker;
pub use runner::BatchRunner;
pub use validator::UrlValidator;
