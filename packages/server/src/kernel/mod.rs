//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod html;
pub mod http_fetcher;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use html::query_text;
pub use http_fetcher::HttpDocumentFetcher;
pub use test_dependencies::MockDocumentFetcher;
pub use traits::*;
