//! Job actions - entry points combining extraction, storage and export.

pub mod export;
pub mod scrape;

pub use export::export_jobs;
pub use scrape::scrape_keyword;
