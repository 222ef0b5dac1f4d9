// Job Board Service - API Core
//
// Stores job listings in Postgres, exposes CRUD over HTTP, scrapes listings
// from a job board's embedded page state and exports them as a spreadsheet.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
