// Common types and utilities shared across the application

pub mod datetime;
