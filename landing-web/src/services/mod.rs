//! Browser-facing services

pub mod browser;
