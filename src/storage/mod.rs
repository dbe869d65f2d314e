//! Local configuration and cache-path handling.

pub mod config;
pub mod paths;
