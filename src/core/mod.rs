//! Core fetch pipeline: HTTP client construction, the remote fetcher, and
//! logging setup.

pub mod fetcher;
pub mod http;
pub mod logging;
