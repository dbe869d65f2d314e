//! kubectx-git - fetch remote kubeconfig contexts over authenticated HTTP.
//!
//! The substantive subsystem is [`core::fetcher`]: an authenticated remote
//! fetch feeding a local cache consumed by a kubeconfig context switcher.
//! Everything else (argument dispatch, local config reading) is thin glue
//! around it.

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
// Allow async functions without await - operation dispatch stays async so
// future subcommands can reach the fetcher without an API change.
#![allow(clippy::unused_async)]

pub mod cli;
pub mod core;
pub mod error;
pub mod storage;

pub use error::{ExitCode, KubectxError, Result};
