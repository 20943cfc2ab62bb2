//! Hierarchy data providers
//!
//! A provider produces the flat [`Dataset`] once at startup. The embedded
//! provider serves a small built-in sample; the remote provider fetches the
//! ug-locale JSON files over HTTP.

mod embedded;
mod remote;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::locations::models::Dataset;

pub use embedded::{embedded_dataset, EmbeddedProvider};
pub use remote::RemoteProvider;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch {file}: {source}")]
    Request {
        file: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {file} returned HTTP {status}")]
    Status {
        file: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode {file}: {source}")]
    Decode {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the administrative hierarchy
#[async_trait]
pub trait HierarchyProvider: Send + Sync {
    /// Short description used in logs
    fn describe(&self) -> String;

    async fn load_hierarchy(&self) -> Result<Dataset, LoadError>;
}
