//! Catalog fetch errors
//!
//! A load fails as a whole: the first failing category request is reported
//! and the other result is discarded.

use crate::catalog::Category;
use thiserror::Error;

/// Errors raised while fetching one catalog category
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status
    ///
    /// `message` is the upstream error message, passed through verbatim.
    #[error("Failed to fetch {category}: {message}")]
    Status {
        category: Category,
        status: u16,
        message: String,
    },

    /// The request never produced a response
    #[error("Failed to fetch {category}: {source}")]
    Network {
        category: Category,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a valid contents envelope
    #[error("Failed to decode {category} response: {message}")]
    Decode { category: Category, message: String },

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Category the failing request was for
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::Status { category, .. }
            | Self::Network { category, .. }
            | Self::Decode { category, .. } => Some(*category),
            Self::Client(_) => None,
        }
    }

    /// HTTP status of the failing response, if one was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
