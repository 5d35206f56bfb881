//! Error types for shop-import.

use shop_core::{CoreError, ResourceType};
use thiserror::Error;

/// Errors raised by store collaborators. Passed through reconciliation unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The search was rejected (bad field, bad condition).
    #[error("Search failed: {0}")]
    Search(String),

    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from import processing.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The item cannot own list associations. Raised before any lookup.
    #[error("Invalid item kind: {resource} items do not support list associations")]
    InvalidItemKind { resource: ResourceType },

    /// A store collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CoreError> for ImportError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidItemKind { resource } => Self::InvalidItemKind { resource },
        }
    }
}
