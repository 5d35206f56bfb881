//! Cross-cutting error types.
//!
//! Errors raised by collaborators (stores, searchers) are defined in the
//! crates that declare those collaborators. `CoreError` covers what the
//! domain types themselves can reject.

use thiserror::Error;

use crate::enums::ResourceType;

/// Rejections raised by the core types themselves.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The item's resource type cannot carry list associations.
    #[error("Invalid item kind: {resource} items do not support list associations")]
    InvalidItemKind { resource: ResourceType },
}
