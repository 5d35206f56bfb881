//! Collaborator interfaces the reconciler is constructed with.
//!
//! Implementations live with the persistence layer; `crate::memory` provides
//! an in-memory one.

use shop_core::{Association, TargetEntity};

use crate::error::StoreError;
use crate::search::Search;

/// Factory of the list manager: produces empty, unsaved associations.
pub trait AssociationFactory {
    fn create_item(&self, domain: &str) -> Association;
}

/// Read access to the records of one target-kind.
pub trait EntitySearcher {
    /// Run `search` and return the matching records, at most `search.size` of them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing store rejects or fails the search.
    fn search(&self, search: &Search) -> Result<Vec<TargetEntity>, StoreError>;
}
