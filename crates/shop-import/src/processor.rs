//! Processor seam of the import pipeline.

use shop_core::{Fragment, Item};

use crate::error::ImportError;
use crate::reconciler::ListReconciler;

/// Updates an item from the child nodes of one import document element.
pub trait Processor {
    /// # Errors
    ///
    /// Returns `ImportError` if the item is unsuitable or a collaborator fails.
    fn process(&self, item: Item, fragment: &Fragment) -> Result<Item, ImportError>;
}

impl Processor for ListReconciler<'_> {
    fn process(&self, item: Item, fragment: &Fragment) -> Result<Item, ImportError> {
        self.reconcile(item, fragment)
    }
}

/// Run `processors` in order, threading the item through each.
///
/// # Errors
///
/// Stops at and returns the first processor error.
pub fn process_all(
    processors: &[&dyn Processor],
    item: Item,
    fragment: &Fragment,
) -> Result<Item, ImportError> {
    processors
        .iter()
        .try_fold(item, |item, processor| processor.process(item, fragment))
}
