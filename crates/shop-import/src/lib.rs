//! # shop-import
//!
//! List association reconciliation for catalog imports.
//!
//! Given an item and the declaration nodes of an import fragment, the
//! [`ListReconciler`] resolves all reference codes with one batched search,
//! updates or creates one association per resolved declaration, and prunes
//! the associations of that target-kind that were not declared.
//!
//! Persistence and document parsing are external. The reconciler talks to
//! them through [`AssociationFactory`] and [`EntitySearcher`], borrowed at
//! construction; [`memory::MemoryStore`] implements both in memory.

pub mod error;
pub mod memory;
pub mod processor;
pub mod reconciler;
pub mod resolver;
pub mod search;
pub mod store;

pub use error::{ImportError, StoreError};
pub use processor::{Processor, process_all};
pub use reconciler::{ListReconciler, ReconcileSummary};
pub use resolver::resolve_codes;
pub use search::{Condition, Operator, Search};
pub use store::{AssociationFactory, EntitySearcher};
