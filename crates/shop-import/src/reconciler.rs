//! List association reconciliation.
//!
//! Brings an item's associations to one target-kind in line with the
//! declaration nodes of an import fragment:
//!
//! ```text
//! resolve codes (1 search) -> snapshot existing -> upsert per declaration -> prune leftovers
//! ```
//!
//! After a run the item holds exactly one association per resolved
//! declaration slot `(type, target id)`; every other association of that
//! target-kind is removed (and queued for deletion if it was persisted).

use shop_config::ListImportConfig;
use shop_core::declaration::DeclarationFormat;
use shop_core::{Association, Declaration, Fragment, Item};

use crate::error::ImportError;
use crate::resolver::resolve_codes;
use crate::store::{AssociationFactory, EntitySearcher};

/// Per-run counts, one entry per fragment node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Declarations that produced a new association.
    pub created: usize,
    /// Declarations that rewrote an existing association, including one
    /// written by an earlier declaration of the same run.
    pub updated: usize,
    /// Pre-existing associations no declaration matched.
    pub removed: usize,
    /// Nodes that produced nothing: other node names, missing or unknown codes.
    pub skipped: usize,
}

/// Reconciles the associations of one target-kind (`domain`).
///
/// The searcher answers for records of that target-kind, so the target-kind
/// is fixed when the reconciler is built.
pub struct ListReconciler<'a> {
    domain: String,
    format: DeclarationFormat,
    factory: &'a dyn AssociationFactory,
    searcher: &'a dyn EntitySearcher,
}

impl<'a> ListReconciler<'a> {
    pub fn new(
        domain: impl Into<String>,
        factory: &'a dyn AssociationFactory,
        searcher: &'a dyn EntitySearcher,
    ) -> Self {
        Self {
            domain: domain.into(),
            format: DeclarationFormat::default(),
            factory,
            searcher,
        }
    }

    /// Build a reconciler reading declarations as configured.
    pub fn from_config(
        domain: impl Into<String>,
        config: &ListImportConfig,
        factory: &'a dyn AssociationFactory,
        searcher: &'a dyn EntitySearcher,
    ) -> Self {
        Self::new(domain, factory, searcher).with_format(config.declaration_format())
    }

    #[must_use]
    pub fn with_format(mut self, format: DeclarationFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Reconcile `item` against `fragment` and return the updated item.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidItemKind` if the item cannot own
    /// associations, or the searcher's error as `ImportError::Store`.
    pub fn reconcile(&self, item: Item, fragment: &Fragment) -> Result<Item, ImportError> {
        self.reconcile_with_summary(item, fragment).map(|(item, _)| item)
    }

    /// Same as [`ListReconciler::reconcile`], also returning what changed.
    ///
    /// # Errors
    ///
    /// See [`ListReconciler::reconcile`].
    pub fn reconcile_with_summary(
        &self,
        mut item: Item,
        fragment: &Fragment,
    ) -> Result<(Item, ReconcileSummary), ImportError> {
        item.ensure_lists()?;

        let domain = self.domain.as_str();
        let targets = resolve_codes(self.searcher, domain, fragment, &self.format)?;

        // Leftovers in this set are pruned at the end, in reverse natural order.
        let mut pending: Vec<Association> = item.list_items(domain).rev().cloned().collect();
        let mut summary = ReconcileSummary::default();

        for node in fragment {
            let Some(decl) = Declaration::from_node(node, &self.format) else {
                tracing::trace!(node = %node.name, "skipping non-declaration node");
                summary.skipped += 1;
                continue;
            };
            let Some(target) = targets.get(&decl.code) else {
                tracing::debug!(domain, code = %decl.code, "reference code not found; skipping");
                summary.skipped += 1;
                continue;
            };

            let mut assoc = match item.list_item(domain, &decl.kind, &target.id).cloned() {
                Some(existing) => {
                    if let Some(pos) = pending.iter().position(|p| p.same_identity(&existing)) {
                        pending.remove(pos);
                    }
                    summary.updated += 1;
                    existing
                }
                None => {
                    summary.created += 1;
                    self.factory.create_item(domain)
                }
            };

            assoc.set_attributes(decl.namespaced_attributes(domain));
            assoc.domain = domain.to_string();
            assoc.ref_id.clone_from(&target.id);
            assoc.kind = decl.kind;
            item.add_list_item(assoc);
        }

        summary.removed = pending.len();
        item.delete_list_items(&pending);

        tracing::debug!(
            domain,
            code = %item.code,
            created = summary.created,
            updated = summary.updated,
            removed = summary.removed,
            skipped = summary.skipped,
            "reconciled list associations"
        );

        Ok((item, summary))
    }
}
