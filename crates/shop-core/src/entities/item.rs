use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::association::Association;
use crate::enums::ResourceType;
use crate::errors::CoreError;

/// A catalog record together with the list associations it owns.
///
/// Associations keep their insertion order ("natural order").
/// [`Item::add_list_item`] keeps one association per slot (domain, type,
/// ref id); an item loaded from storage may still hold duplicates. Removed
/// associations that were already persisted are queued in `deleted` for the
/// store to drop.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    pub id: Option<String>,
    pub resource: ResourceType,
    pub code: String,
    #[serde(default)]
    list_items: Vec<Association>,
    #[serde(default)]
    deleted: Vec<Association>,
}

impl Item {
    pub fn new(resource: ResourceType, code: impl Into<String>) -> Self {
        Self {
            id: None,
            resource,
            code: code.into(),
            list_items: Vec::new(),
            deleted: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add or replace an association, returning the item for chaining.
    #[must_use]
    pub fn with_list_item(mut self, assoc: Association) -> Self {
        self.add_list_item(assoc);
        self
    }

    /// Fail with `CoreError::InvalidItemKind` unless this item can own associations.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidItemKind` for resource types without lists.
    pub fn ensure_lists(&self) -> Result<(), CoreError> {
        if self.resource.supports_lists() {
            Ok(())
        } else {
            Err(CoreError::InvalidItemKind {
                resource: self.resource,
            })
        }
    }

    /// Every association of the item, in natural order.
    #[must_use]
    pub fn all_list_items(&self) -> &[Association] {
        &self.list_items
    }

    /// Associations to `domain`, all types, in natural order.
    pub fn list_items<'a>(
        &'a self,
        domain: &'a str,
    ) -> impl DoubleEndedIterator<Item = &'a Association> + 'a {
        self.list_items.iter().filter(move |a| a.domain == domain)
    }

    /// Associations to `domain` of one type, in natural order.
    pub fn list_items_of_type<'a>(
        &'a self,
        domain: &'a str,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a Association> + 'a {
        self.list_items(domain).filter(move |a| a.kind == kind)
    }

    #[must_use]
    pub fn list_item(&self, domain: &str, kind: &str, ref_id: &str) -> Option<&Association> {
        self.list_items.iter().find(|a| a.is_at(domain, kind, ref_id))
    }

    /// Upsert by slot: an association already at the same slot is replaced in
    /// place, otherwise the new one is appended.
    pub fn add_list_item(&mut self, assoc: Association) {
        let pos = self
            .list_items
            .iter()
            .position(|a| a.is_at(&assoc.domain, &assoc.kind, &assoc.ref_id));
        match pos {
            Some(pos) => self.list_items[pos] = assoc,
            None => self.list_items.push(assoc),
        }
    }

    /// Remove the first association with the identity of `assoc` (see
    /// [`Association::same_identity`]). Persisted associations are queued
    /// for deletion; unsaved ones are simply dropped.
    pub fn delete_list_item(&mut self, assoc: &Association) -> Option<Association> {
        let pos = self.list_items.iter().position(|a| a.same_identity(assoc))?;
        let removed = self.list_items.remove(pos);
        if removed.id.is_some() {
            self.deleted.push(removed.clone());
        }
        Some(removed)
    }

    /// Remove several associations; see [`Item::delete_list_item`].
    pub fn delete_list_items<'a>(&mut self, assocs: impl IntoIterator<Item = &'a Association>) {
        for assoc in assocs {
            self.delete_list_item(assoc);
        }
    }

    /// Associations removed since load that the store still has to delete.
    #[must_use]
    pub fn deleted_list_items(&self) -> &[Association] {
        &self.deleted
    }

    /// Drain the deletion queue, typically after the store has applied it.
    pub fn take_deleted_list_items(&mut self) -> Vec<Association> {
        std::mem::take(&mut self.deleted)
    }

    /// Record a completed write: unsaved associations receive ids from
    /// `next_id` and the drained deletion queue is returned.
    pub fn mark_persisted(&mut self, mut next_id: impl FnMut() -> String) -> Vec<Association> {
        for assoc in self.list_items.iter_mut().filter(|a| a.id.is_none()) {
            assoc.id = Some(next_id());
        }
        self.take_deleted_list_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product() -> Item {
        Item::new(ResourceType::Product, "shirt-01")
    }

    #[test]
    fn ensure_lists_rejects_stock() {
        let item = Item::new(ResourceType::Stock, "s-1");
        let err = item.ensure_lists().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidItemKind {
                resource: ResourceType::Stock
            }
        ));
    }

    #[test]
    fn add_list_item_upserts_same_slot() {
        let mut item = product();
        item.add_list_item(Association::new("product").with_ref_id("p-1"));
        item.add_list_item(
            Association::new("product")
                .with_ref_id("p-1")
                .with_attribute("product.x", "1"),
        );

        assert_eq!(item.all_list_items().len(), 1);
        assert_eq!(item.all_list_items()[0].attributes["product.x"], "1");
    }

    #[test]
    fn add_list_item_keeps_types_apart() {
        let item = product()
            .with_list_item(Association::new("product").with_ref_id("p-1"))
            .with_list_item(
                Association::new("product")
                    .with_kind("suggestion")
                    .with_ref_id("p-1"),
            );

        assert_eq!(item.list_items("product").count(), 2);
        assert_eq!(item.list_items_of_type("product", "suggestion").count(), 1);
        assert!(item.list_item("product", "suggestion", "p-1").is_some());
        assert!(item.list_item("product", "bought-together", "p-1").is_none());
    }

    #[test]
    fn list_items_filters_domain_in_natural_order() {
        let item = product()
            .with_list_item(Association::new("product").with_ref_id("p-1"))
            .with_list_item(Association::new("text").with_ref_id("t-1"))
            .with_list_item(Association::new("product").with_ref_id("p-2"));

        let refs: Vec<_> = item.list_items("product").map(|a| a.ref_id.as_str()).collect();
        assert_eq!(refs, vec!["p-1", "p-2"]);
    }

    #[test]
    fn delete_queues_only_persisted() {
        let saved = Association::new("product").with_id("l-1").with_ref_id("p-1");
        let unsaved = Association::new("product").with_ref_id("p-2");
        let mut item = product()
            .with_list_item(saved.clone())
            .with_list_item(unsaved.clone());

        item.delete_list_items([&saved, &unsaved]);

        assert!(item.all_list_items().is_empty());
        assert_eq!(item.deleted_list_items().len(), 1);
        assert_eq!(item.deleted_list_items()[0].id.as_deref(), Some("l-1"));

        let drained = item.take_deleted_list_items();
        assert_eq!(drained.len(), 1);
        assert!(item.deleted_list_items().is_empty());
    }

    #[test]
    fn delete_removes_only_the_matching_duplicate() {
        let first = Association::new("product").with_id("l-1").with_ref_id("p-1");
        let second = Association::new("product").with_id("l-2").with_ref_id("p-1");
        let mut item: Item = serde_json::from_value(serde_json::json!({
            "id": "1",
            "resource": "product",
            "code": "shirt-01",
            "list_items": [first.clone(), second.clone()],
        }))
        .unwrap();

        item.delete_list_item(&second);

        assert_eq!(item.all_list_items(), [first].as_slice());
        assert_eq!(item.deleted_list_items()[0].id.as_deref(), Some("l-2"));
    }

    #[test]
    fn mark_persisted_assigns_ids_and_drains_queue() {
        let saved = Association::new("product").with_id("l-1").with_ref_id("p-1");
        let mut item = product()
            .with_list_item(saved.clone())
            .with_list_item(Association::new("product").with_ref_id("p-2"));
        item.delete_list_item(&saved);

        let mut seq = 10;
        let deleted = item.mark_persisted(|| {
            seq += 1;
            format!("l-{seq}")
        });

        assert_eq!(deleted.len(), 1);
        assert_eq!(item.all_list_items()[0].id.as_deref(), Some("l-11"));
        assert!(item.deleted_list_items().is_empty());
    }

    #[test]
    fn delete_missing_association_is_noop() {
        let mut item = product().with_list_item(Association::new("product").with_ref_id("p-1"));
        let absent = Association::new("product").with_ref_id("p-9");
        assert!(item.delete_list_item(&absent).is_none());
        assert_eq!(item.all_list_items().len(), 1);
    }
}
