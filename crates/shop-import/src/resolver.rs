//! Reference code to target record resolution.

use std::collections::{BTreeSet, HashMap};

use shop_core::declaration::DeclarationFormat;
use shop_core::{Fragment, TargetEntity};

use crate::error::StoreError;
use crate::search::{Condition, Operator, Search};
use crate::store::EntitySearcher;

/// Resolve the reference codes of all declaration nodes in `fragment` with a
/// single search, sliced to the number of distinct codes.
///
/// Codes without a matching record are absent from the result.
///
/// # Errors
///
/// Returns the searcher's `StoreError` unchanged.
pub fn resolve_codes(
    searcher: &dyn EntitySearcher,
    domain: &str,
    fragment: &Fragment,
    format: &DeclarationFormat,
) -> Result<HashMap<String, TargetEntity>, StoreError> {
    let codes: BTreeSet<&str> = fragment.iter().filter_map(|n| format.code_of(n)).collect();

    let search = Search::new().slice(0, codes.len()).condition(Condition::compare(
        Operator::Eq,
        format!("{domain}.code"),
        codes.iter().copied(),
    ));

    let found = searcher.search(&search)?;
    tracing::debug!(
        domain,
        requested = codes.len(),
        found = found.len(),
        "resolved reference codes"
    );

    Ok(found
        .into_iter()
        .filter(|entity| codes.contains(entity.code.as_str()))
        .map(|entity| (entity.code.clone(), entity))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use pretty_assertions::assert_eq;
    use shop_core::Node;

    fn store() -> MemoryStore {
        MemoryStore::new("product")
            .with_entity(TargetEntity::new("1", "SKU-A"))
            .with_entity(TargetEntity::new("2", "SKU-B"))
            .with_entity(TargetEntity::new("3", "SKU-C"))
    }

    #[test]
    fn resolves_known_codes_and_drops_unknown() {
        let store = store();
        let fragment = Fragment::new(vec![
            Node::new("productitem").attr("ref", "SKU-A"),
            Node::new("productitem").attr("ref", "SKU-X"),
        ]);

        let map = resolve_codes(&store, "product", &fragment, &DeclarationFormat::default())
            .unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map["SKU-A"].id, "1");
        assert!(!map.contains_key("SKU-X"));
    }

    #[test]
    fn one_search_sliced_to_distinct_codes() {
        let store = store();
        let fragment = Fragment::new(vec![
            Node::new("productitem").attr("ref", "SKU-A"),
            Node::new("productitem").attr("ref", "SKU-A").attr("lists.type", "x"),
            Node::new("productitem").attr("ref", "SKU-B"),
            Node::new("textitem").attr("ref", "SKU-C"),
            Node::new("productitem"),
        ]);

        resolve_codes(&store, "product", &fragment, &DeclarationFormat::default()).unwrap();

        assert_eq!(store.search_count(), 1);
        let search = store.last_search().unwrap();
        assert_eq!(search.start, 0);
        assert_eq!(search.size, 2);
        assert_eq!(search.conditions[0].field, "product.code");
        assert_eq!(search.conditions[0].values, vec!["SKU-A", "SKU-B"]);
    }

    #[test]
    fn empty_fragment_still_searches_once() {
        let store = store();
        let map = resolve_codes(
            &store,
            "product",
            &Fragment::default(),
            &DeclarationFormat::default(),
        )
        .unwrap();

        assert!(map.is_empty());
        assert_eq!(store.search_count(), 1);
        assert_eq!(store.last_search().unwrap().size, 0);
    }
}
