//! In-memory backend for the store collaborators.
//!
//! Holds the records of one target-kind, counts searches and remembers the
//! last one so callers can check how lookups were batched.

use std::cell::{Cell, RefCell};

use shop_core::{Association, Item, TargetEntity};

use crate::error::StoreError;
use crate::search::Search;
use crate::store::{AssociationFactory, EntitySearcher};

#[derive(Debug, Default)]
pub struct MemoryStore {
    domain: String,
    entities: Vec<TargetEntity>,
    failure: Option<String>,
    searches: Cell<usize>,
    last_search: RefCell<Option<Search>>,
    next_id: Cell<u64>,
}

impl MemoryStore {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_entity(mut self, entity: TargetEntity) -> Self {
        self.entities.push(entity);
        self
    }

    #[must_use]
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = TargetEntity>) -> Self {
        self.entities.extend(entities);
        self
    }

    /// Make every search fail with `StoreError::Unavailable(reason)`.
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Number of searches run so far.
    #[must_use]
    pub fn search_count(&self) -> usize {
        self.searches.get()
    }

    #[must_use]
    pub fn last_search(&self) -> Option<Search> {
        self.last_search.borrow().clone()
    }

    /// Write `item`: unsaved associations get ids, the deletion queue is
    /// applied and returned.
    pub fn save(&self, item: &mut Item) -> Vec<Association> {
        let deleted = item.mark_persisted(|| {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            format!("lst-{id}")
        });
        tracing::debug!(
            code = %item.code,
            deleted = deleted.len(),
            "saved item list associations"
        );
        deleted
    }

    fn field_value<'a>(&self, entity: &'a TargetEntity, field: &str) -> Option<&'a str> {
        let column = field.strip_prefix(self.domain.as_str())?.strip_prefix('.')?;
        match column {
            "code" => Some(entity.code.as_str()),
            "id" => Some(entity.id.as_str()),
            _ => None,
        }
    }
}

impl AssociationFactory for MemoryStore {
    fn create_item(&self, domain: &str) -> Association {
        Association::new(domain)
    }
}

impl EntitySearcher for MemoryStore {
    fn search(&self, search: &Search) -> Result<Vec<TargetEntity>, StoreError> {
        self.searches.set(self.searches.get() + 1);
        self.last_search.replace(Some(search.clone()));

        if let Some(reason) = &self.failure {
            return Err(StoreError::Unavailable(reason.clone()));
        }

        let mut found = Vec::new();
        for entity in &self.entities {
            let mut keep = true;
            for cond in &search.conditions {
                let value = self
                    .field_value(entity, &cond.field)
                    .ok_or_else(|| StoreError::Search(format!("unknown field '{}'", cond.field)))?;
                keep &= cond.matches(value);
            }
            if keep {
                found.push(entity.clone());
            }
        }

        Ok(found
            .into_iter()
            .skip(search.start)
            .take(search.size)
            .collect())
    }
}
