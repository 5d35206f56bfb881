use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_LIST_TYPE;

/// A typed link from an item to one record of the target-kind (`domain`).
///
/// `attributes` holds the pass-through values of the declaration that produced
/// the link, keyed `<domain>.<attribute-name>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Association {
    /// Storage id. `None` until the owning item is persisted.
    pub id: Option<String>,
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ref_id: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Association {
    /// A fresh, unsaved association of the default type with no target.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            id: None,
            domain: domain.into(),
            kind: DEFAULT_LIST_TYPE.to_string(),
            ref_id: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = ref_id.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this association lives at the given slot.
    #[must_use]
    pub fn is_at(&self, domain: &str, kind: &str, ref_id: &str) -> bool {
        self.domain == domain && self.kind == kind && self.ref_id == ref_id
    }

    /// Whether `other` is the same stored association: equal ids once
    /// persisted, identical contents while unsaved.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self == other,
            _ => false,
        }
    }

    /// Replace the pass-through attributes wholesale.
    pub fn set_attributes(&mut self, attributes: BTreeMap<String, String>) {
        self.attributes = attributes;
    }
}
