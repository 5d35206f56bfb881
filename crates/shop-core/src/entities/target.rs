use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lookup-only view of a linked record, e.g. a product found by its code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TargetEntity {
    pub id: String,
    pub code: String,
}

impl TargetEntity {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
        }
    }
}
