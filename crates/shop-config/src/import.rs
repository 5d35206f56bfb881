//! List import configuration.

use serde::{Deserialize, Serialize};
use shop_core::DEFAULT_LIST_TYPE;
use shop_core::declaration::DeclarationFormat;

use crate::ConfigError;

fn default_node_name() -> String {
    "productitem".to_string()
}

fn default_ref_attribute() -> String {
    "ref".to_string()
}

fn default_type_attribute() -> String {
    "lists.type".to_string()
}

fn default_list_type() -> String {
    DEFAULT_LIST_TYPE.to_string()
}

/// Names used to recognise declaration nodes in an import fragment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListImportConfig {
    /// Node name of a declaration.
    #[serde(default = "default_node_name")]
    pub node_name: String,

    /// Attribute holding the reference code of the target record.
    #[serde(default = "default_ref_attribute")]
    pub ref_attribute: String,

    /// Attribute holding the association type.
    #[serde(default = "default_type_attribute")]
    pub type_attribute: String,

    /// Association type used when a declaration names none.
    #[serde(default = "default_list_type")]
    pub default_type: String,
}

impl Default for ListImportConfig {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            ref_attribute: default_ref_attribute(),
            type_attribute: default_type_attribute(),
            default_type: default_list_type(),
        }
    }
}

impl ListImportConfig {
    /// Reject empty names; an empty node or attribute name would match nothing
    /// and silently prune every association.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("import.node_name", &self.node_name),
            ("import.ref_attribute", &self.ref_attribute),
            ("import.type_attribute", &self.type_attribute),
            ("import.default_type", &self.default_type),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The declaration format the reconciler reads nodes with.
    #[must_use]
    pub fn declaration_format(&self) -> DeclarationFormat {
        DeclarationFormat {
            node_name: self.node_name.clone(),
            ref_attribute: self.ref_attribute.clone(),
            type_attribute: self.type_attribute.clone(),
            default_type: self.default_type.clone(),
        }
    }
}
