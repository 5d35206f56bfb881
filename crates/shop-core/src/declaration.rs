//! Declarations: desired associations read from fragment nodes.

use std::collections::BTreeMap;

use crate::DEFAULT_LIST_TYPE;
use crate::fragment::Node;

/// Names that identify a declaration node and its control attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationFormat {
    /// Node name of a declaration, e.g. `productitem`.
    pub node_name: String,
    /// Attribute carrying the reference code.
    pub ref_attribute: String,
    /// Attribute carrying the association type.
    pub type_attribute: String,
    /// Type used when `type_attribute` is absent.
    pub default_type: String,
}

impl Default for DeclarationFormat {
    fn default() -> Self {
        Self {
            node_name: "productitem".to_string(),
            ref_attribute: "ref".to_string(),
            type_attribute: "lists.type".to_string(),
            default_type: DEFAULT_LIST_TYPE.to_string(),
        }
    }
}

impl DeclarationFormat {
    /// Whether `node` is a declaration node.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        node.name == self.node_name
    }

    /// Reference code of a declaration node, `None` for other nodes or when
    /// the reference attribute is missing.
    #[must_use]
    pub fn code_of<'a>(&self, node: &'a Node) -> Option<&'a str> {
        if self.matches(node) {
            node.attribute(&self.ref_attribute)
        } else {
            None
        }
    }
}

/// One desired association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub code: String,
    pub kind: String,
    /// Every attribute of the source node, control attributes included.
    pub attributes: BTreeMap<String, String>,
}

impl Declaration {
    /// Read a declaration from `node`.
    ///
    /// Returns `None` for nodes of another name and for declaration nodes
    /// without a reference code.
    #[must_use]
    pub fn from_node(node: &Node, format: &DeclarationFormat) -> Option<Self> {
        let code = format.code_of(node)?;
        let kind = node
            .attribute(&format.type_attribute)
            .unwrap_or(&format.default_type);

        Some(Self {
            code: code.to_string(),
            kind: kind.to_string(),
            attributes: node.attributes.clone(),
        })
    }

    /// Attributes keyed `<domain>.<name>` as stored on an association.
    #[must_use]
    pub fn namespaced_attributes(&self, domain: &str) -> BTreeMap<String, String> {
        self.attributes
            .iter()
            .map(|(name, value)| (format!("{domain}.{name}"), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_code_type_and_attributes() {
        let node = Node::new("productitem")
            .attr("ref", "SKU-1")
            .attr("lists.type", "suggestion")
            .attr("lists.position", "2");

        let decl = Declaration::from_node(&node, &DeclarationFormat::default()).unwrap();
        assert_eq!(decl.code, "SKU-1");
        assert_eq!(decl.kind, "suggestion");
        assert_eq!(decl.attributes.len(), 3);
    }

    #[test]
    fn missing_type_falls_back_to_default() {
        let node = Node::new("productitem").attr("ref", "SKU-1");
        let decl = Declaration::from_node(&node, &DeclarationFormat::default()).unwrap();
        assert_eq!(decl.kind, "default");
    }

    #[test]
    fn other_node_names_are_not_declarations() {
        let node = Node::new("textitem").attr("ref", "SKU-1");
        assert!(Declaration::from_node(&node, &DeclarationFormat::default()).is_none());
    }

    #[test]
    fn missing_ref_is_not_a_declaration() {
        let node = Node::new("productitem").attr("lists.type", "default");
        assert!(Declaration::from_node(&node, &DeclarationFormat::default()).is_none());
    }

    #[test]
    fn namespacing_keeps_control_attributes() {
        let node = Node::new("productitem")
            .attr("ref", "SKU-1")
            .attr("lists.type", "default");
        let decl = Declaration::from_node(&node, &DeclarationFormat::default()).unwrap();

        let attrs = decl.namespaced_attributes("product");
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["product.lists.type", "product.ref"]);
        assert_eq!(attrs["product.ref"], "SKU-1");
    }
}
