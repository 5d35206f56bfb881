//! Resource types of catalog items.
//!
//! Serialized in `snake_case`, the same form used as attribute namespace
//! prefix and as the search field prefix (`product.code`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of record an `Item` represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Attribute,
    Catalog,
    Customer,
    Media,
    Price,
    Product,
    Service,
    Supplier,
    Text,
    Coupon,
    Locale,
    Order,
    Stock,
    Tag,
}

impl ResourceType {
    /// Whether items of this type own a list of associations.
    #[must_use]
    pub const fn supports_lists(self) -> bool {
        match self {
            Self::Attribute
            | Self::Catalog
            | Self::Customer
            | Self::Media
            | Self::Price
            | Self::Product
            | Self::Service
            | Self::Supplier
            | Self::Text => true,
            Self::Coupon | Self::Locale | Self::Order | Self::Stock | Self::Tag => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Catalog => "catalog",
            Self::Customer => "customer",
            Self::Media => "media",
            Self::Price => "price",
            Self::Product => "product",
            Self::Service => "service",
            Self::Supplier => "supplier",
            Self::Text => "text",
            Self::Coupon => "coupon",
            Self::Locale => "locale",
            Self::Order => "order",
            Self::Stock => "stock",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
