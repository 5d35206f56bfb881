//! # shop-core
//!
//! Core types shared by the catalog import crates.
//!
//! This crate provides:
//! - The subject `Item` and the `Association` list links it owns
//! - `TargetEntity`, the lookup-only view of a linked record
//! - `Node` and `Fragment`, the already-parsed document input
//! - `Declaration`, one desired association read from a fragment
//! - `ResourceType` and the cross-cutting `CoreError`

pub mod declaration;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fragment;

pub use declaration::Declaration;
pub use entities::{Association, Item, TargetEntity};
pub use enums::ResourceType;
pub use errors::CoreError;
pub use fragment::{Fragment, Node};

/// Association type used when a declaration does not name one.
pub const DEFAULT_LIST_TYPE: &str = "default";
