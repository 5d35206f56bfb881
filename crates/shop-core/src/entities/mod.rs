//! Entity structs for catalog items and their list links.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so a
//! pipeline can log or persist them as JSON.

mod association;
mod item;
mod target;

pub use association::Association;
pub use item::Item;
pub use target::TargetEntity;
