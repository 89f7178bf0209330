//! `chaintrack-inventory` — inventory item records.

pub mod item;

pub use item::{InventoryItem, ItemDraft};
