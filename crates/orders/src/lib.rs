//! `chaintrack-orders` — purchase order records.

pub mod order;

pub use order::{Order, OrderDraft, OrderLine, OrderStatus};
