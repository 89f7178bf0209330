//! `chaintrack-suppliers` — supplier records.

pub mod supplier;

pub use supplier::{Supplier, SupplierDraft};
