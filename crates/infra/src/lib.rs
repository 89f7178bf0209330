//! `chaintrack-infra` — storage contracts and their implementations.
//!
//! The API layer only sees the trait objects in [`store::contract`];
//! in-memory stores back tests and development, the Postgres stores (cargo
//! feature `postgres`) back deployments.

pub mod store;

pub use store::contract::{
    ActivityStore, Page, RecordStore, StoreError, StoreResult, UserStore,
};
pub use store::memory::{InMemoryActivityStore, InMemoryStore, InMemoryUserStore};
#[cfg(feature = "postgres")]
pub use store::postgres::{
    PostgresActivityStore, PostgresInventoryStore, PostgresOrderStore, PostgresSupplierStore,
    PostgresUserStore, ensure_schema,
};
