//! Storage contracts shared by every backend.

use async_trait::async_trait;
use thiserror::Error;

use chaintrack_activity::ActivityLogEntry;
use chaintrack_auth::User;
use chaintrack_core::Record;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error.
///
/// Infrastructure failures only; missing records are expressed as `None`
/// so the caller decides what absence means.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    #[error("duplicate {0}")]
    Duplicate(String),

    /// The backing store could not be reached or answered incoherently.
    /// Fatal for the request; never retried.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Offset/limit pagination window for list reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
        }
    }
}

/// Generic list/get/insert/replace storage over one record type.
///
/// Identity and timestamps are assigned by the domain constructors before
/// a record reaches the store; `insert` persists what it is given.
/// `replace` is keyed by `record.id()` and MUST NOT create: absence is
/// reported as `Ok(None)`.
///
/// `list` returns records in creation order.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn list(&self, page: Page) -> StoreResult<Vec<R>>;
    async fn get(&self, id: R::Id) -> StoreResult<Option<R>>;
    async fn insert(&self, record: R) -> StoreResult<R>;
    async fn replace(&self, record: R) -> StoreResult<Option<R>>;
}

/// Credential store: user records looked up by normalized email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Persist a new account. Fails with [`StoreError::Duplicate`] when the
    /// email is already registered.
    async fn insert(&self, user: User) -> StoreResult<User>;
}

/// Append-only activity audit trail.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn append(&self, entry: ActivityLogEntry) -> StoreResult<ActivityLogEntry>;
    async fn list(&self, page: Page) -> StoreResult<Vec<ActivityLogEntry>>;
}
