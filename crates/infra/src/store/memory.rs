//! In-memory stores for tests and development.

use std::sync::RwLock;

use async_trait::async_trait;

use chaintrack_activity::ActivityLogEntry;
use chaintrack_auth::User;
use chaintrack_core::Record;

use super::contract::{ActivityStore, Page, RecordStore, StoreError, StoreResult, UserStore};

fn poisoned() -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

/// Insertion-ordered in-memory record store.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    inner: RwLock<Vec<R>>,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    async fn list(&self, page: Page) -> StoreResult<Vec<R>> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: R::Id) -> StoreResult<Option<R>> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: R) -> StoreResult<R> {
        let mut records = self.inner.write().map_err(|_| poisoned())?;
        records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, record: R) -> StoreResult<Option<R>> {
        let mut records = self.inner.write().map_err(|_| poisoned())?;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

/// In-memory credential store with unique-email enforcement.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.inner.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> StoreResult<User> {
        let mut users = self.inner.write().map_err(|_| poisoned())?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("email".to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory append-only activity trail.
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    inner: RwLock<Vec<ActivityLogEntry>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn append(&self, entry: ActivityLogEntry) -> StoreResult<ActivityLogEntry> {
        let mut entries = self.inner.write().map_err(|_| poisoned())?;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self, page: Page) -> StoreResult<Vec<ActivityLogEntry>> {
        let entries = self.inner.read().map_err(|_| poisoned())?;
        Ok(entries
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chaintrack_core::{ItemId, LogEntryId, UserId};
    use chaintrack_inventory::{InventoryItem, ItemDraft};
    use chrono::Utc;

    fn item(name: &str) -> InventoryItem {
        let draft = ItemDraft {
            product_name: name.to_string(),
            description: None,
            quantity: 1,
            unit_price: 1.0,
            category: None,
            location: None,
        };
        InventoryItem::create(ItemId::new(), draft, Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_pages() {
        let store = InMemoryStore::new();
        for name in ["a", "b", "c", "d"] {
            store.insert(item(name)).await.unwrap();
        }

        let all = store.list(Page::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|i| i.product_name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);

        let window = store.list(Page::new(1, 2)).await.unwrap();
        let names: Vec<_> = window.iter().map(|i| i.product_name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[tokio::test]
    async fn get_finds_inserted_record() {
        let store = InMemoryStore::new();
        let stored = store.insert(item("bolt")).await.unwrap();

        let found = store.get(stored.id).await.unwrap();
        assert_eq!(found, Some(stored));

        let missing = store.get(ItemId::new()).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn replace_refuses_to_create() {
        let store = InMemoryStore::new();
        let never_stored = item("ghost");

        let outcome = store.replace(never_stored).await.unwrap();
        assert_eq!(outcome, None);
        assert!(store.list(Page::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_swaps_record_in_place() {
        let store = InMemoryStore::new();
        store.insert(item("first")).await.unwrap();
        let second = store.insert(item("second")).await.unwrap();

        let updated = second
            .replace_with(
                ItemDraft {
                    product_name: "second, revised".to_string(),
                    description: None,
                    quantity: 9,
                    unit_price: 2.0,
                    category: None,
                    location: None,
                },
                Utc::now(),
            )
            .unwrap();
        store.replace(updated.clone()).await.unwrap();

        let all = store.list(Page::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], updated);
    }

    #[tokio::test]
    async fn user_store_rejects_duplicate_email() {
        let store = InMemoryUserStore::new();
        let user = User::register(UserId::new(), "a@b.com", "pw", Utc::now()).unwrap();
        store.insert(user).await.unwrap();

        let again = User::register(UserId::new(), "A@B.com", "other", Utc::now()).unwrap();
        let err = store.insert(again).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));

        let found = store.find_by_email("a@b.com").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn activity_trail_appends_in_order() {
        let store = InMemoryActivityStore::new();
        let user_id = UserId::new();
        for action in ["logged in", "created order"] {
            let entry =
                ActivityLogEntry::record(LogEntryId::new(), user_id, action, Utc::now()).unwrap();
            store.append(entry).await.unwrap();
        }

        let entries = store.list(Page::default()).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "logged in");
        assert_eq!(entries[1].action, "created order");
    }
}
